// src/wgpu_utils/uniform_buffer.rs
use std::marker::PhantomData;

use super::binding_types;

fn short_type_name<Content>() -> &'static str {
    let type_name = std::any::type_name::<Content>();
    match type_name.rfind(':') {
        Some(pos) => &type_name[(pos + 1)..],
        None => type_name,
    }
}

/// Single-value uniform buffer
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
    previous_content: Vec<u8>,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    /// Create a new uniform buffer
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("UniformBuffer: {}", short_type_name::<Content>())),
            size: std::mem::size_of::<Content>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        UniformBuffer {
            buffer,
            content_type: PhantomData,
            previous_content: Vec::new(),
        }
    }

    /// Update buffer content, skipping the write when nothing changed
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) {
        let new_content = bytemuck::bytes_of(&content);
        if self.previous_content == new_content {
            return;
        }
        queue.write_buffer(&self.buffer, 0, new_content);
        self.previous_content = new_content.to_vec();
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }
}

/// Array of uniform values addressed through a dynamic offset, one slot per
/// draw call.
///
/// Slots are padded to the device's `min_uniform_buffer_offset_alignment`.
/// The buffer grows (and its bind group is rebuilt) whenever a frame writes
/// more slots than it can hold.
pub struct DynamicUniformBuffer<Content> {
    buffer: wgpu::Buffer,
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    stride: u64,
    capacity: usize,
    staging: Vec<u8>,
    content_type: PhantomData<Content>,
}

impl<Content: bytemuck::Pod> DynamicUniformBuffer<Content> {
    pub fn new(device: &wgpu::Device, visibility: wgpu::ShaderStages, capacity: usize) -> Self {
        let alignment = u64::from(device.limits().min_uniform_buffer_offset_alignment);
        let size = std::mem::size_of::<Content>() as u64;
        let stride = wgpu::util::align_to(size, alignment);
        let capacity = capacity.max(1);

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!(
                "DynamicUniformBuffer<{}> Layout",
                short_type_name::<Content>()
            )),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility,
                ty: binding_types::dynamic_uniform(size),
                count: None,
            }],
        });
        let buffer = Self::create_buffer(device, stride, capacity);
        let bind_group = Self::create_bind_group(device, &layout, &buffer, size);

        Self {
            buffer,
            layout,
            bind_group,
            stride,
            capacity,
            staging: Vec::new(),
            content_type: PhantomData,
        }
    }

    fn create_buffer(device: &wgpu::Device, stride: u64, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!(
                "DynamicUniformBuffer<{}>",
                short_type_name::<Content>()
            )),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
        size: u64,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!(
                "DynamicUniformBuffer<{}> Bind Group",
                short_type_name::<Content>()
            )),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(size),
                }),
            }],
        })
    }

    /// Uploads `items` into consecutive slots, growing the buffer if needed.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, items: &[Content]) {
        if items.is_empty() {
            return;
        }

        if items.len() > self.capacity {
            let capacity = items.len().next_power_of_two();
            log::debug!(
                "Growing {} from {} to {} slots",
                short_type_name::<Content>(),
                self.capacity,
                capacity
            );
            self.buffer = Self::create_buffer(device, self.stride, capacity);
            self.bind_group = Self::create_bind_group(
                device,
                &self.layout,
                &self.buffer,
                std::mem::size_of::<Content>() as u64,
            );
            self.capacity = capacity;
        }

        let stride = self.stride as usize;
        self.staging.clear();
        self.staging.resize(stride * items.len(), 0);
        for (slot, item) in self.staging.chunks_exact_mut(stride).zip(items) {
            let bytes = bytemuck::bytes_of(item);
            slot[..bytes.len()].copy_from_slice(bytes);
        }
        queue.write_buffer(&self.buffer, 0, &self.staging);
    }

    /// Dynamic offset of `slot`, for `set_bind_group`.
    pub fn offset(&self, slot: usize) -> wgpu::DynamicOffset {
        (self.stride * slot as u64) as wgpu::DynamicOffset
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
