//! WGPU-based rendering engine
//!
//! Implements [`GraphicsContext`] on top of wgpu. The trait speaks in
//! immediate-mode terms (set a matrix, bind a buffer, draw), while wgpu wants
//! a complete render pass, so draw calls are captured as [`DrawPacket`]s
//! during the frame and encoded into a single pass when the frame is
//! presented.

use std::sync::Arc;

use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use crate::{
    error::InitError,
    gfx::{
        camera::camera_utils::convert_matrix4_to_array,
        context::{
            BufferHandle, DrawMode, GraphicsContext, UniformLocation, ATTRIB_COLOR,
            ATTRIB_POSITION, UNIFORM_MODEL, UNIFORM_PROJECTION, UNIFORM_VIEW,
        },
        resources::TextureResource,
    },
    wgpu_utils::{binding_types, DynamicUniformBuffer, UniformBuffer},
};

use super::pipeline_manager::{PipelineKey, PipelineManager};

const SHADER_SOURCE: &str = include_str!("figure.wgsl");

/// Matrix uniforms the figure program declares, indexed by
/// [`UniformLocation`].
const PROGRAM_UNIFORMS: [&str; 3] = [UNIFORM_VIEW, UNIFORM_PROJECTION, UNIFORM_MODEL];

/// Model slots allocated up front; the buffer grows past this on demand.
const INITIAL_MODEL_SLOTS: usize = 128;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniform {
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        let identity = convert_matrix4_to_array(Matrix4::from_scale(1.0));
        Self {
            view: identity,
            projection: identity,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
struct ModelUniform {
    model: [[f32; 4]; 4],
}

/// One recorded draw call with everything bound at the time it was issued.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DrawPacket {
    pipeline: PipelineKey,
    positions: BufferHandle,
    colors: BufferHandle,
    indices: Option<BufferHandle>,
    count: u32,
    model_slot: usize,
}

/// Immediate-mode state accumulated between [`clear`] and [`present`].
///
/// [`clear`]: GraphicsContext::clear
/// [`present`]: GraphicsContext::present
#[derive(Debug, Default)]
struct FrameRecorder {
    camera: CameraUniform,
    model: [[f32; 4]; 4],
    vertex_buffers: [Option<BufferHandle>; 2],
    index_buffer: Option<BufferHandle>,
    models: Vec<ModelUniform>,
    packets: Vec<DrawPacket>,
    cleared: bool,
}

impl FrameRecorder {
    fn set_uniform(&mut self, location: UniformLocation, matrix: &Matrix4<f32>) {
        let value = convert_matrix4_to_array(*matrix);
        match PROGRAM_UNIFORMS.get(location.0 as usize) {
            Some(&UNIFORM_VIEW) => self.camera.view = value,
            Some(&UNIFORM_PROJECTION) => self.camera.projection = value,
            Some(&UNIFORM_MODEL) => self.model = value,
            _ => log::warn!("Ignoring write to unknown uniform location {}", location.0),
        }
    }

    fn bind_vertex_buffer(&mut self, slot: u32, buffer: BufferHandle) {
        match self.vertex_buffers.get_mut(slot as usize) {
            Some(bound) => *bound = Some(buffer),
            None => log::warn!("Ignoring vertex buffer bound to unknown slot {slot}"),
        }
    }

    fn draw(&mut self, mode: DrawMode, count: u32, depth_test: bool) {
        let (Some(positions), Some(colors)) = (
            self.vertex_buffers[ATTRIB_POSITION as usize],
            self.vertex_buffers[ATTRIB_COLOR as usize],
        ) else {
            log::warn!("Skipping draw: position and color buffers must both be bound");
            return;
        };
        let indices = if mode.is_indexed() {
            match self.index_buffer {
                Some(indices) => Some(indices),
                None => {
                    log::warn!("Skipping indexed draw: no index buffer bound");
                    return;
                }
            }
        } else {
            None
        };

        self.models.push(ModelUniform { model: self.model });
        self.packets.push(DrawPacket {
            pipeline: PipelineKey::new(mode, depth_test),
            positions,
            colors,
            indices,
            count,
            model_slot: self.models.len() - 1,
        });
    }

    fn clear(&mut self) {
        self.models.clear();
        self.packets.clear();
        self.cleared = true;
    }

    /// Forgets the finished frame; bindings and uniforms persist.
    fn finish(&mut self) {
        self.models.clear();
        self.packets.clear();
        self.cleared = false;
    }
}

/// Core rendering engine managing GPU resources and draw calls
///
/// Owns the surface, device and queue, the depth buffer, the figure
/// pipelines and every buffer created through [`GraphicsContext`].
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    format: wgpu::TextureFormat,
    depth_texture: TextureResource,
    pipeline_manager: PipelineManager,
    camera_uniform: UniformBuffer<CameraUniform>,
    camera_bind_group: wgpu::BindGroup,
    model_uniforms: DynamicUniformBuffer<ModelUniform>,
    buffers: Vec<wgpu::Buffer>,
    clear_color: wgpu::Color,
    depth_test: bool,
    frame: FrameRecorder,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    ///
    /// # Errors
    /// [`InitError::ContextUnavailable`] when no surface, adapter or device
    /// can be obtained, [`InitError::ShaderCompileOrLinkFailed`] when the
    /// figure program is rejected.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<RenderEngine, InitError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .map_err(|e| InitError::ContextUnavailable(format!("surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| InitError::ContextUnavailable(format!("adapter: {e}")))?;
        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| InitError::ContextUnavailable(format!("device: {e}")))?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or_else(|| {
                InitError::ContextUnavailable("surface is incompatible with the adapter".into())
            })?;
        log::info!("Surface format: {format:?}");

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let camera_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Camera Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: binding_types::uniform(),
                count: None,
            }],
        });
        let camera_uniform = UniformBuffer::<CameraUniform>::new(&device);
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_uniform.binding_resource(),
            }],
        });

        let model_uniforms = DynamicUniformBuffer::<ModelUniform>::new(
            &device,
            wgpu::ShaderStages::VERTEX,
            INITIAL_MODEL_SLOTS,
        );

        let pipeline_manager = PipelineManager::new(
            &device,
            SHADER_SOURCE,
            format,
            &[&camera_layout, model_uniforms.layout()],
        )?;

        Ok(RenderEngine {
            surface,
            device: Arc::new(device),
            queue: Arc::new(queue),
            config,
            format,
            depth_texture,
            pipeline_manager,
            camera_uniform,
            camera_bind_group,
            model_uniforms,
            buffers: Vec::new(),
            clear_color: wgpu::Color::BLACK,
            depth_test: false,
            frame: FrameRecorder::default(),
        })
    }

    fn create_buffer(
        &mut self,
        label: &str,
        contents: &[u8],
        usage: wgpu::BufferUsages,
    ) -> Result<BufferHandle, InitError> {
        self.device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        let buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents,
                usage,
            });
        if let Some(error) = pollster::block_on(self.device.pop_error_scope()) {
            return Err(InitError::BufferCreationFailed {
                label: label.to_string(),
                reason: error.to_string(),
            });
        }

        self.buffers.push(buffer);
        Ok(BufferHandle(self.buffers.len() - 1))
    }

    fn buffer(&self, handle: BufferHandle) -> Option<&wgpu::Buffer> {
        self.buffers.get(handle.0)
    }

    /// Presents the recorded frame, letting `overlay` encode extra passes
    /// (the UI) on top of the scene before submission.
    ///
    /// A lost or outdated surface is reconfigured and the frame dropped;
    /// the next redraw renders normally.
    pub fn present_with<F>(&mut self, overlay: F)
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(error @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::warn!("Surface {error}; reconfiguring and skipping frame");
                self.surface.configure(&self.device, &self.config);
                self.frame.finish();
                return;
            }
            Err(error) => {
                log::error!("Failed to acquire surface texture: {error}");
                self.frame.finish();
                return;
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.camera_uniform
            .update_content(&self.queue, self.frame.camera);
        self.model_uniforms
            .write(&self.device, &self.queue, &self.frame.models);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let (color_load, depth_load) = if self.frame.cleared {
                (wgpu::LoadOp::Clear(self.clear_color), wgpu::LoadOp::Clear(1.0))
            } else {
                (wgpu::LoadOp::Load, wgpu::LoadOp::Load)
            };

            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Figure Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: color_load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: depth_load,
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

            for packet in &self.frame.packets {
                let Some(pipeline) = self.pipeline_manager.get_pipeline(packet.pipeline) else {
                    continue;
                };
                let (Some(positions), Some(colors)) =
                    (self.buffer(packet.positions), self.buffer(packet.colors))
                else {
                    log::warn!("Skipping draw with unknown vertex buffer");
                    continue;
                };

                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(
                    1,
                    self.model_uniforms.bind_group(),
                    &[self.model_uniforms.offset(packet.model_slot)],
                );
                render_pass.set_vertex_buffer(ATTRIB_POSITION, positions.slice(..));
                render_pass.set_vertex_buffer(ATTRIB_COLOR, colors.slice(..));

                match packet.indices.and_then(|handle| self.buffer(handle)) {
                    Some(indices) => {
                        render_pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
                        render_pass.draw_indexed(0..packet.count, 0, 0..1);
                    }
                    None if packet.indices.is_some() => {
                        log::warn!("Skipping draw with unknown index buffer");
                    }
                    None => render_pass.draw(0..packet.count, 0..1),
                }
            }
        }

        overlay(
            &self.device,
            &self.queue,
            &mut encoder,
            &surface_texture_view,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        self.frame.finish();
    }

    /// Resizes the surface and recreates the depth buffer
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
        log::debug!("Surface resized to {width}x{height}");
    }

    /// Returns current surface dimensions
    pub fn get_surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Returns the surface texture format
    ///
    /// Used for creating compatible render targets and UI systems.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }
}

impl GraphicsContext for RenderEngine {
    fn create_vertex_buffer(
        &mut self,
        label: &str,
        data: &[[f32; 3]],
    ) -> Result<BufferHandle, InitError> {
        self.create_buffer(label, bytemuck::cast_slice(data), wgpu::BufferUsages::VERTEX)
    }

    fn create_index_buffer(
        &mut self,
        label: &str,
        data: &[u32],
    ) -> Result<BufferHandle, InitError> {
        self.create_buffer(label, bytemuck::cast_slice(data), wgpu::BufferUsages::INDEX)
    }

    fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        PROGRAM_UNIFORMS
            .iter()
            .position(|uniform| *uniform == name)
            .map(|index| UniformLocation(index as u32))
    }

    fn set_uniform_matrix(&mut self, location: UniformLocation, matrix: &Matrix4<f32>) {
        self.frame.set_uniform(location, matrix);
    }

    fn set_clear_color(&mut self, color: [f32; 4]) {
        let [r, g, b, a] = color.map(f64::from);
        self.clear_color = wgpu::Color { r, g, b, a };
    }

    fn enable_depth_test(&mut self) {
        self.depth_test = true;
    }

    fn clear(&mut self) {
        self.frame.clear();
    }

    fn bind_vertex_buffer(&mut self, slot: u32, buffer: BufferHandle) {
        self.frame.bind_vertex_buffer(slot, buffer);
    }

    fn bind_index_buffer(&mut self, buffer: BufferHandle) {
        self.frame.index_buffer = Some(buffer);
    }

    fn draw(&mut self, mode: DrawMode, count: u32) {
        self.frame.draw(mode, count, self.depth_test);
    }

    fn present(&mut self) {
        self.present_with(|_, _, _, _| {});
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn location(name: &str) -> UniformLocation {
        let index = PROGRAM_UNIFORMS.iter().position(|u| *u == name).unwrap();
        UniformLocation(index as u32)
    }

    fn bound_recorder() -> FrameRecorder {
        let mut frame = FrameRecorder::default();
        frame.bind_vertex_buffer(ATTRIB_POSITION, BufferHandle(0));
        frame.bind_vertex_buffer(ATTRIB_COLOR, BufferHandle(1));
        frame
    }

    #[test]
    fn test_uniforms_route_to_their_slots() {
        let mut frame = FrameRecorder::default();
        let view = Matrix4::from_translation(Vector3::new(1.0, 0.0, 0.0));
        let projection = Matrix4::from_scale(2.0);
        let model = Matrix4::from_translation(Vector3::new(0.0, 0.0, 8.0));

        frame.set_uniform(location(UNIFORM_VIEW), &view);
        frame.set_uniform(location(UNIFORM_PROJECTION), &projection);
        frame.set_uniform(location(UNIFORM_MODEL), &model);

        assert_eq!(frame.camera.view, convert_matrix4_to_array(view));
        assert_eq!(frame.camera.projection, convert_matrix4_to_array(projection));
        assert_eq!(frame.model, convert_matrix4_to_array(model));
    }

    #[test]
    fn test_each_draw_snapshots_the_model_matrix() {
        let mut frame = bound_recorder();
        frame.clear();

        for z in [1.0, 2.0, 3.0] {
            let model = Matrix4::from_translation(Vector3::new(0.0, 0.0, z));
            frame.set_uniform(location(UNIFORM_MODEL), &model);
            frame.draw(DrawMode::ListNonIndexed, 3, true);
        }

        assert_eq!(frame.packets.len(), 3);
        for (slot, packet) in frame.packets.iter().enumerate() {
            assert_eq!(packet.model_slot, slot);
            assert_eq!(frame.models[slot].model[3][2], (slot + 1) as f32);
        }
    }

    #[test]
    fn test_indexed_draw_needs_index_buffer() {
        let mut frame = bound_recorder();
        frame.draw(DrawMode::ListIndexed, 36, true);
        assert!(frame.packets.is_empty());

        frame.index_buffer = Some(BufferHandle(2));
        frame.draw(DrawMode::ListIndexed, 36, true);
        assert_eq!(frame.packets[0].indices, Some(BufferHandle(2)));

        frame.draw(DrawMode::Strip, 4, true);
        assert_eq!(frame.packets[1].indices, None);
        assert_eq!(
            frame.packets[1].pipeline,
            PipelineKey::new(DrawMode::Strip, true)
        );
    }

    #[test]
    fn test_draw_without_vertex_buffers_is_skipped() {
        let mut frame = FrameRecorder::default();
        frame.bind_vertex_buffer(ATTRIB_POSITION, BufferHandle(0));
        frame.draw(DrawMode::ListNonIndexed, 3, false);
        assert!(frame.packets.is_empty());
        assert!(frame.models.is_empty());
    }

    #[test]
    fn test_finish_keeps_bindings() {
        let mut frame = bound_recorder();
        frame.clear();
        frame.draw(DrawMode::ListNonIndexed, 3, true);
        frame.finish();

        assert!(!frame.cleared);
        assert!(frame.packets.is_empty());
        frame.draw(DrawMode::ListNonIndexed, 3, true);
        assert_eq!(frame.packets.len(), 1);
    }
}
