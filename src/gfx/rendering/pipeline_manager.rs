//! Render pipeline management for the figure program
//!
//! One WGSL program is compiled once; a pipeline is created up front for
//! every combination of primitive topology and depth testing the draw loop
//! can ask for, so nothing is created lazily in the frame path.

use std::collections::HashMap;
use wgpu::*;

use crate::{error::InitError, gfx::context::DrawMode, gfx::resources::TextureResource};

use super::vertex;

/// Identifies one of the precreated pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PipelineKey {
    pub topology: PrimitiveTopology,
    pub depth_test: bool,
}

impl PipelineKey {
    pub fn new(mode: DrawMode, depth_test: bool) -> Self {
        let topology = match mode {
            DrawMode::Strip => PrimitiveTopology::TriangleStrip,
            DrawMode::ListIndexed | DrawMode::ListNonIndexed => PrimitiveTopology::TriangleList,
        };
        Self {
            topology,
            depth_test,
        }
    }

    /// Every key the draw loop can produce.
    pub fn all() -> [PipelineKey; 4] {
        let strip = PrimitiveTopology::TriangleStrip;
        let list = PrimitiveTopology::TriangleList;
        [
            Self { topology: strip, depth_test: true },
            Self { topology: strip, depth_test: false },
            Self { topology: list, depth_test: true },
            Self { topology: list, depth_test: false },
        ]
    }
}

/// Configuration for creating a render pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub label: String,
    pub primitive_topology: PrimitiveTopology,
    pub depth_test: bool,
    pub color_format: TextureFormat,
}

impl PipelineConfig {
    pub fn new(color_format: TextureFormat) -> Self {
        Self {
            label: "Figure Pipeline".to_string(),
            primitive_topology: PrimitiveTopology::TriangleList,
            depth_test: true,
            color_format,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_owned();
        self
    }

    pub fn with_primitive_topology(mut self, topology: PrimitiveTopology) -> Self {
        self.primitive_topology = topology;
        self
    }

    pub fn with_depth_test(mut self, enabled: bool) -> Self {
        self.depth_test = enabled;
        self
    }

    /// Depth state for this config. The render pass always carries a depth
    /// attachment, so "no depth test" still declares the format but never
    /// rejects or writes a fragment.
    fn depth_stencil(&self) -> DepthStencilState {
        let (depth_write_enabled, depth_compare) = if self.depth_test {
            (true, CompareFunction::Less)
        } else {
            (false, CompareFunction::Always)
        };
        DepthStencilState {
            format: TextureResource::DEPTH_FORMAT,
            depth_write_enabled,
            depth_compare,
            stencil: StencilState::default(),
            bias: DepthBiasState::default(),
        }
    }
}

/// Owns the compiled program and its precreated pipelines.
pub struct PipelineManager {
    pipelines: HashMap<PipelineKey, RenderPipeline>,
}

impl PipelineManager {
    /// Compiles `source` and creates a pipeline for every [`PipelineKey`].
    ///
    /// # Errors
    /// [`InitError::ShaderCompileOrLinkFailed`] if the program fails
    /// validation or any pipeline cannot be created from it.
    pub fn new(
        device: &Device,
        source: &str,
        color_format: TextureFormat,
        bind_group_layouts: &[&BindGroupLayout],
    ) -> Result<Self, InitError> {
        device.push_error_scope(ErrorFilter::Validation);

        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("Figure Shader"),
            source: ShaderSource::Wgsl(source.into()),
        });

        let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Figure Pipeline Layout"),
            bind_group_layouts,
            push_constant_ranges: &[],
        });

        let pipelines = PipelineKey::all()
            .into_iter()
            .map(|key| {
                let config = PipelineConfig::new(color_format)
                    .with_label(&format!("{:?} depth={}", key.topology, key.depth_test))
                    .with_primitive_topology(key.topology)
                    .with_depth_test(key.depth_test);
                (key, Self::create_pipeline(device, &shader, &layout, &config))
            })
            .collect();

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(InitError::ShaderCompileOrLinkFailed(error.to_string()));
        }

        log::debug!("Created {} figure pipelines", PipelineKey::all().len());
        Ok(Self { pipelines })
    }

    fn create_pipeline(
        device: &Device,
        shader: &ShaderModule,
        layout: &PipelineLayout,
        config: &PipelineConfig,
    ) -> RenderPipeline {
        device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some(&config.label),
            layout: Some(layout),
            vertex: VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &vertex::buffer_layouts(),
                compilation_options: Default::default(),
            },
            fragment: Some(FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(ColorTargetState {
                    format: config.color_format,
                    blend: Some(BlendState::REPLACE),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: PrimitiveState {
                topology: config.primitive_topology,
                strip_index_format: None,
                front_face: FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(config.depth_stencil()),
            multisample: MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    pub fn get_pipeline(&self, key: PipelineKey) -> Option<&RenderPipeline> {
        self.pipelines.get(&key)
    }
}
