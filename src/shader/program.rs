use std::borrow::Cow;

use super::{LinkedProgram, ShaderError, UniformLocation};

const ENTRY_POINT: &str = "main";
const UNIFORM_STAGES: wgpu::ShaderStages =
    wgpu::ShaderStages::VERTEX.union(wgpu::ShaderStages::FRAGMENT);

/// A linked program realised as a GPU render pipeline.
///
/// The per-stage shader modules only live until the pipeline is built; the
/// pipeline itself is released when the program is dropped.
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
    linked: LinkedProgram,
}

impl ShaderProgram {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        linked: LinkedProgram,
        vertex_layout: wgpu::VertexBufferLayout<'_>,
    ) -> Result<Self, ShaderError> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let vertex = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Vertex Shader"),
            source: wgpu::ShaderSource::Naga(Cow::Owned(linked.vertex_module().clone())),
        });
        let fragment = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Fragment Shader"),
            source: wgpu::ShaderSource::Naga(Cow::Owned(linked.fragment_module().clone())),
        });

        let push_constant_size = linked.push_constant_size();
        let push_constant_range = wgpu::PushConstantRange {
            stages: UNIFORM_STAGES,
            range: 0..push_constant_size,
        };
        let push_constant_ranges: &[wgpu::PushConstantRange] = if push_constant_size > 0 {
            std::slice::from_ref(&push_constant_range)
        } else {
            &[]
        };

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &vertex,
                entry_point: Some(ENTRY_POINT),
                buffers: &[vertex_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment,
                entry_point: Some(ENTRY_POINT),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            let log = err.to_string();
            log::error!("Failed to link shader program!\n{log}");
            return Err(ShaderError::Link { log });
        }

        log::debug!("render pipeline created ({push_constant_size} bytes of push constants)");
        Ok(Self { pipeline, linked })
    }

    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.linked.uniform_location(name)
    }

    pub fn set_used(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
    }

    pub fn set_uniform_4f(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        location: UniformLocation,
        value: [f32; 4],
    ) {
        pass.set_push_constants(UNIFORM_STAGES, location.offset, bytemuck::cast_slice(&value));
    }
}
