// Great thanks to https://github.com/sotrh/learn-wgpu
// This code is modified

pub mod animation;
mod app;
pub mod config;
pub mod gpu;
pub mod lesson;
pub mod logging;
pub mod model;
pub mod shader;

use anyhow::{Context, Result};
use wgpu::util::DeviceExt;
use winit::{event_loop::EventLoop, window::Window};

use crate::animation::PingPong;
use crate::app::App;
use crate::config::RunConfig;
use crate::gpu::Gpu;
use crate::logging::LoggingConfig;
use crate::model::Vertex;
use crate::shader::{build_program, ShaderProgram, UniformLocation};

pub use crate::lesson::Lesson;

/// Everything needed to draw one lesson's frame.
pub struct State {
    gpu: Gpu,
    program: ShaderProgram,
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    draw_count: u32,
    clear_color: wgpu::Color,
    uniform: Option<UniformLocation>,
    red: PingPong,
}

impl State {
    pub fn new(gpu: Gpu, config: &RunConfig) -> Result<Self> {
        let lesson = config.lesson;
        let geometry = lesson.geometry();
        let device = gpu.device();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = geometry.indices.map(|indices| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        let source = lesson
            .shader_source(&config.shader_dir)
            .with_context(|| format!("failed to load shaders for the {lesson} lesson"))?;
        let linked = build_program(&source).context("failed to build shader program")?;
        let program = ShaderProgram::new(device, gpu.surface_format(), linked, Vertex::layout())
            .context("failed to create render pipeline")?;

        let uniform = lesson.animated_uniform().and_then(|name| {
            let location = program.uniform_location(name);
            debug_assert!(location.is_some(), "uniform {name} not found in program");
            if location.is_none() {
                log::warn!("uniform {name} not found in program; it will not be animated");
            }
            location
        });

        Ok(Self {
            gpu,
            program,
            vertex_buffer,
            index_buffer,
            draw_count: geometry.draw_count(),
            clear_color: config.clear_color,
            uniform,
            red: PingPong::default(),
        })
    }

    pub fn window(&self) -> &Window {
        self.gpu.window()
    }

    pub fn size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.gpu.size()
    }

    pub fn is_drawable(&self) -> bool {
        self.gpu.is_drawable()
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.gpu.resize(new_size);
    }

    /// Advances the animated uniform, if the lesson has one.
    pub fn update(&mut self) {
        if self.uniform.is_some() {
            self.red.step();
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let mut frame = self.gpu.begin_frame()?;

        {
            let mut render_pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.program.set_used(&mut render_pass);
            if let Some(location) = self.uniform {
                self.program.set_uniform_4f(
                    &mut render_pass,
                    location,
                    [self.red.value(), 0.3, 0.8, 1.0],
                );
            }

            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            match &self.index_buffer {
                Some(index_buffer) => {
                    render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    render_pass.draw_indexed(0..self.draw_count, 0, 0..1);
                }
                None => render_pass.draw(0..self.draw_count, 0..1),
            }
        }

        self.gpu.submit(frame);
        Ok(())
    }
}

/// Opens the lesson's window and renders until it is closed.
pub fn run(config: RunConfig) -> Result<()> {
    logging::init_logging(LoggingConfig::default());
    log::info!("running the {} lesson", config.lesson);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(config);

    event_loop
        .run_app(&mut app)
        .context("event loop terminated with error")?;

    app.finish()
}
