use std::path::PathBuf;

use winit::dpi::LogicalSize;

use crate::lesson::Lesson;

/// GPU context options.
#[derive(Debug, Clone)]
pub struct GpuConfig {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// FIFO waits for vertical blank and is supported everywhere.
    pub present_mode: wgpu::PresentMode,

    pub desired_maximum_frame_latency: u32,

    /// Request push constants of this many bytes. Zero disables the feature.
    pub push_constant_size: u32,
}

impl Default for GpuConfig {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
            push_constant_size: 0,
        }
    }
}

/// Everything a lesson binary needs to open its window and find its shaders.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub lesson: Lesson,
    pub title: String,
    pub size: LogicalSize<f64>,
    /// Directory holding the combined `.shader` files.
    pub shader_dir: PathBuf,
    pub clear_color: wgpu::Color,
    pub gpu: GpuConfig,
}

impl RunConfig {
    pub fn for_lesson(lesson: Lesson) -> Self {
        let gpu = GpuConfig {
            push_constant_size: if lesson.animated_uniform().is_some() { 16 } else { 0 },
            ..Default::default()
        };

        Self {
            lesson,
            title: lesson.title(),
            size: LogicalSize::new(640.0, 480.0),
            shader_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/res/shaders")),
            clear_color: wgpu::Color::BLACK,
            gpu,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::for_lesson(Lesson::AnimatedQuad)
    }
}
