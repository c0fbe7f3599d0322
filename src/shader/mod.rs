//! Shader loading, compilation and GPU program creation.
//!
//! Sources are GLSL 450. Each stage is compiled to naga IR and validated on the
//! CPU first, so compile and link errors surface before any GPU object exists.

use std::fmt;

mod compile;
mod error;
mod program;
mod source;

pub use compile::{build_program, compile_stage, link, LinkedProgram, UniformLocation};
pub use error::ShaderError;
pub use program::ShaderProgram;
pub use source::{parse_shader, ShaderProgramSource};

/// A programmable pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderType {
    Vertex,
    Fragment,
}

impl ShaderType {
    pub(crate) fn naga_stage(self) -> naga::ShaderStage {
        match self {
            ShaderType::Vertex => naga::ShaderStage::Vertex,
            ShaderType::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderType::Vertex => f.write_str("vertex"),
            ShaderType::Fragment => f.write_str("fragment"),
        }
    }
}
