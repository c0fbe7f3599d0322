use std::fmt;
use std::io;
use std::path::PathBuf;

use super::ShaderType;

/// Errors produced while loading, compiling or linking a shader program.
#[derive(Debug)]
pub enum ShaderError {
    /// The combined shader file could not be read.
    Io { path: PathBuf, source: io::Error },

    /// A `#shader` directive named neither `vertex` nor `fragment`.
    UnknownStage {
        /// 1-based line number of the directive.
        line: usize,
        directive: String,
    },

    /// A single stage failed to compile. `log` holds the compiler output.
    Compile { stage: ShaderType, log: String },

    /// The stages compiled but could not be combined into a program.
    Link { log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Io { path, source } => {
                write!(f, "failed to read shader file {}: {}", path.display(), source)
            }
            ShaderError::UnknownStage { line, directive } => {
                write!(f, "unknown shader stage at line {}: {:?}", line, directive)
            }
            ShaderError::Compile { stage, log } => {
                write!(f, "failed to compile {} shader:\n{}", stage, log)
            }
            ShaderError::Link { log } => write!(f, "failed to link shader program:\n{}", log),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
