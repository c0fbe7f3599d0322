use std::fs;
use std::path::Path;

use super::{ShaderError, ShaderType};

const DIRECTIVE: &str = "#shader";

/// Vertex and fragment sources split out of a combined shader file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderProgramSource {
    pub vertex_source: String,
    pub fragment_source: String,
}

impl ShaderProgramSource {
    pub fn new(vertex: &str, fragment: &str) -> Self {
        Self {
            vertex_source: vertex.to_string(),
            fragment_source: fragment.to_string(),
        }
    }

    /// Splits combined shader text on `#shader vertex` / `#shader fragment` lines.
    ///
    /// Every other line is appended, newline-terminated, to the section selected
    /// by the most recent directive. Lines before the first directive belong to
    /// no stage and are dropped.
    pub fn parse(text: &str) -> Result<Self, ShaderError> {
        let mut sources = Self::default();
        let mut current: Option<ShaderType> = None;
        let mut dropped = 0usize;

        for (n, line) in text.lines().enumerate() {
            if line.contains(DIRECTIVE) {
                current = Some(directive_stage(line).ok_or_else(|| {
                    ShaderError::UnknownStage {
                        line: n + 1,
                        directive: line.trim().to_string(),
                    }
                })?);
                continue;
            }

            let section = match current {
                Some(ShaderType::Vertex) => &mut sources.vertex_source,
                Some(ShaderType::Fragment) => &mut sources.fragment_source,
                None => {
                    if !line.trim().is_empty() {
                        dropped += 1;
                    }
                    continue;
                }
            };

            section.push_str(line);
            section.push('\n');
        }

        if dropped > 0 {
            log::warn!("ignored {dropped} line(s) preceding the first {DIRECTIVE} directive");
        }

        Ok(sources)
    }
}

fn directive_stage(line: &str) -> Option<ShaderType> {
    if line.contains("vertex") {
        Some(ShaderType::Vertex)
    } else if line.contains("fragment") {
        Some(ShaderType::Fragment)
    } else {
        None
    }
}

/// Reads a combined shader file and splits it into its two stages.
pub fn parse_shader(path: impl AsRef<Path>) -> Result<ShaderProgramSource, ShaderError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("loaded shader file {}", path.display());
    ShaderProgramSource::parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMBINED: &str = "\
#shader vertex
#version 450 core
layout(location = 0) in vec2 position;
void main() {}

#shader fragment
#version 450 core
layout(location = 0) out vec4 color;
void main() {}
";

    #[test]
    fn splits_text_following_each_directive() {
        let src = ShaderProgramSource::parse(COMBINED).unwrap();
        assert_eq!(
            src.vertex_source,
            "#version 450 core\nlayout(location = 0) in vec2 position;\nvoid main() {}\n\n"
        );
        assert_eq!(
            src.fragment_source,
            "#version 450 core\nlayout(location = 0) out vec4 color;\nvoid main() {}\n"
        );
    }

    #[test]
    fn fragment_first_is_fine() {
        let text = "#shader fragment\nb\n#shader vertex\na\n";
        let src = ShaderProgramSource::parse(text).unwrap();
        assert_eq!(src.vertex_source, "a\n");
        assert_eq!(src.fragment_source, "b\n");
    }

    #[test]
    fn repeated_sections_append_in_order() {
        let text = "#shader vertex\n1\n#shader fragment\nx\n#shader vertex\n2\n";
        let src = ShaderProgramSource::parse(text).unwrap();
        assert_eq!(src.vertex_source, "1\n2\n");
        assert_eq!(src.fragment_source, "x\n");
    }

    #[test]
    fn content_before_first_directive_is_dropped() {
        let text = "// combined shader\n\n#shader vertex\nv\n#shader fragment\nf\n";
        let src = ShaderProgramSource::parse(text).unwrap();
        assert_eq!(src.vertex_source, "v\n");
        assert_eq!(src.fragment_source, "f\n");
    }

    #[test]
    fn crlf_line_endings_are_normalized() {
        let text = "#shader vertex\r\nv\r\n#shader fragment\r\nf\r\n";
        let src = ShaderProgramSource::parse(text).unwrap();
        assert_eq!(src.vertex_source, "v\n");
        assert_eq!(src.fragment_source, "f\n");
    }

    #[test]
    fn unknown_stage_reports_line() {
        let text = "#shader vertex\nv\n#shader geometry\ng\n";
        match ShaderProgramSource::parse(text) {
            Err(ShaderError::UnknownStage { line, directive }) => {
                assert_eq!(line, 3);
                assert_eq!(directive, "#shader geometry");
            }
            other => panic!("expected UnknownStage, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_gives_empty_sources() {
        assert_eq!(ShaderProgramSource::parse("").unwrap(), ShaderProgramSource::default());
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("hello_triangle_missing.shader");
        let _ = fs::remove_file(&path);

        match parse_shader(&path) {
            Err(ShaderError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("hello_triangle_{}.shader", std::process::id()));
        fs::write(&path, COMBINED).unwrap();

        let src = parse_shader(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(src, ShaderProgramSource::parse(COMBINED).unwrap());
    }
}
