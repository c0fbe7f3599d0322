use std::fmt;
use std::path::Path;

use crate::model::Geometry;
use crate::shader::{parse_shader, ShaderError, ShaderProgramSource};

const TRIANGLE_VERTEX: &str = "\
#version 450 core
layout(location = 0) in vec2 position;
void main()
{
    gl_Position = vec4(position, 0.0, 1.0);
}
";

const TRIANGLE_FRAGMENT: &str = "\
#version 450 core
layout(location = 0) out vec4 color;
void main()
{
    color = vec4(1.0, 0.0, 0.0, 1.0);
}
";

/// The tutorial steps, each adding one feature to the previous one.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Lesson {
    /// Three vertices, inline shaders, `draw`.
    Triangle,
    /// Four vertices plus an index buffer, shaders from a file, `draw_indexed`.
    IndexedQuad,
    /// IndexedQuad with a colour uniform animated every frame.
    AnimatedQuad,
}

impl Lesson {
    pub fn geometry(self) -> Geometry {
        match self {
            Lesson::Triangle => Geometry::TRIANGLE,
            Lesson::IndexedQuad | Lesson::AnimatedQuad => Geometry::QUAD,
        }
    }

    /// Combined shader file name inside the shader directory, if any.
    pub fn shader_file(self) -> Option<&'static str> {
        match self {
            Lesson::Triangle => None,
            Lesson::IndexedQuad => Some("basic.shader"),
            Lesson::AnimatedQuad => Some("uniform.shader"),
        }
    }

    pub fn shader_source(self, shader_dir: &Path) -> Result<ShaderProgramSource, ShaderError> {
        match self.shader_file() {
            Some(file) => parse_shader(shader_dir.join(file)),
            None => Ok(ShaderProgramSource::new(TRIANGLE_VERTEX, TRIANGLE_FRAGMENT)),
        }
    }

    pub fn title(self) -> String {
        format!("Hello World - {self}")
    }

    /// Name of the uniform driven by the render loop.
    pub fn animated_uniform(self) -> Option<&'static str> {
        match self {
            Lesson::AnimatedQuad => Some("u_Color"),
            Lesson::Triangle | Lesson::IndexedQuad => None,
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lesson::Triangle => f.write_str("triangle"),
            Lesson::IndexedQuad => f.write_str("indexed quad"),
            Lesson::AnimatedQuad => f.write_str("animated quad"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::build_program;

    #[test]
    fn triangle_uses_inline_shaders() {
        let src = Lesson::Triangle.shader_source(Path::new("does/not/exist")).unwrap();
        assert!(build_program(&src).is_ok());
    }

    #[test]
    fn only_animated_quad_has_a_uniform() {
        assert_eq!(Lesson::AnimatedQuad.animated_uniform(), Some("u_Color"));
        assert_eq!(Lesson::IndexedQuad.animated_uniform(), None);
        assert_eq!(Lesson::Triangle.animated_uniform(), None);
    }

    #[test]
    fn titles_name_the_lesson() {
        assert_eq!(Lesson::Triangle.title(), "Hello World - triangle");
        assert_eq!(Lesson::AnimatedQuad.title(), "Hello World - animated quad");
    }

    #[test]
    fn quad_lessons_are_indexed() {
        assert!(Lesson::Triangle.geometry().indices.is_none());
        assert!(Lesson::IndexedQuad.geometry().indices.is_some());
        assert!(Lesson::AnimatedQuad.geometry().indices.is_some());
    }
}
