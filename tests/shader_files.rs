use std::path::PathBuf;

use hello_triangle::config::RunConfig;
use hello_triangle::shader::{build_program, parse_shader, UniformLocation};
use hello_triangle::Lesson;

fn shader_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("res/shaders")
}

#[test]
fn basic_shader_splits_into_two_stages() {
    let src = parse_shader(shader_dir().join("basic.shader")).unwrap();

    assert!(src.vertex_source.starts_with("#version 450 core\n"));
    assert!(src.fragment_source.starts_with("#version 450 core\n"));
    assert!(!src.vertex_source.contains("#shader"));
    assert!(!src.fragment_source.contains("#shader"));
    assert!(src.vertex_source.contains("gl_Position"));
    assert!(src.fragment_source.contains("out vec4 color"));
}

#[test]
fn every_lesson_builds_its_program() {
    for lesson in [Lesson::Triangle, Lesson::IndexedQuad, Lesson::AnimatedQuad] {
        let config = RunConfig::for_lesson(lesson);
        let src = lesson.shader_source(&config.shader_dir).unwrap();
        assert!(build_program(&src).is_ok(), "{lesson} failed to build");
    }
}

#[test]
fn animated_uniform_fits_requested_push_constants() {
    let config = RunConfig::for_lesson(Lesson::AnimatedQuad);
    let src = Lesson::AnimatedQuad.shader_source(&config.shader_dir).unwrap();
    let linked = build_program(&src).unwrap();

    assert_eq!(linked.uniform_location("u_Color"), Some(UniformLocation { offset: 0 }));
    assert!(linked.push_constant_size() <= config.gpu.push_constant_size);
}

#[test]
fn static_lessons_request_no_push_constants() {
    assert_eq!(RunConfig::for_lesson(Lesson::Triangle).gpu.push_constant_size, 0);
    assert_eq!(RunConfig::for_lesson(Lesson::IndexedQuad).gpu.push_constant_size, 0);
}

#[test]
fn window_title_comes_from_the_lesson() {
    for lesson in [Lesson::Triangle, Lesson::IndexedQuad, Lesson::AnimatedQuad] {
        assert_eq!(RunConfig::for_lesson(lesson).title, lesson.title());
    }
}
