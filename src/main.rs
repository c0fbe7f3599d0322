// Main entry point - the render loop lives in lib.rs, shaders in res/shaders

use hello_triangle::{config::RunConfig, run, Lesson};

fn main() {
    if let Err(err) = run(RunConfig::for_lesson(Lesson::AnimatedQuad)) {
        log::error!("{err:#}");
        std::process::exit(-1);
    }
}
