use hello_triangle::{config::RunConfig, run, Lesson};

fn main() {
    if let Err(err) = run(RunConfig::for_lesson(Lesson::IndexedQuad)) {
        log::error!("{err:#}");
        std::process::exit(-1);
    }
}
