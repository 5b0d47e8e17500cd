use noise_histogram::{run, DisplayMode};
use std::path::Path;

fn main() -> noise_histogram::Result<()> {
    // Log to stderr so stdout carries only the summary lines.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stdout = std::io::stdout();
    run(Path::new("."), &mut stdout.lock(), DisplayMode::Window)
}
