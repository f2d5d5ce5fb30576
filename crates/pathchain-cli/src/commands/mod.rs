pub mod dump;
pub mod path_loader;
pub mod render;
pub mod terms;


use tracing::level_filters::LevelFilter;

/// Install the stderr log subscriber; `-v` raises the level to debug, `-vv` to trace.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
