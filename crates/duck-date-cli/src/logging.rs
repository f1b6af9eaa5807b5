use tracing_subscriber::EnvFilter;

/// The binary and the library it drives.
const CRATE_TARGETS: &[&str] = &["duckdate", "duck_date"];

/// Install the stderr subscriber for `duckdate`.
///
/// Silent apart from warnings by default. `-v` logs `add` results,
/// `-vv` adds configuration changes and parsed dates, and `-vvv` traces every
/// calendar computation. A set `RUST_LOG` replaces the whole filter.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = CRATE_TARGETS.iter().map(|t| format!("{t}={level}")).collect();
        EnvFilter::new(directives.join(","))
    });

    // stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
