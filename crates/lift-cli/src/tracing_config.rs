//! Tracing setup for the `lift` binary.
//!
//! The filter comes from `LIFT_LOG`, falling back to `RUST_LOG`. Without
//! either, `--verbose` enables `debug` and the default is `warn`. Output
//! goes to stderr so it never mixes with reports on stdout.

use tracing_subscriber::EnvFilter;

fn build_filter(verbose: bool) -> EnvFilter {
    if let Ok(val) = std::env::var("LIFT_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    }
}

pub fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
