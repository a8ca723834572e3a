#[cfg(feature = "trace")]
use std::path::Path;

use tracing_subscriber::EnvFilter;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Human-readable logs on stderr, filtered by `RUST_LOG` (default `warn`).
///
/// stdout is left to the report.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter("warn"))
        .try_init();
}

/// JSON lines in `log_dir/longword-trace.jsonl`.
///
/// Keep the returned guard alive until the process is done writing.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(log_dir, "longword-trace.jsonl");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let _ = tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(env_filter("longword_core=debug"))
        .try_init();
    guard
}
