use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Rotated log files kept next to the current one
const MAX_LOG_FILES: usize = 7;

/// Daily-rotated appender writing `<stem>.<date>.<ext>` next to `log_path`
fn rolling_appender(log_path: &Path) -> Result<RollingFileAppender, InitError> {
    let dir = log_path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let stem = log_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("raillcc");

    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(stem)
        .max_log_files(MAX_LOG_FILES);
    if let Some(ext) = log_path.extension().and_then(|s| s.to_str()) {
        builder = builder.filename_suffix(ext);
    }
    builder.build(dir)
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("raillcc={level},raillcc_core=warn")))
}

/// Initialize logging.
///
/// Events go to stderr, or to `log_file` when one is given. File logs rotate
/// daily and the last week is kept. The filter honours `RUST_LOG` and
/// otherwise logs this binary at `level` and the core library at `warn`.
///
/// The returned guard flushes the log file on drop and must be held until exit.
pub fn init_logging(
    level: &str,
    log_file: Option<&Path>,
) -> color_eyre::Result<Option<WorkerGuard>> {
    let Some(log_path) = log_file else {
        tracing_subscriber::registry()
            .with(default_filter(level))
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()?;
        return Ok(None);
    };

    let (writer, guard) = tracing_appender::non_blocking(rolling_appender(log_path)?);

    tracing_subscriber::registry()
        .with(default_filter(level))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), "Logging initialized");
    Ok(Some(guard))
}
