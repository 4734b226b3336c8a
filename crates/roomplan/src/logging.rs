//! File logging with size-based rotation

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

/// Rotate the log when it grows past the cap. The previous generation is kept
/// as `roomplan.log.old`; anything older is discarded.
fn rotate_log_if_needed(log_path: &Path) -> io::Result<()> {
    let metadata = match fs::metadata(log_path) {
        Ok(metadata) => metadata,
        Err(_) => return Ok(()),
    };

    if metadata.len() > MAX_LOG_SIZE {
        fs::rename(log_path, log_path.with_extension("log.old"))?;
    }

    Ok(())
}

/// Initialize logging to `{data_dir}/roomplan.log`.
///
/// The filter defaults to `roomplan={level},roomplan_core=warn` and can be
/// overridden with the `RUST_LOG` environment variable.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("roomplan.log");
    if let Err(e) = rotate_log_if_needed(&log_path) {
        eprintln!("Warning: failed to rotate log file: {e}");
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("roomplan={level},roomplan_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("roomplan logging initialized (log_path={})", log_path.display());
    Ok(())
}
