//! File logging.
//!
//! The terminal is owned by the UI, so log lines go to `wcm-modal.log` in the
//! data directory. `RUST_LOG` overrides the default `wcm_modal=info` filter.

use std::path::{Path, PathBuf};

use color_eyre::Result;
use color_eyre::eyre::eyre;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::ModalError;
use crate::state::platform::AppPaths;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "wcm_modal=info";

/// Installs the global subscriber writing to the log file of `paths`.
///
/// The returned guard flushes the background writer on drop and must be
/// held for as long as the program logs.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or a global
/// subscriber is already installed.
pub fn init(paths: &AppPaths) -> Result<(PathBuf, WorkerGuard)> {
    let path = paths.log_file().map_err(ModalError::into_report)?;
    let guard = init_at(&path)?;
    Ok((path, guard))
}

fn init_at(path: &Path) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre!("log path {} has no parent directory", path.display()))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("log path {} has no file name", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_dir_and_flushes_on_guard_drop() {
        let dir = std::env::temp_dir().join(format!("wcm-modal-log-{}", std::process::id()));
        let path = dir.join("nested").join("wcm-modal.log");

        let guard = init_at(&path).unwrap();
        tracing::info!(target: "wcm_modal", "log line from test");
        drop(guard);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("log line from test"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
