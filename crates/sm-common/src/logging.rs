use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparseable. Pool and driver chatter stays
/// at warn so request spans remain readable.
const DEFAULT_FILTER: &str = "info,tokio_postgres=warn,deadpool=warn";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn env_filter(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Where file logs go: `<dir>/<app>.log`, with the date suffix added on rotation.
fn log_file_target(dir: Option<PathBuf>, app_name: &str) -> Option<(PathBuf, String)> {
    let dir = dir.filter(|dir| !dir.as_os_str().is_empty())?;
    Some((dir, format!("{app_name}.log")))
}

/// Install the global subscriber for a staff-match binary.
///
/// `RUST_LOG` filters (see [`DEFAULT_FILTER`]). With `SM_LOG_DIR` set, output
/// goes to a daily-rotated file without ANSI colors; otherwise to stdout.
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing_subscriber(app_name: &str) {
    let filter = env_filter(std::env::var("RUST_LOG").ok().as_deref());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let target = log_file_target(std::env::var_os("SM_LOG_DIR").map(PathBuf::from), app_name);
    let Some((dir, file_name)) = target else {
        let _ = builder.try_init();
        return;
    };

    if let Err(err) = std::fs::create_dir_all(&dir) {
        let _ = builder.try_init();
        tracing::warn!(
            error = %err,
            dir = %dir.display(),
            "cannot create SM_LOG_DIR; logging to stdout"
        );
        return;
    }

    let appender = tracing_appender::rolling::daily(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    if builder.with_ansi(false).with_writer(writer).try_init().is_ok() {
        let _ = LOG_GUARD.set(guard);
    }
}
