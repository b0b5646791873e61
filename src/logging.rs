use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

// Keeps the non-blocking writer alive for the process lifetime.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize tracing for a binary embedding the matching core.
///
/// Filtering follows `RUST_LOG` (default `info`). When `RH_LOG_DIR` is
/// set, output goes to `<RH_LOG_DIR>/<app>.log` with daily rotation;
/// otherwise to stdout. Panics are captured as `error` events so a
/// crashed ranking pass leaves a trace in the same stream.
pub fn init_tracing(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_dir() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = LOG_GUARD.set(guard);
            let _ = builder.with_writer(writer).try_init();
        }
        None => {
            let _ = builder.try_init();
        }
    }

    install_panic_hook(app_name);
}

fn log_dir() -> Option<PathBuf> {
    let dir = PathBuf::from(std::env::var_os("RH_LOG_DIR")?);
    match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(dir),
        Err(err) => {
            eprintln!("RH_LOG_DIR inutilisable ({err}); journalisation sur stdout");
            None
        }
    }
}

fn install_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".into());
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic payload not string".into());

            tracing::error!(application = app_name, %location, %message, "panic captured");
            previous(info);
        }));
    });
}
