use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Initialise logging. The level is `info` unless `debug` is set, in which
/// case it is `debug` and can be overridden via the `RUST_LOG` environment
/// variable. When `log_file` is given, output is also appended to it.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    // Without debug logging `RUST_LOG` is ignored so a stray variable in the
    // user's environment cannot make the dashboard verbose.
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let mut file_error = None;
    let file_layer = log_file.and_then(|path| match file_appender(&path) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().with_ansi(false).with_writer(writer))
        }
        Err(e) => {
            file_error = Some((path, e));
            None
        }
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init();

    if let Some((path, e)) = file_error {
        tracing::warn!(path = %path.display(), "could not open log file: {e}");
    }
}

fn file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file path has no file name"))?
        .to_string_lossy()
        .into_owned();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok(RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)?)
}
