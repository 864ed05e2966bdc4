use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{runtime_paths, DEFAULT_LOG_DIRECTIVE, DESKTOP_LOG_FILE, LOG_FILTER_ENV};

fn env_filter() -> EnvFilter {
    let directive = env::var(LOG_FILTER_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());

    EnvFilter::try_new(&directive).unwrap_or_else(|error| {
        eprintln!("invalid {LOG_FILTER_ENV} directive '{directive}': {error}");
        EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
    })
}

fn prepare_log_dir(log_path: &Path) -> Option<(PathBuf, String)> {
    let dir = log_path.parent()?.to_path_buf();
    let file_name = log_path.file_name()?.to_string_lossy().to_string();
    if let Err(error) = fs::create_dir_all(&dir) {
        eprintln!(
            "failed to create desktop log directory {}: {error}",
            dir.display()
        );
        return None;
    }
    Some((dir, file_name))
}

pub(crate) fn resolve_desktop_log_path() -> Option<PathBuf> {
    runtime_paths::desktop_log_path(
        runtime_paths::default_root_dir().as_deref(),
        DESKTOP_LOG_FILE,
    )
}

/// Returns false, after reporting on stderr, when a global subscriber is
/// already installed.
fn try_install(subscriber: impl SubscriberInitExt) -> bool {
    match subscriber.try_init() {
        Ok(()) => true,
        Err(error) => {
            eprintln!("failed to install desktop log subscriber: {error}");
            false
        }
    }
}

/// Installs the global subscriber: stderr always, plus the desktop log file
/// when its directory is writable. Keep the returned guard alive until exit.
pub(crate) fn init() -> Option<WorkerGuard> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file_target = resolve_desktop_log_path().and_then(|path| prepare_log_dir(&path));
    let Some((dir, file_name)) = file_target else {
        try_install(
            tracing_subscriber::registry()
                .with(env_filter())
                .with(stderr_layer),
        );
        return None;
    };

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        &dir, &file_name,
    ));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    let installed = try_install(
        tracing_subscriber::registry()
            .with(env_filter())
            .with(stderr_layer)
            .with(file_layer),
    );
    if !installed {
        return None;
    }
    tracing::debug!(path = %dir.join(&file_name).display(), "desktop log file attached");
    Some(guard)
}
