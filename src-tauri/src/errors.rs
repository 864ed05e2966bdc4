use std::{io, path::PathBuf};

fn display_dirs(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|dir| dir.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum LauncherError {
    #[error("No index.html found under {}", display_dirs(searched))]
    EntryPointNotFound { searched: Vec<PathBuf> },

    #[error("Invalid --devpath '{value}': {reason}")]
    InvalidDevPath { value: String, reason: String },

    #[error("Cannot load {} as a file URL", path.display())]
    NotAFileUrl { path: PathBuf },

    #[error("{0}")]
    Io(#[from] io::Error),
}

impl LauncherError {
    pub(crate) fn invalid_dev_path(value: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidDevPath {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum BridgeError {
    #[error("Save dialog returned an unusable path: {0}")]
    Dialog(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("Window operation failed: {0}")]
    Window(String),

    #[error("Cannot reveal {}: path does not exist", path.display())]
    RevealMissing { path: PathBuf },

    #[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
    #[error("Revealing files is not supported on this platform")]
    RevealUnsupported,

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: &'static str,
        source: io::Error,
    },
}
