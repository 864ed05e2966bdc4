use std::{fmt, path::PathBuf, sync::Mutex};

use serde::Serialize;
use tauri::menu::MenuItem;
use url::Url;

use crate::{
    errors::LauncherError, ticker::TickerHandle, MAIN_WINDOW_LABEL, MAIN_WINDOW_MIN_SIZE,
    MAIN_WINDOW_TITLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunMode {
    Packaged,
    Development,
}

impl RunMode {
    pub(crate) fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Packaged
        }
    }

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "packaged" | "frozen" | "release" => Some(Self::Packaged),
            "development" | "dev" | "debug" => Some(Self::Development),
            _ => None,
        }
    }

    pub(crate) fn allows_dev_overrides(self) -> bool {
        self == Self::Development
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EntryPoint {
    File(PathBuf),
    Url(Url),
}

impl EntryPoint {
    pub(crate) fn to_url(&self) -> Result<Url, LauncherError> {
        match self {
            Self::Url(url) => Ok(url.clone()),
            Self::File(path) => {
                let absolute = path.canonicalize()?;
                Url::from_file_path(&absolute)
                    .map_err(|()| LauncherError::NotAFileUrl { path: absolute })
            }
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct LaunchPlan {
    pub(crate) entry_point: EntryPoint,
    pub(crate) debug: bool,
    pub(crate) run_mode: RunMode,
    pub(crate) dev_override: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct WindowConfig {
    pub(crate) label: &'static str,
    pub(crate) title: &'static str,
    pub(crate) min_size: (f64, f64),
    pub(crate) entry_point: EntryPoint,
    pub(crate) debug: bool,
}

impl WindowConfig {
    pub(crate) fn from_plan(plan: &LaunchPlan) -> Self {
        Self {
            label: MAIN_WINDOW_LABEL,
            title: MAIN_WINDOW_TITLE,
            min_size: MAIN_WINDOW_MIN_SIZE,
            entry_point: plan.entry_point.clone(),
            debug: plan.debug,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LaunchPhase {
    Resolving,
    Running,
    Terminated,
}

impl fmt::Display for LaunchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resolving => "resolving",
            Self::Running => "running",
            Self::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

#[derive(Clone)]
pub(crate) struct TrayMenuState {
    pub(crate) toggle_item: MenuItem<tauri::Wry>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SingleInstancePayload {
    pub(crate) args: Vec<String>,
    pub(crate) cwd: String,
}

#[derive(Debug, Default)]
pub(crate) struct TickerState {
    pub(crate) handle: Mutex<Option<TickerHandle>>,
}

impl TickerState {
    pub(crate) fn replace(&self, handle: TickerHandle) {
        match self.handle.lock() {
            Ok(mut guard) => {
                if let Some(previous) = guard.replace(handle) {
                    previous.stop();
                }
            }
            Err(_) => handle.stop(),
        }
    }

    /// Returns whether a running ticker was signalled.
    pub(crate) fn stop(&self) -> bool {
        let handle = match self.handle.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        match handle {
            Some(handle) => {
                let was_running = !handle.is_stopped();
                handle.stop();
                was_running
            }
            None => false,
        }
    }
}
