use std::time::Duration;

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "React Desktop Shell";
pub(crate) const MAIN_WINDOW_MIN_SIZE: (f64, f64) = (1000.0, 700.0);

pub(crate) const TICKER_THREAD_NAME: &str = "page-ticker";
pub(crate) const TICKER_INTERVAL: Duration = Duration::from_secs(1);

pub(crate) const TRAY_ID: &str = "main-tray";
pub(crate) const NEW_INSTANCE_EVENT: &str = "newInstance";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DEFAULT_LOG_DIRECTIVE: &str = "info";
pub(crate) const DEFAULT_ROOT_DIR_NAME: &str = ".react-desktop-shell";

pub(crate) const BASE_DIR_ENV: &str = "REACT_SHELL_BASE_DIR";
pub(crate) const RUN_MODE_ENV: &str = "REACT_SHELL_RUN_MODE";
pub(crate) const LOG_FILTER_ENV: &str = "REACT_SHELL_LOG";
pub(crate) const ROOT_DIR_ENV: &str = "REACT_SHELL_ROOT";

#[cfg(target_os = "linux")]
pub(crate) const WEBKIT_DMABUF_ENV: &str = "WEBKIT_DISABLE_DMABUF_RENDERER";
