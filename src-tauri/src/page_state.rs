use std::io;

use tauri::{AppHandle, Manager, WebviewWindow};

use crate::{
    ticker::{PeriodicTicker, TickerHandle},
    MAIN_WINDOW_LABEL, TICKER_INTERVAL, TICKER_THREAD_NAME,
};

pub(crate) trait TickTarget {
    fn evaluate_script(&self, script: &str) -> Result<(), String>;
}

impl TickTarget for WebviewWindow {
    fn evaluate_script(&self, script: &str) -> Result<(), String> {
        self.eval(script).map_err(|error| error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    Pushed,
    SkippedNoWindow,
    Failed(String),
}

/// The page may not have registered `setTicker` yet, hence the optional calls.
pub(crate) fn ticker_script(timestamp: i64) -> String {
    let value = serde_json::to_string(&timestamp.to_string())
        .unwrap_or_else(|_| format!("\"{timestamp}\""));
    format!("window.desktopBridge?.state?.setTicker?.({value});")
}

pub(crate) fn push_ticker<T: TickTarget>(target: Option<&T>, timestamp: i64) -> TickOutcome {
    let Some(target) = target else {
        return TickOutcome::SkippedNoWindow;
    };

    match target.evaluate_script(&ticker_script(timestamp)) {
        Ok(()) => TickOutcome::Pushed,
        Err(error) => TickOutcome::Failed(error),
    }
}

fn push_ticker_to_main_window(app_handle: &AppHandle) {
    let window = app_handle.get_webview_window(MAIN_WINDOW_LABEL);
    match push_ticker(window.as_ref(), chrono::Utc::now().timestamp()) {
        TickOutcome::Pushed => {}
        TickOutcome::SkippedNoWindow => tracing::trace!("ticker skipped: main window not found"),
        TickOutcome::Failed(error) => tracing::debug!("ticker push failed: {error}"),
    }
}

pub(crate) fn start_page_ticker(app_handle: AppHandle) -> io::Result<TickerHandle> {
    PeriodicTicker::start(TICKER_THREAD_NAME, TICKER_INTERVAL, move || {
        push_ticker_to_main_window(&app_handle)
    })
}
