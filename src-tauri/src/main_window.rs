use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{desktop_bridge, WindowConfig, MAIN_WINDOW_LABEL};

pub(crate) fn create_main_window(
    app_handle: &AppHandle,
    config: &WindowConfig,
) -> Result<WebviewWindow, String> {
    let url = config
        .entry_point
        .to_url()
        .map_err(|error| format!("Failed to build entry point URL: {error}"))?;
    let (min_width, min_height) = config.min_size;

    let window = WebviewWindowBuilder::new(app_handle, config.label, WebviewUrl::External(url))
        .title(config.title)
        .inner_size(min_width, min_height)
        .min_inner_size(min_width, min_height)
        .initialization_script(desktop_bridge::bridge_init_script())
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))?;

    if config.debug {
        window.open_devtools();
    }
    Ok(window)
}

pub(crate) fn show_main_window(app_handle: &AppHandle) {
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        tracing::debug!("show_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.unminimize() {
        tracing::warn!("failed to unminimize main window: {error}");
    }
    if let Err(error) = window.show() {
        tracing::warn!("failed to show main window: {error}");
    }
    if let Err(error) = window.set_focus() {
        tracing::warn!("failed to focus main window: {error}");
    }
}

pub(crate) fn hide_main_window(app_handle: &AppHandle) {
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        tracing::debug!("hide_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.hide() {
        tracing::warn!("failed to hide main window: {error}");
    }
}
