use tauri::{AppHandle, Manager, WebviewWindow};

use crate::{errors::BridgeError, main_window, tray_labels, MAIN_WINDOW_LABEL};

pub(crate) trait FullscreenSurface {
    fn is_fullscreen(&self) -> Result<bool, String>;
    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), String>;
}

impl FullscreenSurface for WebviewWindow {
    fn is_fullscreen(&self) -> Result<bool, String> {
        WebviewWindow::is_fullscreen(self).map_err(|error| error.to_string())
    }

    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), String> {
        WebviewWindow::set_fullscreen(self, fullscreen).map_err(|error| error.to_string())
    }
}

/// Returns the fullscreen state after the toggle.
pub(crate) fn toggle_fullscreen<S: FullscreenSurface>(surface: &S) -> Result<bool, BridgeError> {
    let current = surface.is_fullscreen().map_err(BridgeError::Window)?;
    surface
        .set_fullscreen(!current)
        .map_err(BridgeError::Window)?;
    Ok(!current)
}

pub(crate) fn toggle_main_window_fullscreen(app_handle: &AppHandle) {
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        tracing::debug!("toggle fullscreen skipped: main window not found");
        return;
    };

    match toggle_fullscreen(&window) {
        Ok(fullscreen) => tracing::debug!(fullscreen, "toggled main window fullscreen"),
        Err(error) => tracing::warn!("failed to toggle fullscreen: {error}"),
    }
}

pub(crate) fn show_main_window(app_handle: &AppHandle) {
    main_window::show_main_window(app_handle);
    tray_labels::update_tray_menu_labels_with_visibility(app_handle, Some(true));
}

pub(crate) fn hide_main_window(app_handle: &AppHandle) {
    main_window::hide_main_window(app_handle);
    tray_labels::update_tray_menu_labels_with_visibility(app_handle, Some(false));
}

pub(crate) fn toggle_main_window(app_handle: &AppHandle) {
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        tracing::debug!("toggle_main_window skipped: main window not found");
        return;
    };

    match window.is_visible() {
        Ok(true) => hide_main_window(app_handle),
        Ok(false) => show_main_window(app_handle),
        Err(error) => tracing::warn!(
            "failed to read main window visibility in toggle_main_window: {error}"
        ),
    }
}
