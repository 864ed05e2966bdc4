use tauri::{AppHandle, Manager};

use crate::{tray_actions, TrayMenuState, MAIN_WINDOW_LABEL};

pub(crate) const TRAY_LABEL_HIDE: &str = "Hide Window";
pub(crate) const TRAY_LABEL_SHOW: &str = "Show Window";
pub(crate) const TRAY_LABEL_FULLSCREEN: &str = "Toggle Fullscreen";
pub(crate) const TRAY_LABEL_QUIT: &str = "Quit";

pub(crate) fn toggle_label(window_visible: bool) -> &'static str {
    if window_visible {
        TRAY_LABEL_HIDE
    } else {
        TRAY_LABEL_SHOW
    }
}

pub(crate) fn update_tray_menu_labels(app_handle: &AppHandle) {
    update_tray_menu_labels_with_visibility(app_handle, None);
}

pub(crate) fn update_tray_menu_labels_with_visibility(
    app_handle: &AppHandle,
    visible_override: Option<bool>,
) {
    let Some(tray_state) = app_handle.try_state::<TrayMenuState>() else {
        return;
    };

    let effective_visible = visible_override.unwrap_or_else(|| {
        app_handle
            .get_webview_window(MAIN_WINDOW_LABEL)
            .and_then(|window| window.is_visible().ok())
            .unwrap_or(true)
    });

    if let Err(error) = tray_state
        .toggle_item
        .set_text(toggle_label(effective_visible))
    {
        tracing::warn!(
            "failed to update tray menu text for {}: {}",
            tray_actions::TRAY_MENU_TOGGLE_WINDOW,
            error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_follows_visibility() {
        assert_eq!(toggle_label(true), "Hide Window");
        assert_eq!(toggle_label(false), "Show Window");
    }
}
