use tauri::{AppHandle, Manager};

use crate::{tray_actions, window_actions, TickerState};

pub fn handle_tray_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match tray_actions::action_from_menu_id(menu_id) {
        Some(tray_actions::TrayMenuAction::ToggleWindow) => {
            window_actions::toggle_main_window(app_handle)
        }
        Some(tray_actions::TrayMenuAction::ToggleFullscreen) => {
            window_actions::show_main_window(app_handle);
            window_actions::toggle_main_window_fullscreen(app_handle);
        }
        Some(tray_actions::TrayMenuAction::Quit) => {
            tracing::info!("tray quit requested, exiting desktop process");
            app_handle.state::<TickerState>().stop();
            app_handle.exit(0);
        }
        None => tracing::debug!(menu_id, "ignoring unknown tray menu id"),
    }
}
