#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod desktop_bridge;
mod desktop_bridge_commands;
mod entry_point;
mod errors;
mod launch_plan;
mod logging;
mod main_window;
mod page_state;
mod runtime_paths;
mod ticker;
mod tray_actions;
mod tray_labels;
mod tray_menu_handler;
mod tray_setup;
mod window_actions;

pub(crate) use app_constants::*;
pub(crate) use app_types::{
    EntryPoint, LaunchPhase, LaunchPlan, RunMode, SingleInstancePayload, TickerState,
    TrayMenuState, WindowConfig,
};

fn main() {
    app_runtime::run();
}
