use std::{env, process};

use tauri::{Emitter, Manager, RunEvent, WindowEvent};

use crate::{
    desktop_bridge, errors::LauncherError, launch_plan, logging, main_window, page_state,
    runtime_paths, tray_setup, window_actions, LaunchPhase, LaunchPlan, RunMode,
    SingleInstancePayload, TickerState, WindowConfig, MAIN_WINDOW_LABEL, NEW_INSTANCE_EVENT,
};

#[cfg(target_os = "linux")]
use crate::WEBKIT_DMABUF_ENV;

fn prepare_launch_plan(package_info: &tauri::PackageInfo) -> Result<LaunchPlan, LauncherError> {
    let run_mode = runtime_paths::detect_run_mode();
    let resource_dir = match run_mode {
        RunMode::Packaged => runtime_paths::packaged_resource_dir(package_info),
        RunMode::Development => None,
    };
    let base_dirs = runtime_paths::launcher_base_dirs(run_mode, resource_dir)?;
    tracing::info!(?run_mode, ?base_dirs, "resolving launch plan");
    launch_plan::resolve_launch_plan(env::args_os(), run_mode, &base_dirs)
}

// WebKitGTK's DMA-BUF renderer draws blank or blurry windows on some HiDPI
// setups. An explicit value from the user is left alone.
#[cfg(target_os = "linux")]
fn disable_webkit_dmabuf_renderer() {
    if env::var_os(WEBKIT_DMABUF_ENV).is_none() {
        env::set_var(WEBKIT_DMABUF_ENV, "1");
    }
}

fn handle_second_instance(app_handle: &tauri::AppHandle, args: Vec<String>, cwd: String) {
    tracing::info!(?args, %cwd, "second instance launched, focusing main window");
    window_actions::show_main_window(app_handle);
    if let Err(error) = app_handle.emit(NEW_INSTANCE_EVENT, SingleInstancePayload { args, cwd }) {
        tracing::warn!("failed to emit {NEW_INSTANCE_EVENT}: {error}");
    }
}

pub(crate) fn run() {
    #[cfg(target_os = "linux")]
    disable_webkit_dmabuf_renderer();

    let log_guard = logging::init();
    tracing::info!(phase = %LaunchPhase::Resolving, "desktop process starting");

    let context = tauri::generate_context!();
    let plan = match prepare_launch_plan(context.package_info()) {
        Ok(plan) => plan,
        Err(error) => {
            tracing::error!("startup failed: {error}");
            eprintln!("React Desktop Shell startup failed: {error}");
            drop(log_guard);
            process::exit(1);
        }
    };
    tracing::info!(
        entry_point = %plan.entry_point,
        run_mode = ?plan.run_mode,
        dev_override = plan.dev_override,
        debug = plan.debug,
        "launch plan ready"
    );
    let window_config = WindowConfig::from_plan(&plan);

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, args, cwd| {
            handle_second_instance(app, args, cwd);
        }))
        .plugin(tauri_plugin_dialog::init())
        .manage(TickerState::default())
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::desktop_bridge_is_desktop_runtime,
            crate::desktop_bridge_commands::fullscreen,
            crate::desktop_bridge_commands::save_content,
            crate::desktop_bridge_commands::ls,
            crate::desktop_bridge_commands::show_item_in_folder,
        ])
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }
            if let WindowEvent::Destroyed = event {
                tracing::info!("main window closed");
            }
        })
        .setup(move |app| {
            let app_handle = app.handle().clone();
            main_window::create_main_window(&app_handle, &window_config)?;

            if let Err(error) = tray_setup::setup_tray(&app_handle) {
                tracing::warn!("failed to initialize tray: {error}");
            }

            match page_state::start_page_ticker(app_handle.clone()) {
                Ok(handle) => app_handle.state::<TickerState>().replace(handle),
                Err(error) => tracing::error!("failed to start page ticker: {error}"),
            }

            tracing::debug!(commands = ?desktop_bridge::BRIDGE_COMMANDS, "desktop bridge ready");
            tracing::info!(
                phase = %LaunchPhase::Running,
                entry_point = %window_config.entry_point,
                debug = window_config.debug,
                "main window created"
            );
            Ok(())
        })
        .build(context);

    let app = match app {
        Ok(app) => app,
        Err(error) => {
            tracing::error!("error while building tauri application: {error}");
            eprintln!("React Desktop Shell failed to start: {error}");
            drop(log_guard);
            process::exit(1);
        }
    };

    // The event loop may exit the process without returning, so the log
    // guard is flushed from the exit event.
    let mut log_guard = log_guard;
    app.run(move |app_handle, event| {
        if let RunEvent::Exit = event {
            let ticker_stopped = app_handle.state::<TickerState>().stop();
            tracing::info!(
                phase = %LaunchPhase::Terminated,
                ticker_stopped,
                "desktop process exiting"
            );
            drop(log_guard.take());
        }
    });
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn dmabuf_renderer_is_disabled_unless_already_configured() {
        let before = env::var_os(WEBKIT_DMABUF_ENV);
        disable_webkit_dmabuf_renderer();
        let after = env::var_os(WEBKIT_DMABUF_ENV);

        match before {
            Some(value) => assert_eq!(after, Some(value)),
            None => assert_eq!(after.as_deref(), Some(std::ffi::OsStr::new("1"))),
        }
    }
}
