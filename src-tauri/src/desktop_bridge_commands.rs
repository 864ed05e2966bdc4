use std::{
    env,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use tauri::{AppHandle, WebviewWindow};
use tauri_plugin_dialog::DialogExt;

use crate::{errors::BridgeError, window_actions};

pub(crate) trait SavePathPicker {
    /// `Ok(None)` means the user cancelled.
    fn pick_save_path(&self) -> Result<Option<PathBuf>, BridgeError>;
}

struct NativeSaveDialog<'a> {
    app_handle: &'a AppHandle,
}

impl SavePathPicker for NativeSaveDialog<'_> {
    fn pick_save_path(&self) -> Result<Option<PathBuf>, BridgeError> {
        let Some(file_path) = self
            .app_handle
            .dialog()
            .file()
            .blocking_save_file()
        else {
            return Ok(None);
        };

        file_path
            .into_path()
            .map(Some)
            .map_err(|error| BridgeError::Dialog(error.to_string()))
    }
}

/// Writes `content` verbatim to the picked path, replacing any previous
/// content. Nothing is written when the picker is cancelled.
pub(crate) fn save_content_with<P: SavePathPicker>(
    picker: &P,
    content: &str,
) -> Result<Option<PathBuf>, BridgeError> {
    let Some(path) = picker.pick_save_path()? else {
        return Ok(None);
    };

    fs::write(&path, content).map_err(|source| BridgeError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(Some(path))
}

pub(crate) fn list_directory(dir: &Path) -> Result<Vec<String>, BridgeError> {
    let read_dir_error = |source: io::Error| BridgeError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    fs::read_dir(dir)
        .map_err(read_dir_error)?
        .map(|entry| {
            entry
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .map_err(read_dir_error)
        })
        .collect()
}

/// File manager invocation that shows `path` to the user.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RevealCommand {
    pub(crate) program: &'static str,
    pub(crate) args: Vec<OsString>,
}

pub(crate) fn reveal_command(path: &Path) -> Result<RevealCommand, BridgeError> {
    if !path.exists() {
        return Err(BridgeError::RevealMissing {
            path: path.to_path_buf(),
        });
    }
    platform_reveal_command(path)
}

#[cfg(target_os = "macos")]
fn platform_reveal_command(path: &Path) -> Result<RevealCommand, BridgeError> {
    let mut args = Vec::new();
    if !path.is_dir() {
        args.push(OsString::from("-R"));
    }
    args.push(path.as_os_str().to_os_string());
    Ok(RevealCommand {
        program: "open",
        args,
    })
}

// The comma after /select is part of the switch.
#[cfg(target_os = "windows")]
fn platform_reveal_command(path: &Path) -> Result<RevealCommand, BridgeError> {
    Ok(RevealCommand {
        program: "explorer",
        args: vec![OsString::from("/select,"), path.as_os_str().to_os_string()],
    })
}

// xdg-open cannot select a file, so files open their parent folder.
#[cfg(all(unix, not(target_os = "macos")))]
fn platform_reveal_command(path: &Path) -> Result<RevealCommand, BridgeError> {
    let folder = if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or(path)
    };
    Ok(RevealCommand {
        program: "xdg-open",
        args: vec![folder.as_os_str().to_os_string()],
    })
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
fn platform_reveal_command(_path: &Path) -> Result<RevealCommand, BridgeError> {
    Err(BridgeError::RevealUnsupported)
}

pub(crate) fn spawn_reveal(command: &RevealCommand) -> Result<(), BridgeError> {
    Command::new(command.program)
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|source| BridgeError::Spawn {
            program: command.program,
            source,
        })
}

#[tauri::command]
pub(crate) fn desktop_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn fullscreen(window: WebviewWindow) -> Result<(), String> {
    window_actions::toggle_fullscreen(&window)
        .map(|fullscreen| tracing::debug!(fullscreen, "bridge toggled fullscreen"))
        .map_err(|error| {
            tracing::warn!("bridge fullscreen failed: {error}");
            error.to_string()
        })
}

// Async so the blocking dialog stays off the main thread.
#[tauri::command]
pub(crate) async fn save_content(
    app_handle: AppHandle,
    content: String,
) -> Result<Option<PathBuf>, String> {
    let picker = NativeSaveDialog {
        app_handle: &app_handle,
    };

    match save_content_with(&picker, &content) {
        Ok(Some(path)) => {
            tracing::info!(path = %path.display(), bytes = content.len(), "saved page content");
            Ok(Some(path))
        }
        Ok(None) => {
            tracing::debug!("save dialog cancelled");
            Ok(None)
        }
        Err(error) => {
            tracing::warn!("bridge save_content failed: {error}");
            Err(error.to_string())
        }
    }
}

#[tauri::command]
pub(crate) fn ls() -> Result<Vec<String>, String> {
    let cwd = env::current_dir().map_err(|error| {
        tracing::warn!("failed to resolve working directory: {error}");
        format!("Failed to resolve working directory: {error}")
    })?;

    list_directory(&cwd).map_err(|error| {
        tracing::warn!("bridge ls failed: {error}");
        error.to_string()
    })
}

#[tauri::command]
pub(crate) fn show_item_in_folder(path: String) -> Result<(), String> {
    reveal_command(Path::new(&path))
        .and_then(|command| spawn_reveal(&command))
        .map(|()| tracing::debug!(%path, "revealed item in file manager"))
        .map_err(|error| {
            tracing::warn!("bridge show_item_in_folder failed: {error}");
            error.to_string()
        })
}
