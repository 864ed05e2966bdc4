use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    errors::LauncherError, RunMode, BASE_DIR_ENV, DEFAULT_ROOT_DIR_NAME, ROOT_DIR_ENV,
    RUN_MODE_ENV,
};

fn non_empty_env_path(key: &str) -> Option<PathBuf> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

pub(crate) fn detect_run_mode() -> RunMode {
    env::var(RUN_MODE_ENV)
        .ok()
        .and_then(|value| RunMode::parse(&value))
        .unwrap_or_else(RunMode::from_build)
}

pub(crate) fn workspace_root_dir() -> PathBuf {
    let candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");
    candidate.canonicalize().unwrap_or(candidate)
}

fn executable_dir() -> Result<PathBuf, LauncherError> {
    let exe = env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Bundled resource directory of a packaged build. On Linux bundles this is
/// `/usr/lib/<product>` while the executable sits in `/usr/bin`.
pub(crate) fn packaged_resource_dir(package_info: &tauri::PackageInfo) -> Option<PathBuf> {
    tauri::utils::platform::resource_dir(package_info, &tauri::Env::default())
        .map_err(|error| tracing::debug!("no bundled resource directory: {error}"))
        .ok()
}

fn packaged_base_dirs(resource_dir: Option<PathBuf>, exe_dir: PathBuf) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = resource_dir.into_iter().collect();
    if !dirs.contains(&exe_dir) {
        dirs.push(exe_dir);
    }
    dirs
}

/// Directories the entry point candidates are resolved against, in order.
pub(crate) fn launcher_base_dirs(
    run_mode: RunMode,
    resource_dir: Option<PathBuf>,
) -> Result<Vec<PathBuf>, LauncherError> {
    if let Some(path) = non_empty_env_path(BASE_DIR_ENV) {
        return Ok(vec![path]);
    }

    match run_mode {
        RunMode::Development => Ok(vec![workspace_root_dir()]),
        RunMode::Packaged => Ok(packaged_base_dirs(resource_dir, executable_dir()?)),
    }
}

pub(crate) fn default_root_dir() -> Option<PathBuf> {
    non_empty_env_path(ROOT_DIR_ENV)
        .or_else(|| home::home_dir().map(|home| home.join(DEFAULT_ROOT_DIR_NAME)))
}

pub(crate) fn desktop_log_path(root_dir: Option<&Path>, file_name: &str) -> Option<PathBuf> {
    root_dir.map(|root| root.join("logs").join(file_name))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::entry_point;

    #[test]
    fn workspace_root_contains_gui_placeholder() {
        assert!(workspace_root_dir().join("gui").join("index.html").is_file());
    }

    #[test]
    fn development_base_dir_resolves_gui_candidate() {
        if env::var_os(BASE_DIR_ENV).is_some() {
            return;
        }
        let bases = launcher_base_dirs(RunMode::Development, None).expect("base dirs");
        let resolved = entry_point::resolve_entry_point(&bases).expect("entry point");
        assert!(resolved.path.is_file());
    }

    #[test]
    fn packaged_linux_layout_resolves_from_resource_dir() {
        let root = tempfile::tempdir().expect("create temp dir");
        let bin_dir = root.path().join("usr").join("bin");
        let lib_dir = root.path().join("usr").join("lib").join("React Desktop Shell");
        fs::create_dir_all(&bin_dir).expect("create bin dir");
        fs::create_dir_all(lib_dir.join("gui")).expect("create gui dir");
        fs::write(lib_dir.join("gui").join("index.html"), "<html></html>").expect("write index");

        let bases = packaged_base_dirs(Some(lib_dir.clone()), bin_dir.clone());
        assert_eq!(bases, vec![lib_dir.clone(), bin_dir]);

        let resolved = entry_point::resolve_entry_point(&bases).expect("entry point");
        assert_eq!(resolved.path, lib_dir.join("./gui/index.html"));
    }

    #[test]
    fn packaged_base_dirs_skip_duplicate_exe_dir() {
        let exe_dir = PathBuf::from("C:/Program Files/React Desktop Shell");
        assert_eq!(
            packaged_base_dirs(Some(exe_dir.clone()), exe_dir.clone()),
            vec![exe_dir.clone()]
        );
        assert_eq!(packaged_base_dirs(None, exe_dir.clone()), vec![exe_dir]);
    }

    #[test]
    fn desktop_log_path_lives_under_logs() {
        let path = desktop_log_path(Some(Path::new("/data/shell")), "desktop.log");
        assert_eq!(path, Some(PathBuf::from("/data/shell/logs/desktop.log")));
        assert_eq!(desktop_log_path(None, "desktop.log"), None);
    }
}
