use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use clap::Parser;
use url::Url;

use crate::{entry_point, errors::LauncherError, EntryPoint, LaunchPlan, RunMode};

// Help and version are disabled so they fall through the permissive path
// like any other unknown flag.
#[derive(Debug, Parser)]
#[command(
    name = "react-desktop-shell",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct DevelopmentFlags {
    /// Open the webview devtools.
    #[arg(long)]
    debug: bool,

    /// Load this file or dev server URL instead of the bundled UI.
    #[arg(long, value_name = "PATH")]
    devpath: Option<String>,
}

#[derive(Debug, Parser)]
#[command(
    name = "react-desktop-shell",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct PackagedFlags {
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct LaunchFlags {
    pub(crate) debug: bool,
    pub(crate) devpath: Option<String>,
}

/// Malformed or conflicting flags are dropped as a whole; the launcher then
/// starts with defaults instead of aborting.
pub(crate) fn parse_launch_flags<I, T>(args: I, run_mode: RunMode) -> LaunchFlags
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = if run_mode.allows_dev_overrides() {
        DevelopmentFlags::try_parse_from(args).map(|flags| LaunchFlags {
            debug: flags.debug,
            devpath: flags.devpath,
        })
    } else {
        PackagedFlags::try_parse_from(args).map(|flags| LaunchFlags {
            debug: flags.debug,
            devpath: None,
        })
    };

    parsed.unwrap_or_else(|error| {
        tracing::warn!(
            kind = ?error.kind(),
            "ignoring command line flags: {}",
            error.render().to_string().trim()
        );
        LaunchFlags::default()
    })
}

/// Relative paths are taken from the launcher's base directory, the same place
/// the bundled entry point was found.
pub(crate) fn resolve_devpath(raw: &str, base_dir: &Path) -> Result<EntryPoint, LauncherError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LauncherError::invalid_dev_path(raw, "value is empty"));
    }

    if trimmed.contains("://") {
        let parsed = Url::parse(trimmed).map_err(|error| {
            LauncherError::invalid_dev_path(raw, format!("invalid URL: {error}"))
        })?;
        return match parsed.scheme() {
            "http" | "https" => Ok(EntryPoint::Url(parsed)),
            "file" => {
                let path = parsed.to_file_path().map_err(|()| {
                    LauncherError::invalid_dev_path(raw, "file URL has no local path")
                })?;
                existing_file_entry(raw, &path)
            }
            scheme => Err(LauncherError::invalid_dev_path(
                raw,
                format!("unsupported URL scheme '{scheme}', only http/https/file are allowed"),
            )),
        };
    }

    existing_file_entry(raw, &base_dir.join(trimmed))
}

fn existing_file_entry(raw: &str, path: &Path) -> Result<EntryPoint, LauncherError> {
    if !path.exists() {
        return Err(LauncherError::invalid_dev_path(
            raw,
            format!("{} does not exist", path.display()),
        ));
    }
    Ok(EntryPoint::File(path.to_path_buf()))
}

pub(crate) fn resolve_launch_plan<I, T>(
    args: I,
    run_mode: RunMode,
    base_dirs: &[PathBuf],
) -> Result<LaunchPlan, LauncherError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let resolved = entry_point::resolve_entry_point(base_dirs)?;
    tracing::info!(
        base_dir = %resolved.base_dir.display(),
        candidate = resolved.candidate,
        path = %resolved.path.display(),
        "resolved entry point"
    );

    let flags = parse_launch_flags(args, run_mode);
    let mut plan = LaunchPlan {
        entry_point: EntryPoint::File(resolved.path.clone()),
        debug: flags.debug,
        run_mode,
        dev_override: false,
    };

    if let Some(raw) = flags.devpath.as_deref() {
        match resolve_devpath(raw, &resolved.base_dir) {
            Ok(entry_point) => {
                tracing::info!(%entry_point, "using --devpath override");
                plan.entry_point = entry_point;
                plan.dev_override = true;
            }
            Err(error) => {
                tracing::warn!("ignoring --devpath override: {error}");
            }
        }
    }

    Ok(plan)
}
