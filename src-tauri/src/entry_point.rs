use std::path::{Path, PathBuf};

use crate::errors::LauncherError;

/// Checked in order; the first existing file wins.
pub(crate) const ENTRY_POINT_CANDIDATES: [&str; 4] = [
    "./build/index.html",
    "../gui/index.html",
    "../Resources/gui/index.html",
    "./gui/index.html",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedEntryPoint {
    pub(crate) base_dir: PathBuf,
    pub(crate) candidate: &'static str,
    pub(crate) path: PathBuf,
}

/// Tries every candidate under the first base dir before moving to the next.
pub(crate) fn resolve_entry_point(
    base_dirs: &[PathBuf],
) -> Result<ResolvedEntryPoint, LauncherError> {
    base_dirs
        .iter()
        .find_map(|base_dir| find_candidate(base_dir, &ENTRY_POINT_CANDIDATES))
        .ok_or_else(|| LauncherError::EntryPointNotFound {
            searched: base_dirs.to_vec(),
        })
}

fn find_candidate(base_dir: &Path, candidates: &[&'static str]) -> Option<ResolvedEntryPoint> {
    candidates
        .iter()
        .map(|&candidate| ResolvedEntryPoint {
            base_dir: base_dir.to_path_buf(),
            candidate,
            path: base_dir.join(candidate),
        })
        .find(|resolved| resolved.path.exists())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    struct Layout {
        _root: tempfile::TempDir,
        base: PathBuf,
    }

    // Candidates reach one level up, so the base sits inside the temp root.
    fn layout() -> Layout {
        let root = tempfile::tempdir().expect("create temp dir");
        let base = root.path().join("app");
        fs::create_dir_all(&base).expect("create base dir");
        Layout { _root: root, base }
    }

    fn touch(base: &Path, candidate: &str) {
        let path = base.join(candidate);
        fs::create_dir_all(path.parent().expect("candidate parent")).expect("create parent");
        fs::write(path, "<html></html>").expect("write candidate");
    }

    #[test]
    fn each_candidate_is_found_when_it_is_the_only_one() {
        for candidate in ENTRY_POINT_CANDIDATES {
            let layout = layout();
            touch(&layout.base, candidate);

            let resolved =
                resolve_entry_point(&[layout.base.clone()]).expect("resolve entry point");
            assert_eq!(resolved.candidate, candidate);
            assert_eq!(resolved.path, layout.base.join(candidate));
        }
    }

    #[test]
    fn earlier_candidate_wins_when_several_exist() {
        let layout = layout();
        touch(&layout.base, "./gui/index.html");
        touch(&layout.base, "../Resources/gui/index.html");
        touch(&layout.base, "../gui/index.html");

        let resolved = resolve_entry_point(&[layout.base.clone()]).expect("resolve entry point");
        assert_eq!(resolved.candidate, "../gui/index.html");

        touch(&layout.base, "./build/index.html");
        let resolved = resolve_entry_point(&[layout.base.clone()]).expect("resolve entry point");
        assert_eq!(resolved.candidate, "./build/index.html");
    }

    #[test]
    fn missing_candidates_fail_with_entry_point_not_found() {
        let layout = layout();
        let error = resolve_entry_point(&[layout.base.clone()]).expect_err("no candidate exists");
        match error {
            LauncherError::EntryPointNotFound { searched } => {
                assert_eq!(searched, vec![layout.base.clone()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn index_in_base_dir_itself_is_not_a_candidate() {
        let layout = layout();
        fs::write(layout.base.join("index.html"), "<html></html>").expect("write index");
        touch(&layout.base, "./gui/index.html");

        let resolved = resolve_entry_point(&[layout.base.clone()]).expect("resolve entry point");
        assert_eq!(resolved.candidate, "./gui/index.html");
    }

    #[test]
    fn custom_candidate_order_is_respected() {
        let layout = layout();
        touch(&layout.base, "./a.html");
        touch(&layout.base, "./b.html");

        let resolved = find_candidate(&layout.base, &["./b.html", "./a.html"]).expect("resolve");
        assert_eq!(resolved.candidate, "./b.html");
    }

    #[test]
    fn later_base_dir_is_used_when_earlier_has_no_candidate() {
        let root = tempfile::tempdir().expect("create temp dir");
        let bin_dir = root.path().join("usr").join("bin");
        let lib_dir = root.path().join("usr").join("lib").join("React Desktop Shell");
        fs::create_dir_all(&bin_dir).expect("create bin dir");
        touch(&lib_dir, "./gui/index.html");

        let resolved = resolve_entry_point(&[bin_dir.clone(), lib_dir.clone()])
            .expect("resolve entry point");
        assert_eq!(resolved.base_dir, lib_dir);
        assert_eq!(resolved.path, lib_dir.join("./gui/index.html"));

        let error = resolve_entry_point(&[bin_dir.clone()]).expect_err("bin has no gui");
        assert!(matches!(error, LauncherError::EntryPointNotFound { .. }));
    }

    #[test]
    fn earlier_base_dir_wins_over_later_one() {
        let root = tempfile::tempdir().expect("create temp dir");
        let first = root.path().join("one").join("app");
        let second = root.path().join("two").join("app");
        touch(&first, "./gui/index.html");
        touch(&second, "./build/index.html");

        let resolved =
            resolve_entry_point(&[first.clone(), second]).expect("resolve entry point");
        assert_eq!(resolved.base_dir, first);
        assert_eq!(resolved.candidate, "./gui/index.html");
    }
}
