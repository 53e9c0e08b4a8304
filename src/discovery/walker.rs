use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// Collect candidate files under `root`.
///
/// A directory whose path contains any of `excluded` as a literal substring
/// is skipped along with everything beneath it, the root included. The
/// match is intentionally broader than whole path segments: excluding
/// `vendor` also skips a `vendored/` directory. A file qualifies when its
/// name ends with one of `extensions` (case-sensitive) and it is not empty.
///
/// The result is sorted by path so downstream output is reproducible.
pub fn collect_files(
    root: &Path,
    excluded: &[String],
    extensions: &[String],
) -> Result<Vec<PathBuf>> {
    if path_is_excluded(root, excluded) {
        return Ok(Vec::new());
    }

    let mut builder = ignore::WalkBuilder::new(root);
    // Candidates are selected by the exclusion list alone, not by gitignore
    // rules or hidden status. Symlinks are not followed, which also rules
    // out traversal loops.
    builder.standard_filters(false);

    let excluded_owned = excluded.to_vec();
    builder.filter_entry(move |entry| {
        let is_dir = entry.file_type().is_some_and(|file_type| file_type.is_dir());
        !(is_dir && path_is_excluded(entry.path(), &excluded_owned))
    });

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            continue;
        }
        if !name_matches(entry.path(), extensions) {
            continue;
        }
        if entry.metadata()?.len() == 0 {
            continue;
        }
        files.push(entry.into_path());
    }

    files.sort();
    Ok(files)
}

fn path_is_excluded(path: &Path, excluded: &[String]) -> bool {
    let path = path.to_string_lossy();
    excluded.iter().any(|needle| path.contains(needle.as_str()))
}

fn name_matches(path: &Path, extensions: &[String]) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .is_some_and(|name| {
            extensions
                .iter()
                .any(|extension| name.ends_with(extension.as_str()))
        })
}
