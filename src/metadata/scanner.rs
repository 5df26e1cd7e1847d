use camino::{Utf8Path, Utf8PathBuf};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

const LOG_TARGET: &str = "   scanner";

/// File name suffix identifying a metadata file.
pub const METADATA_SUFFIX: &str = ".lic";

/// Recursively find all metadata files below `root`.
///
/// Only regular files are returned, with symlinks resolved. A missing root, or one that
/// is not a directory, yields no files. Directories that cannot be listed and symlink
/// loops are skipped. Entries are visited in file-name order so the result is stable
/// across runs and platforms.
#[must_use]
pub fn find_metadata_files(root: &Utf8Path) -> Vec<Utf8PathBuf> {
    if !root.is_dir() {
        log::debug!(target: LOG_TARGET, "Library folder '{root}' is not a directory, nothing to scan");
        return Vec::new();
    }

    let mut found = Vec::new();

    for entry_result in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Skipping unreadable entry below '{root}': {e}");
                continue;
            }
        };

        if !is_regular_file(&entry) || !is_metadata_file(entry.path()) {
            continue;
        }

        match Utf8PathBuf::from_path_buf(entry.into_path()) {
            Ok(path) => {
                log::trace!(target: LOG_TARGET, "Found metadata file '{path}'");
                found.push(path);
            }
            Err(path) => log::debug!(target: LOG_TARGET, "Skipping non UTF-8 path '{}'", path.display()),
        }
    }

    found
}

#[expect(clippy::filetype_is_file, reason = "sockets, FIFOs and devices are not metadata files")]
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
}

fn is_metadata_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(METADATA_SUFFIX))
}
