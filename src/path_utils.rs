//! Path utilities for safe filesystem lookups.

/// Whether `s` can be joined onto a directory as a single file name stem without
/// escaping that directory.
///
/// Separators, NUL and the `.`/`..` directory entries are rejected. Every other
/// character is left to the filesystem, so names such as `Apache License: Version 2.0`
/// are looked up as written.
#[must_use]
pub fn is_plain_path_component(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\', '\0'])
}
