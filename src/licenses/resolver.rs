use super::bundled_license;
use crate::error::Error;
use crate::path_utils::is_plain_path_component;
use camino::{Utf8Path, Utf8PathBuf};
use crate::text::decode_text;
use core::fmt::Debug;
use std::fs;
use std::io;

const LOG_TARGET: &str = "  licenses";

/// File name suffix of license text files.
pub const LICENSE_SUFFIX: &str = ".license";

/// The text of one license, split into lines without their terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseText {
    /// Where the text was found, for diagnostics.
    pub origin: String,
    pub lines: Vec<String>,
}

/// A place license texts can be looked up in.
pub trait LicenseSource: Debug {
    /// Look up the text for `license_type`.
    ///
    /// Returns `Ok(None)` when this source does not know the license type.
    ///
    /// # Errors
    ///
    /// Returns an error if the license text exists but cannot be read.
    fn resolve(&self, license_type: &str) -> Result<Option<LicenseText>, Error>;
}

/// License texts stored as `<folder>/<license type>.license`.
#[derive(Debug, Clone)]
pub struct FolderSource {
    folder: Utf8PathBuf,
}

impl FolderSource {
    #[must_use]
    pub fn new(folder: impl Into<Utf8PathBuf>) -> Self {
        Self { folder: folder.into() }
    }

    #[must_use]
    pub fn folder(&self) -> &Utf8Path {
        &self.folder
    }
}

impl LicenseSource for FolderSource {
    fn resolve(&self, license_type: &str) -> Result<Option<LicenseText>, Error> {
        if !is_plain_path_component(license_type) {
            log::debug!(target: LOG_TARGET, "License type '{license_type}' is not a valid file name, skipping lookup in '{}'", self.folder);
            return Ok(None);
        }

        let path = self.folder.join(format!("{license_type}{LICENSE_SUFFIX}"));
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(Error::ReadLicense { path, source }),
        };

        Ok(Some(LicenseText {
            origin: path.into_string(),
            lines: decode_text(bytes).lines().map(str::to_owned).collect(),
        }))
    }
}

/// License texts compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl LicenseSource for BundledSource {
    fn resolve(&self, license_type: &str) -> Result<Option<LicenseText>, Error> {
        Ok(bundled_license(license_type).map(|text| LicenseText {
            origin: format!("bundled {license_type}{LICENSE_SUFFIX}"),
            lines: text.lines().map(str::to_owned).collect(),
        }))
    }
}

/// Resolves license texts through an ordered list of sources, first hit wins.
#[derive(Debug)]
pub struct LicenseResolver {
    sources: Vec<Box<dyn LicenseSource>>,
}

impl LicenseResolver {
    #[must_use]
    pub fn new(sources: Vec<Box<dyn LicenseSource>>) -> Self {
        Self { sources }
    }

    /// The default chain: the license folder on disk, then the bundled texts.
    #[must_use]
    pub fn with_license_folder(folder: impl Into<Utf8PathBuf>) -> Self {
        Self::new(vec![Box::new(FolderSource::new(folder)), Box::new(BundledSource)])
    }

    /// Find the text for `license_type`, or `None` if no source knows it.
    ///
    /// # Errors
    ///
    /// Returns an error if a source finds the license text but cannot read it.
    pub fn resolve(&self, license_type: &str) -> Result<Option<LicenseText>, Error> {
        for source in &self.sources {
            if let Some(text) = source.resolve(license_type)? {
                log::debug!(target: LOG_TARGET, "Resolved license '{license_type}' from {}", text.origin);
                return Ok(Some(text));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_folder_source_reads_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let root = folder(&tmp);
        fs::write(root.join("Custom License.license"), "line one\r\nline two\n\nlast").unwrap();

        let text = FolderSource::new(&root).resolve("Custom License").unwrap().unwrap();
        assert_eq!(text.lines, ["line one", "line two", "", "last"]);
        assert!(text.origin.ends_with("Custom License.license"));
    }

    #[test]
    fn test_folder_source_reads_latin1() {
        let tmp = tempfile::tempdir().unwrap();
        let root = folder(&tmp);
        fs::write(root.join("Old.license"), b"Copyright \xa9 1999 Jos\xe9\nAll rights reserved.\n").unwrap();

        let text = FolderSource::new(&root).resolve("Old").unwrap().unwrap();
        assert_eq!(text.lines, ["Copyright \u{a9} 1999 Jos\u{e9}", "All rights reserved."]);
    }

    #[test]
    fn test_folder_source_key_with_punctuation() {
        let tmp = tempfile::tempdir().unwrap();
        let root = folder(&tmp);
        fs::write(root.join("Apache License: Version 2.0.license"), "Apache text\n").unwrap();

        let text = FolderSource::new(&root).resolve("Apache License: Version 2.0").unwrap().unwrap();
        assert_eq!(text.lines, ["Apache text"]);
    }

    #[test]
    fn test_folder_source_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(FolderSource::new(folder(&tmp)).resolve("MIT").unwrap().is_none());
    }

    #[test]
    fn test_folder_source_missing_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let source = FolderSource::new(folder(&tmp).join("nope"));
        assert!(source.resolve("MIT").unwrap().is_none());
    }

    #[test]
    fn test_folder_source_rejects_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let root = folder(&tmp);
        fs::create_dir_all(root.join("licenses")).unwrap();
        fs::write(root.join("secret.license"), "do not leak").unwrap();

        let source = FolderSource::new(root.join("licenses"));
        assert!(source.resolve("../secret").unwrap().is_none());
    }

    #[test]
    fn test_folder_source_is_not_recursive() {
        let tmp = tempfile::tempdir().unwrap();
        let root = folder(&tmp);
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("nested/Deep.license"), "deep").unwrap();

        assert!(FolderSource::new(&root).resolve("Deep").unwrap().is_none());
    }

    #[test]
    fn test_bundled_source() {
        let text = BundledSource.resolve("MIT").unwrap().unwrap();
        assert_eq!(text.lines.first().map(String::as_str), Some("MIT License"));
        assert!(BundledSource.resolve("Proprietary").unwrap().is_none());
    }

    #[test]
    fn test_folder_overrides_bundled() {
        let tmp = tempfile::tempdir().unwrap();
        let root = folder(&tmp);
        fs::write(root.join("MIT.license"), "our own MIT text\n").unwrap();

        let resolver = LicenseResolver::with_license_folder(&root);
        let text = resolver.resolve("MIT").unwrap().unwrap();
        assert_eq!(text.lines, ["our own MIT text"]);
    }

    #[test]
    fn test_falls_back_to_bundled() {
        let tmp = tempfile::tempdir().unwrap();
        let resolver = LicenseResolver::with_license_folder(folder(&tmp));
        let text = resolver.resolve("ISC").unwrap().unwrap();
        assert!(text.origin.starts_with("bundled"));
    }

    #[test]
    fn test_unknown_license() {
        let tmp = tempfile::tempdir().unwrap();
        let resolver = LicenseResolver::with_license_folder(folder(&tmp));
        assert!(resolver.resolve("Some Proprietary License").unwrap().is_none());
    }

    #[test]
    fn test_empty_chain_resolves_nothing() {
        let resolver = LicenseResolver::new(Vec::new());
        assert!(resolver.resolve("MIT").unwrap().is_none());
    }

    #[test]
    #[cfg(unix)]
    fn test_unreadable_license_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let root = folder(&tmp);
        // a directory in place of the file opens but cannot be read
        fs::create_dir_all(root.join("MIT.license")).unwrap();

        let err = FolderSource::new(&root).resolve("MIT").unwrap_err();
        assert!(matches!(err, Error::ReadLicense { .. }), "unexpected error: {err:?}");
    }
}
