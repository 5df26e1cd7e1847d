//! The report run: scan, parse, aggregate, render and compose.

use crate::aggregator::Aggregator;
use crate::error::{Error, error_chain};
use crate::licenses::LicenseResolver;
use crate::metadata::{find_metadata_files, parse_metadata_file};
use crate::reports::{TemplateSource, compose, render_report};
use camino::{Utf8Path, Utf8PathBuf};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufWriter};
use strum::Display;

const LOG_TARGET: &str = "  pipeline";

/// What to do with a metadata file that cannot be read or parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// Abort the run
    #[default]
    Fail,

    /// Log a warning and continue without the file
    Skip,
}

/// Validated settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root of the tree searched for metadata files.
    pub library_folder: Utf8PathBuf,

    /// Folder holding `<license type>.license` text files.
    pub license_folder: Utf8PathBuf,

    pub output_file: Utf8PathBuf,

    /// Custom template, or `None` for the bundled one.
    pub html_template: Option<Utf8PathBuf>,

    pub parse_errors: ParseErrorPolicy,
    pub escape_html: bool,
}

impl Settings {
    /// Settings with the default policies for the given folders and output file.
    #[must_use]
    pub fn new(library_folder: impl Into<Utf8PathBuf>, license_folder: impl Into<Utf8PathBuf>, output_file: impl Into<Utf8PathBuf>) -> Self {
        Self {
            library_folder: library_folder.into(),
            license_folder: license_folder.into(),
            output_file: output_file.into(),
            html_template: None,
            parse_errors: ParseErrorPolicy::default(),
            escape_html: true,
        }
    }
}

/// Outcome of a successful report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of metadata files found below the library folder.
    pub files_found: usize,

    /// Number of distinct records in the report.
    pub records: usize,

    /// Metadata files left out because they could not be read or parsed.
    pub skipped_files: Vec<Utf8PathBuf>,

    /// The rendered license types, in report order.
    pub license_types: Vec<String>,

    /// License types rendered without a license text.
    pub missing_licenses: Vec<String>,

    pub output_file: Utf8PathBuf,
}

/// Produce the license report described by `settings`.
///
/// The report is written to a temporary file next to the output file and moved into
/// place only once it is complete, so a failed run never leaves a partial report
/// behind nor clobbers an earlier one.
///
/// # Errors
///
/// Returns an error if a metadata file cannot be parsed (unless the policy is
/// [`ParseErrorPolicy::Skip`]), if a license text or the template cannot be read, or if
/// the output cannot be written.
pub fn collect_licenses(settings: &Settings) -> Result<RunSummary, Error> {
    log::info!(target: LOG_TARGET, "License HTML generator");
    log::debug!(target: LOG_TARGET, "License root folder is set to '{}'", settings.library_folder);

    let files = find_metadata_files(&settings.library_folder);
    log::info!(target: LOG_TARGET, "Found {} license information files.", files.len());

    let mut aggregator = Aggregator::new();
    let mut skipped_files = Vec::new();

    for file in &files {
        match parse_metadata_file(file) {
            Ok(record) => {
                if record.license_type.is_empty() {
                    log::warn!(target: LOG_TARGET, "No License_Type in '{file}', listing it under an empty license type");
                }
                let _ = aggregator.ingest(record);
            }
            Err(e) if settings.parse_errors == ParseErrorPolicy::Skip => {
                log::warn!(target: LOG_TARGET, "Skipping '{file}': {}", error_chain(&e));
                skipped_files.push(file.clone());
            }
            Err(e) => return Err(e),
        }
    }

    let resolver = LicenseResolver::with_license_folder(&settings.license_folder);
    let report = render_report(&aggregator, &resolver, settings.escape_html)?;
    let template = TemplateSource::from(settings.html_template.clone()).load()?;

    write_atomically(&settings.output_file, |writer| compose(&template, &report.index, &report.content, writer))?;
    log::info!(target: LOG_TARGET, "HTML License File created in {}", settings.output_file);

    Ok(RunSummary {
        files_found: files.len(),
        records: aggregator.record_count(),
        skipped_files,
        license_types: aggregator.license_types_sorted().map(str::to_string).collect(),
        missing_licenses: report.missing_licenses,
        output_file: settings.output_file.clone(),
    })
}

fn write_atomically(output: &Utf8Path, write: impl FnOnce(&mut BufWriter<fs::File>) -> io::Result<()>) -> Result<(), Error> {
    let error = |source| Error::Output {
        path: output.to_owned(),
        source,
    };

    let dir = match output.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    let _ = builder.prefix(".license-report").suffix(".tmp");

    // temporary files are created owner-only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = fs::metadata(output).map_or_else(|_| fs::Permissions::from_mode(0o644), |m| m.permissions());
        let _ = builder.permissions(permissions);
    }

    let temp = builder.tempfile_in(dir).map_err(error)?;
    let (file, temp_path) = temp.into_parts();

    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(error)?;
    let file = writer.into_inner().map_err(|e| error(e.into_error()))?;
    file.sync_all().map_err(error)?;
    drop(file);

    temp_path.persist(output).map_err(|e| error(e.error))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        _tmp: tempfile::TempDir,
        root: Utf8PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let tmp = tempfile::tempdir().unwrap();
            let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
            fs::create_dir_all(root.join("lib")).unwrap();
            fs::create_dir_all(root.join("licenses")).unwrap();
            Self { _tmp: tmp, root }
        }

        fn metadata(&self, name: &str, license_type: &str, library: &str) {
            let path = self.root.join("lib").join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, format!("License_Type={license_type}\nLibrary={library}\n")).unwrap();
        }

        fn settings(&self) -> Settings {
            Settings::new(self.root.join("lib"), self.root.join("licenses"), self.root.join("out/report.html"))
        }

        fn output(&self) -> String {
            fs::read_to_string(self.root.join("out/report.html")).unwrap()
        }
    }

    #[test]
    fn test_parse_error_policy_names() {
        assert_eq!(ParseErrorPolicy::Fail.to_string(), "fail");
        assert_eq!(ParseErrorPolicy::Skip.to_string(), "skip");
        assert_eq!(ParseErrorPolicy::default(), ParseErrorPolicy::Fail);
    }

    #[test]
    fn test_sections_sorted_and_deduplicated() {
        let fx = Fixture::new();
        fs::create_dir_all(fx.root.join("out")).unwrap();
        fx.metadata("a.lic", "MIT", "foo");
        fx.metadata("b.lic", "MIT", "bar");
        fx.metadata("nested/c.lic", "Apache-2.0", "baz");
        fx.metadata("nested/deeper/dup.lic", "MIT", "foo");

        let summary = collect_licenses(&fx.settings()).unwrap();
        assert_eq!(summary.files_found, 4);
        assert_eq!(summary.records, 3);
        assert_eq!(summary.license_types, ["Apache-2.0", "MIT"]);
        assert!(summary.missing_licenses.is_empty());

        let html = fx.output();
        let apache = html.find("<h2>Apache-2.0</h2>").unwrap();
        let mit = html.find("<h2>MIT</h2>").unwrap();
        assert!(apache < mit);
        assert_eq!(html.matches("<td>foo</td>").count(), 1);
    }

    #[test]
    fn test_empty_library_folder_renders_empty_report() {
        let fx = Fixture::new();
        fs::create_dir_all(fx.root.join("out")).unwrap();

        let summary = collect_licenses(&fx.settings()).unwrap();
        assert_eq!(summary.files_found, 0);
        assert!(summary.license_types.is_empty());
        assert!(fx.output().contains("<ul>\n\n</ul>"));
    }

    #[test]
    fn test_missing_output_folder_is_output_error() {
        let fx = Fixture::new();
        fx.metadata("a.lic", "MIT", "foo");

        let err = collect_licenses(&fx.settings()).unwrap_err();
        assert!(matches!(err, Error::Output { .. }), "unexpected error: {err:?}");
    }

    #[test]
    fn test_parse_failure_aborts_by_default() {
        let fx = Fixture::new();
        fs::create_dir_all(fx.root.join("out")).unwrap();
        fx.metadata("a.lic", "MIT", "foo");
        fs::write(fx.root.join("lib/bad.lic"), "Library=\\uXYZ1\n").unwrap();

        let err = collect_licenses(&fx.settings()).unwrap_err();
        assert!(matches!(err, Error::ParseMetadata { .. }), "unexpected error: {err:?}");
        assert!(!fx.root.join("out/report.html").exists());
    }

    #[test]
    fn test_parse_failure_skipped_on_request() {
        let fx = Fixture::new();
        fs::create_dir_all(fx.root.join("out")).unwrap();
        fx.metadata("a.lic", "MIT", "foo");
        fs::write(fx.root.join("lib/bad.lic"), "Library=\\uXYZ1\n").unwrap();

        let mut settings = fx.settings();
        settings.parse_errors = ParseErrorPolicy::Skip;

        let summary = collect_licenses(&settings).unwrap();
        assert_eq!(summary.skipped_files, [fx.root.join("lib/bad.lic")]);
        assert_eq!(summary.license_types, ["MIT"]);
    }

    #[test]
    fn test_missing_template_keeps_previous_output() {
        let fx = Fixture::new();
        fs::create_dir_all(fx.root.join("out")).unwrap();
        fs::write(fx.root.join("out/report.html"), "previous").unwrap();
        fx.metadata("a.lic", "MIT", "foo");

        let mut settings = fx.settings();
        settings.html_template = Some(fx.root.join("missing.html"));

        let err = collect_licenses(&settings).unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }), "unexpected error: {err:?}");
        assert_eq!(fx.output(), "previous");
    }

    #[test]
    fn test_custom_template_and_license_folder() {
        let fx = Fixture::new();
        fs::create_dir_all(fx.root.join("out")).unwrap();
        fx.metadata("a.lic", "In House", "tool");
        fs::write(fx.root.join("licenses/In House.license"), "All rights reserved.\n").unwrap();
        fs::write(fx.root.join("template.html"), "[%index%]\n{%content%}").unwrap();

        let mut settings = fx.settings();
        settings.html_template = Some(fx.root.join("template.html"));

        let _ = collect_licenses(&settings).unwrap();
        let html = fx.output();
        assert!(html.starts_with("[<li><a href=\"#In_House\">In House</a></li>]\n{<p /><a name=\"In_House\"></a>"));
        assert!(html.contains("<pre>All rights reserved.\n</pre>"));
        assert!(html.ends_with("<p>&nbsp;</p>}\n"));
    }

    #[test]
    fn test_missing_license_reported() {
        let fx = Fixture::new();
        fs::create_dir_all(fx.root.join("out")).unwrap();
        fx.metadata("a.lic", "Mystery License", "thing");

        let summary = collect_licenses(&fx.settings()).unwrap();
        assert_eq!(summary.missing_licenses, ["Mystery License"]);
        assert!(fx.output().contains("No license document attached for 'Mystery License'"));
    }
}
