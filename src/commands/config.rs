use crate::Result;
use crate::error::Error;
use crate::pipeline::{ParseErrorPolicy, Settings};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, bail};
use serde::Deserialize;
use std::fs;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Run options as read from a configuration file or the command line.
///
/// Every option is optional here; [`Config::into_settings`] checks that the required ones
/// are present.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root of the tree searched for `.lic` metadata files
    pub library_folder: Option<Utf8PathBuf>,

    /// Folder holding `<license type>.license` text files
    pub license_folder: Option<Utf8PathBuf>,

    /// Where the HTML report is written
    pub output_file: Option<Utf8PathBuf>,

    /// Custom HTML template; the bundled template is used when absent
    pub html_template: Option<Utf8PathBuf>,

    /// What to do with metadata files that cannot be parsed
    pub parse_errors: Option<ParseErrorPolicy>,

    /// Whether interpolated text is HTML-escaped
    pub escape_html: Option<bool>,
}

impl Config {
    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the file cannot be read or is not a valid
    /// configuration.
    pub fn load(path: &Utf8Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|e| Error::Configuration {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;

        toml::from_str(&text).map_err(|e| Error::Configuration {
            path: path.to_owned(),
            reason: e.to_string(),
        })
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file already exists and `force` is not set, or if it cannot be written
    pub fn save_default(output_path: &Utf8Path, force: bool) -> Result<()> {
        if !force && output_path.exists() {
            bail!("'{output_path}' already exists, use --force to overwrite it");
        }

        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Combine two configurations, options set in `overrides` taking precedence.
    #[must_use]
    pub fn overlay(self, overrides: Self) -> Self {
        Self {
            library_folder: overrides.library_folder.or(self.library_folder),
            license_folder: overrides.license_folder.or(self.license_folder),
            output_file: overrides.output_file.or(self.output_file),
            html_template: overrides.html_template.or(self.html_template),
            parse_errors: overrides.parse_errors.or(self.parse_errors),
            escape_html: overrides.escape_html.or(self.escape_html),
        }
    }

    /// Check that the required options are present and apply defaults to the others.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] naming the first required option that is not set.
    pub fn into_settings(self) -> Result<Settings, Error> {
        let library_folder = self.library_folder.ok_or(Error::MissingOption { option: "library_folder" })?;
        let license_folder = self.license_folder.ok_or(Error::MissingOption { option: "license_folder" })?;
        let output_file = self.output_file.ok_or(Error::MissingOption { option: "output_file" })?;

        Ok(Settings {
            library_folder,
            license_folder,
            output_file,
            html_template: self.html_template,
            parse_errors: self.parse_errors.unwrap_or_default(),
            escape_html: self.escape_html.unwrap_or(true),
        })
    }
}
