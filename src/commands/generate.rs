use super::Host;
use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use crate::error::{Error, error_chain};
use crate::pipeline::{ParseErrorPolicy, RunSummary, collect_licenses};
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::IntoAppError;
use owo_colors::OwoColorize;
use std::io::Write;

#[derive(Parser, Debug, Default)]
pub struct GenerateArgs {
    /// Root folder searched recursively for `.lic` metadata files
    #[arg(long, value_name = "PATH")]
    pub library_folder: Option<Utf8PathBuf>,

    /// Folder holding `<License_Type>.license` text files
    #[arg(long, value_name = "PATH")]
    pub license_folder: Option<Utf8PathBuf>,

    /// Where to write the HTML report
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<Utf8PathBuf>,

    /// HTML template with `%index%` and `%content%` markers (default is the bundled template)
    #[arg(long, value_name = "PATH")]
    pub html_template: Option<Utf8PathBuf>,

    /// Path to configuration file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// What to do with metadata files that cannot be parsed [default: fail]
    #[arg(long, value_name = "POLICY")]
    pub parse_errors: Option<ParseErrorPolicy>,

    /// Insert metadata and license texts into the report without HTML escaping
    #[arg(long)]
    pub no_escape: bool,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: LogLevel,
}

impl GenerateArgs {
    fn overrides(&self) -> Config {
        Config {
            library_folder: self.library_folder.clone(),
            license_folder: self.license_folder.clone(),
            output_file: self.output_file.clone(),
            html_template: self.html_template.clone(),
            parse_errors: self.parse_errors,
            escape_html: self.no_escape.then_some(false),
        }
    }
}

fn generate_report_inner(args: &GenerateArgs) -> Result<RunSummary, Error> {
    let file_config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let settings = file_config.overlay(args.overrides()).into_settings()?;
    collect_licenses(&settings)
}

/// Generate the license report and print a summary of the run
///
/// # Errors
///
/// Returns an error if the settings are incomplete or invalid, or if the report cannot be produced
pub fn generate_report<H: Host>(host: &mut H, args: &GenerateArgs) -> Result<()> {
    init_logging(args.log_level);

    match generate_report_inner(args) {
        Ok(summary) => {
            print_summary(host, &summary, args.color.use_colors());
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Unable to generate the license report: {}", error_chain(&e));
            host.exit(1);
            Err(e).into_app_err("generating the license report")
        }
    }
}

fn print_summary<H: Host>(host: &mut H, summary: &RunSummary, use_colors: bool) {
    let status = format!(
        "Generated license report for {} license type(s) at {}",
        summary.license_types.len(),
        summary.output_file
    );

    if use_colors {
        let _ = writeln!(host.output(), "{}", status.green());
    } else {
        let _ = writeln!(host.output(), "{status}");
    }

    if !summary.missing_licenses.is_empty() {
        let warning = format!(
            "{} license type(s) without license text: {}",
            summary.missing_licenses.len(),
            summary.missing_licenses.join(", ")
        );

        if use_colors {
            let _ = writeln!(host.output(), "{}", warning.yellow());
        } else {
            let _ = writeln!(host.output(), "{warning}");
        }
    }

    if !summary.skipped_files.is_empty() {
        let _ = writeln!(
            host.output(),
            "Skipped {} metadata file(s) that could not be parsed",
            summary.skipped_files.len()
        );
    }
}
