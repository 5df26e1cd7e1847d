use super::Host;
use crate::Result;
use crate::metadata::{LicenseRecord, METADATA_SUFFIX, format_metadata};
use camino::Utf8PathBuf;
use chrono::Local;
use clap::Parser;
use ohno::IntoAppError;
use std::fs::OpenOptions;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Path of the metadata file to create
    #[arg(value_name = "PATH")]
    pub path: Utf8PathBuf,

    /// License type the library is distributed under, e.g. "Apache Software License 2.0"
    #[arg(long, value_name = "TYPE")]
    pub license_type: String,

    /// Name of the library
    #[arg(long, value_name = "NAME")]
    pub library: String,

    /// Who licenses the library
    #[arg(long, value_name = "NAME", default_value = "")]
    pub licensor: String,

    /// Short description of the library
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub description: String,

    /// Copyright date or range of dates, e.g. 2004-2009
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub date: String,

    /// Acknowledgements required by the license
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub acknowledgements: String,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

impl NewArgs {
    fn record(&self) -> LicenseRecord {
        LicenseRecord {
            licensor: self.licensor.clone(),
            license_type: self.license_type.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
            acknowledgements: self.acknowledgements.clone(),
            library: self.library.clone(),
        }
    }
}

/// Write a metadata file describing one library
///
/// # Errors
///
/// Returns an error if the file already exists and `--force` was not given, or if it cannot be written
pub fn new_metadata<H: Host>(host: &mut H, args: &NewArgs) -> Result<()> {
    let header = format!("License metadata for {}", args.library);
    let timestamp = Local::now().format("%a %b %d %H:%M:%S %Y").to_string();
    let text = format_metadata(&args.record(), &[header.as_str(), timestamp.as_str()]);

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .create_new(!args.force)
        .open(&args.path)
        .into_app_err_with(|| format!("creating metadata file '{}'", args.path))?;

    file.write_all(text.as_bytes())
        .into_app_err_with(|| format!("writing metadata file '{}'", args.path))?;

    let _ = writeln!(host.output(), "Created metadata file: {}", args.path);

    if !args.path.as_str().ends_with(METADATA_SUFFIX) {
        let _ = writeln!(
            host.error(),
            "warning: '{}' does not end in '{METADATA_SUFFIX}' and will not be picked up when generating reports",
            args.path
        );
    }

    Ok(())
}
