//! Command dispatch logic for license-collector

use super::{GenerateArgs, InitArgs, NewArgs, generate_report, init_config, new_metadata};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "license-collector", author, version, long_about = None)]
#[command(about = "Collect third-party license metadata into an HTML attribution report")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan for license metadata files and generate the HTML report
    Generate(Box<GenerateArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Create a license metadata file for a library
    New(NewArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        Command::Generate(generate_args) => generate_report(host, generate_args),
        Command::Init(init_args) => init_config(host, init_args),
        Command::New(new_args) => new_metadata(host, new_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "license-collector",
            "generate",
            "--library-folder",
            "lib",
            "--license-folder",
            "licenses",
            "--output-file",
            "3rdparty.html",
            "--parse-errors",
            "skip",
            "--no-escape",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let Command::Generate(args) = cli.command else {
            unreachable!("expected the generate command");
        };
        assert_eq!(args.library_folder.as_deref().map(camino::Utf8Path::as_str), Some("lib"));
        assert_eq!(args.parse_errors, Some(crate::pipeline::ParseErrorPolicy::Skip));
        assert!(args.no_escape);
        assert_eq!(args.log_level, crate::commands::LogLevel::Debug);
    }

    #[test]
    fn test_new_requires_license_type_and_library() {
        let _ = Cli::try_parse_from(["license-collector", "new", "foo.lic", "--library", "foo"]).unwrap_err();
        let _ = Cli::try_parse_from(["license-collector", "new", "foo.lic", "--license-type", "MIT"]).unwrap_err();
        let _ = Cli::try_parse_from(["license-collector", "new", "foo.lic", "--license-type", "MIT", "--library", "foo"]).unwrap();
    }

    #[test]
    fn test_init_default_path() {
        let cli = Cli::try_parse_from(["license-collector", "init"]).unwrap();
        let Command::Init(args) = cli.command else {
            unreachable!("expected the init command");
        };
        assert_eq!(args.output, "licenses.toml");
        assert!(!args.force);
    }
}
