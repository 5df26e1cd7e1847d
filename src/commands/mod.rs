//! Command-line interface for license-collector
//!
//! The `run` function parses the command line with clap and routes to one of the
//! subcommand handlers:
//!
//! - **generate**: resolve settings from the configuration file and the command line,
//!   run the report pipeline and print a one-line summary
//! - **init**: write the default configuration file
//! - **new**: write a metadata file for one library
//!
//! All handlers talk to the outside world through a [`Host`], so they can be driven
//! in-process by tests.

mod common;
mod config;
mod generate;
mod host;
mod init;
mod new;
mod run;

pub use common::{ColorMode, LogLevel};
pub use config::{Config, DEFAULT_CONFIG_TOML};
pub use generate::{GenerateArgs, generate_report};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use new::{NewArgs, new_metadata};
pub use run::run;
