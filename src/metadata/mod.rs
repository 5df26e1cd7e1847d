//! Discovery and parsing of license metadata files.
//!
//! A metadata file (`*.lic`) is a small key-value document that sits next to a
//! third-party library and declares its licensing facts:
//!
//! ```text
//! #An example license
//! Date=2004-2009
//! License_Type=Apache Software License 2.0
//! Licensor=The Apache Foundation
//! Description=Apache Ant is a Java-based build tool.
//! Library=apache-ant
//! Acknowledgements=see Notice.txt
//! ```
//!
//! The [`scanner`] finds these files below a root directory, [`properties`] implements
//! the key-value text format and [`parser`] turns one file into a [`LicenseRecord`].

mod parser;
pub mod properties;
mod record;
mod scanner;

pub use parser::{format_metadata, parse_metadata_file};
pub use record::{LicenseRecord, MetadataKey};
pub use scanner::{METADATA_SUFFIX, find_metadata_files};
