//! A tool to collect third-party license metadata into a single HTML attribution report.
//!
//! # Overview
//!
//! Projects that ship third-party libraries usually owe their users a list of those
//! libraries together with the license terms they are distributed under. `license-collector`
//! builds that list from small metadata files kept next to each library in the source tree.
//!
//! # Metadata Files
//!
//! Each library is described by a `.lic` file in key-value format:
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
//! `License_Type` is the grouping key: every library with the same license type ends up
//! in the same section of the report. All keys are optional, unknown keys are ignored.
//!
//! **Create a metadata file:**
//! ```bash
//! license-collector new lib/ant/ant.lic --license-type "Apache Software License 2.0" --library apache-ant
//! ```
//!
//! # License Texts
//!
//! The text of each license type is read from `<license folder>/<License_Type>.license`.
//! When no such file exists, a bundled text is used if one is available (`MIT`, `ISC`,
//! `BSD-2-Clause`, `BSD-3-Clause` and `Apache-2.0`). Otherwise the section shows a
//! "No license document attached" notice and a warning is logged.
//!
//! # Generating the Report
//!
//! ```bash
//! license-collector generate --library-folder lib --license-folder licenses --output-file 3rdparty.html
//! ```
//!
//! Sections appear in sorted order of license type, each with the license text and an
//! attribution table listing the libraries. Identical metadata files under one license
//! type are listed once.
//!
//! **Use a configuration file:**
//! ```bash
//! license-collector init
//! license-collector generate -c licenses.toml
//! ```
//!
//! Options given on the command line override the configuration file.
//!
//! **Use a custom page layout:**
//! ```bash
//! license-collector generate -c licenses.toml --html-template licenses/template.html
//! ```
//!
//! The template is copied to the report line by line, with the first `%index%` on a line
//! replaced by the list of license types and the first `%content%` on a line replaced by
//! the license sections.
//!
//! # Options
//!
//! - `--parse-errors skip` leaves out metadata files that cannot be parsed instead of
//!   failing the run
//! - `--no-escape` inserts metadata values into the report as raw HTML
//! - `--log-level <LEVEL>` controls diagnostic output on stderr (`RUST_LOG` is honored too)
//!
//! The report is written to a temporary file and moved into place once complete, so a
//! failed run leaves any previous report untouched.

use license_collector::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that talks to the real process environment.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args())
}
