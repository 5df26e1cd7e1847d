use crate::error::Error;
use crate::text::decode_text;
use camino::Utf8PathBuf;
use std::fs;
use std::io::{self, Write};

const LOG_TARGET: &str = "  template";

/// Marker replaced by the index fragment.
pub const INDEX_MARKER: &str = "%index%";

/// Marker replaced by the content fragment.
pub const CONTENT_MARKER: &str = "%content%";

/// Template used when no custom template is configured.
pub const BUNDLED_TEMPLATE: &str = include_str!("../../resources/license_template.html");

/// Where the report template comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    #[default]
    Bundled,
    File(Utf8PathBuf),
}

impl TemplateSource {
    /// Load the template text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateNotFound`] if the template file cannot be read.
    pub fn load(&self) -> Result<String, Error> {
        match self {
            Self::Bundled => Ok(BUNDLED_TEMPLATE.to_string()),
            Self::File(path) => {
                log::debug!(target: LOG_TARGET, "Loading HTML template from '{path}'");
                let bytes = fs::read(path).map_err(|source| Error::TemplateNotFound {
                    template: path.to_string(),
                    source,
                })?;
                Ok(decode_text(bytes))
            }
        }
    }
}

impl From<Option<Utf8PathBuf>> for TemplateSource {
    fn from(path: Option<Utf8PathBuf>) -> Self {
        path.map_or(Self::Bundled, Self::File)
    }
}

/// Write `template` to `writer` line by line, substituting the report fragments.
///
/// On each line the first `%content%` is replaced by `content`; on lines without one, the
/// first `%index%` is replaced by `index`. Every line, including the last, is terminated
/// with `\n`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn compose<W: Write + ?Sized>(template: &str, index: &str, content: &str, writer: &mut W) -> io::Result<()> {
    for line in template.lines() {
        if let Some((before, after)) = line.split_once(CONTENT_MARKER) {
            write!(writer, "{before}{content}{after}")?;
        } else if let Some((before, after)) = line.split_once(INDEX_MARKER) {
            write!(writer, "{before}{index}{after}")?;
        } else {
            writer.write_all(line.as_bytes())?;
        }
        writer.write_all(b"\n")?;
    }

    Ok(())
}
