use super::properties::{parse_properties, write_properties};
use super::{LicenseRecord, MetadataKey};
use crate::error::Error;
use crate::text::decode_text;
use camino::Utf8Path;
use std::fs;
use strum::IntoEnumIterator;

const LOG_TARGET: &str = "    parser";

/// Read one metadata file into a [`LicenseRecord`].
///
/// Files are decoded as UTF-8, falling back to ISO-8859-1 for files that are not valid
/// UTF-8.
///
/// # Errors
///
/// Returns [`Error::ReadMetadata`] if the file cannot be read and
/// [`Error::ParseMetadata`] if it is not valid key-value text.
pub fn parse_metadata_file(path: &Utf8Path) -> Result<LicenseRecord, Error> {
    log::debug!(target: LOG_TARGET, "Handling file: {path}");

    let bytes = fs::read(path).map_err(|source| Error::ReadMetadata {
        path: path.to_owned(),
        source,
    })?;

    let text = decode_text(bytes);
    let properties = parse_properties(&text).map_err(|source| Error::ParseMetadata {
        path: path.to_owned(),
        source,
    })?;

    Ok(LicenseRecord::from_properties(&properties))
}

/// Render a record as metadata file text, all six keys in their canonical order.
#[must_use]
pub fn format_metadata(record: &LicenseRecord, comments: &[&str]) -> String {
    let mut text = String::new();
    let entries = MetadataKey::iter().map(|key| (key.name(), record.get(key)));

    // writing into a String cannot fail
    let _ = write_properties(comments, entries, &mut text);
    text
}
