//! Decoding of text files read from disk.

/// Decode file contents as UTF-8, falling back to ISO-8859-1 when they are not valid
/// UTF-8. A leading byte order mark is dropped.
#[must_use]
pub fn decode_text(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    };

    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_owned(),
        None => text,
    }
}
