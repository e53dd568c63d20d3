// SPDX-License-Identifier: MPL-2.0
//! EXIF metadata extraction for image files.
//!
//! Extraction reads the whole file into memory (EXIF segments sit near the
//! start of the container, but the decoder wants a seekable source) and hands
//! the bytes to `kamadak-exif`. The result is an ordered list of tag/value
//! entries ready for table rendering. A file without an EXIF segment is not
//! an error; it simply yields no entries.

use crate::error::MetadataError;
use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// A single decoded tag/value pair. Rebuilt fully on every processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    /// EXIF tag name (e.g. `Make`, `DateTimeOriginal`).
    pub tag: String,
    /// Decoded value, scalar or multi-valued.
    pub value: EntryValue,
}

/// A decoded EXIF value: a single displayable string or a sequence of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    Scalar(String),
    List(Vec<String>),
}

impl EntryValue {
    /// Formats the value for display: sequences join their elements with
    /// `", "`, scalars are used unchanged.
    pub fn format(&self) -> String {
        match self {
            EntryValue::Scalar(s) => s.clone(),
            EntryValue::List(items) => items.join(", "),
        }
    }
}

impl fmt::Display for EntryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Reads a file fully into memory and decodes its EXIF metadata.
///
/// This is the suspension point of the viewer: it runs inside a `Task` so
/// the UI thread only sees the completed result.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<MetadataEntry>, MetadataError> {
    let bytes = fs::read(path).map_err(|e| MetadataError::Io(e.to_string()))?;
    decode_entries(&bytes)
}

/// Decodes EXIF metadata from raw image bytes.
///
/// Returns `Ok` with an empty list when the container is valid but carries
/// no EXIF segment; returns `DecodeFailed`/`Io` for anything the decoder
/// rejects outright.
pub fn decode_entries(bytes: &[u8]) -> Result<Vec<MetadataEntry>, MetadataError> {
    let mut cursor = Cursor::new(bytes);
    let exif = match exif::Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(Vec::new()),
        Err(err) => return Err(MetadataError::from_exif(&err)),
    };

    // Thumbnail IFD fields duplicate the primary image's tags; only the
    // primary IFD (which includes the Exif and GPS sub-IFDs) is shown.
    let entries = exif
        .fields()
        .filter(|field| field.ifd_num == exif::In::PRIMARY)
        .map(|field| MetadataEntry {
            tag: field.tag.to_string(),
            value: entry_value(field, &exif),
        })
        .collect();

    Ok(entries)
}

/// Converts a raw EXIF field into a displayable entry value.
///
/// Multi-valued numeric fields become `List` so the renderer can join them;
/// everything else goes through the decoder's display formatting, which
/// knows tag-specific units and enumerations. ASCII values are unwrapped
/// from the decoder's quoted form.
fn entry_value(field: &exif::Field, exif: &exif::Exif) -> EntryValue {
    use exif::Value;

    fn ascii_component(component: &[u8]) -> String {
        String::from_utf8_lossy(component)
            .trim_end_matches('\0')
            .to_string()
    }

    fn items<T: fmt::Display>(values: &[T]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    match &field.value {
        Value::Ascii(v) if v.len() == 1 => EntryValue::Scalar(ascii_component(&v[0])),
        Value::Ascii(v) if v.len() > 1 => {
            EntryValue::List(v.iter().map(|c| ascii_component(c)).collect())
        }
        Value::Byte(v) if v.len() > 1 => EntryValue::List(items(v)),
        Value::SByte(v) if v.len() > 1 => EntryValue::List(items(v)),
        Value::Short(v) if v.len() > 1 => EntryValue::List(items(v)),
        Value::SShort(v) if v.len() > 1 => EntryValue::List(items(v)),
        Value::Long(v) if v.len() > 1 => EntryValue::List(items(v)),
        Value::SLong(v) if v.len() > 1 => EntryValue::List(items(v)),
        Value::Rational(v) if v.len() > 1 => EntryValue::List(items(v)),
        Value::SRational(v) if v.len() > 1 => EntryValue::List(items(v)),
        Value::Float(v) if v.len() > 1 => EntryValue::List(items(v)),
        Value::Double(v) if v.len() > 1 => EntryValue::List(items(v)),
        _ => EntryValue::Scalar(field.display_value().with_unit(exif).to_string()),
    }
}
