// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Metadata(MetadataError),
}

/// Specific error types for metadata extraction issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// The selected file does not declare an `image/*` type.
    NotAnImage {
        /// Declared MIME type of the rejected file (e.g. `application/pdf`).
        mime: String,
    },

    /// The file looks like an image but its EXIF container could not be
    /// decoded (corrupt data, truncated segment, unsupported layout).
    DecodeFailed(String),

    /// I/O error while reading the file (not found, permission denied, etc.)
    Io(String),
}

impl MetadataError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MetadataError::NotAnImage { .. } => "error-not-an-image",
            MetadataError::DecodeFailed(_) => "error-decode-failed",
            MetadataError::Io(_) => "error-io",
        }
    }

    /// Categorizes an error from the EXIF decoder at the decode boundary.
    ///
    /// The absence of an EXIF segment is not an error and is handled before
    /// this point; everything that reaches here is a genuine failure.
    pub fn from_exif(err: &exif::Error) -> Self {
        match err {
            exif::Error::Io(e) => MetadataError::Io(e.to_string()),
            other => MetadataError::DecodeFailed(other.to_string()),
        }
    }
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::NotAnImage { mime } => {
                write!(f, "Not an image file (declared type: {})", mime)
            }
            MetadataError::DecodeFailed(msg) => write!(f, "Metadata decoding failed: {}", msg),
            MetadataError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Metadata(e) => write!(f, "Metadata Error: {}", e),
        }
    }
}

impl From<MetadataError> for Error {
    fn from(err: MetadataError) -> Self {
        Error::Metadata(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
