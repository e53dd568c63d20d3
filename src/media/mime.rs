// SPDX-License-Identifier: MPL-2.0
//! Declared MIME types derived from file extensions.
//!
//! This is a trust-the-label check, not content sniffing: a renamed file
//! passes or fails on its extension alone, mirroring how browsers report a
//! file's type from its name. Verification against actual bytes happens
//! later, at the EXIF decode boundary.

use std::path::Path;

/// Fallback type for files with an unknown or missing extension.
pub const UNKNOWN: &str = "application/octet-stream";

/// Image extensions offered in the file dialog filter.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "heic", "heif", "avif",
];

/// Returns the declared MIME type for a path, based on its extension.
pub fn from_path<P: AsRef<Path>>(path: P) -> &'static str {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        Some("avif") => "image/avif",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("html") | Some("htm") => "text/html",
        Some("mp4") => "video/mp4",
        Some("mkv") => "video/x-matroska",
        Some("mp3") => "audio/mpeg",
        Some("zip") => "application/zip",
        _ => UNKNOWN,
    }
}

/// Whether a declared MIME type matches the `image/*` pattern.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}
