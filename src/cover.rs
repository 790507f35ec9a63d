//! Cover images. The catalog treats `coverImage` as an opaque string; this module
//! only builds the two shapes the form produces: a self-contained data URI from
//! an uploaded file, or the default cover URL.

use base64::{engine::general_purpose::STANDARD, Engine};

pub const DEFAULT_COVER_IMAGE: &str = "https://covers.openlibrary.org/b/isbn/9780000000000-M.jpg";

/// Encode `bytes` as a `data:<mime>;base64,...` URI.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Only `image/*` uploads are accepted as covers.
pub fn is_image_mime(mime: &str) -> bool {
    mime.strip_prefix("image/")
        .is_some_and(|subtype| !subtype.is_empty())
}

/// `cover` unless it is blank, in which case `default`.
pub fn cover_or_default(cover: &str, default: &str) -> String {
    if cover.trim().is_empty() {
        default.to_string()
    } else {
        cover.to_string()
    }
}
