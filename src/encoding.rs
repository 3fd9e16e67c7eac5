//! Character encoding detection and transcoding.
//!
//! Captured pages arrive as raw bytes. The encoding is taken from a byte
//! order mark when present, else from the first charset declaration in the
//! first 1024 bytes, else UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes scanned for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">` or the `charset=` parameter of an http-equiv
/// Content-Type declaration, whichever comes first.
#[allow(clippy::expect_used)]
static CHARSET_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?\bcharset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#)
        .expect("CHARSET_DECLARATION regex")
});

/// Where the detected encoding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingSource {
    ByteOrderMark,
    MetaDeclaration,
    Default,
}

/// Detect character encoding from HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> (&'static Encoding, EncodingSource) {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return (encoding, EncodingSource::ByteOrderMark);
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    let declared = CHARSET_DECLARATION
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()));

    match declared {
        // UTF-16 labels without a BOM are decoded as UTF-8.
        Some(encoding) if encoding.output_encoding() == UTF_8 => (UTF_8, EncodingSource::MetaDeclaration),
        Some(encoding) => (encoding, EncodingSource::MetaDeclaration),
        None => (UTF_8, EncodingSource::Default),
    }
}

/// Transcode HTML bytes to a UTF-8 string, replacing malformed sequences
/// with U+FFFD.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let (encoding, source) = detect_encoding(html);
    // `decode` sniffs and strips a BOM itself.
    let (text, _, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), ?source, "malformed bytes replaced during decode");
    }
    text.into_owned()
}
