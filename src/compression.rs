//! Gzip framing for upload payloads.
//!
//! The roster endpoint expects `Content-Encoding: gzip` bodies, so payloads
//! are wrapped in a standard gzip stream (RFC 1952) rather than raw deflate.
//!
//! # Example
//!
//! ```
//! use student_sync::compression::{gzip_compress, gzip_decompress, is_gzip};
//!
//! let compressed = gzip_compress(b"[]").unwrap();
//! assert!(is_gzip(&compressed));
//! assert_eq!(gzip_decompress(&compressed).unwrap(), b"[]");
//! ```

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

/// Gzip magic bytes (RFC 1952 ID1, ID2)
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Check if data starts with the gzip magic bytes.
#[inline]
#[must_use]
pub fn is_gzip(data: &[u8]) -> bool {
    data.len() >= 2 && data[..2] == GZIP_MAGIC
}

/// Compress bytes into a gzip stream at the default level.
pub fn gzip_compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Decompress a complete gzip stream.
pub fn gzip_decompress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}
