//! Compressed blob encoding for library entries.
//!
//! draw.io expects the `xml` field of a library entry to hold a *raw*
//! deflate stream (no zlib header, no Adler-32 trailer), base64 encoded.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use flate2::{Compression, read::DeflateDecoder, write::ZlibEncoder};
use std::io::{Read, Write};
use thiserror::Error;

/// zlib envelope sizes: CMF/FLG header and Adler-32 trailer.
const ZLIB_HEADER_LEN: usize = 2;
const ZLIB_TRAILER_LEN: usize = 4;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("deflate failed")]
    Compress(#[source] std::io::Error),

    #[error("compressed stream too short ({0} bytes)")]
    Truncated(usize),

    #[error("invalid base64 payload")]
    Base64(#[from] base64::DecodeError),

    #[error("inflate failed")]
    Inflate(#[source] std::io::Error),

    #[error("decoded content is not UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Compress `content` at maximum level and base64 the raw deflate stream.
pub fn encode(content: &str) -> Result<String, CodecError> {
    let raw = deflate_raw(content.as_bytes())?;
    Ok(BASE64.encode(raw))
}

/// Reverse of [`encode`].
#[allow(dead_code)] // draw.io decodes; used by tests
pub fn decode(blob: &str) -> Result<String, CodecError> {
    let raw = BASE64.decode(blob)?;
    let mut inflated = Vec::with_capacity(raw.len() * 4);
    DeflateDecoder::new(raw.as_slice())
        .read_to_end(&mut inflated)
        .map_err(CodecError::Inflate)?;
    Ok(String::from_utf8(inflated)?)
}

/// zlib-compress, then cut the envelope off.
fn deflate_raw(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data).map_err(CodecError::Compress)?;
    let zlib = encoder.finish().map_err(CodecError::Compress)?;

    if zlib.len() < ZLIB_HEADER_LEN + ZLIB_TRAILER_LEN {
        return Err(CodecError::Truncated(zlib.len()));
    }
    Ok(zlib[ZLIB_HEADER_LEN..zlib.len() - ZLIB_TRAILER_LEN].to_vec())
}
