// Hash / encoding generator: MD5, SHA-1, SHA-256 and Base64 of the UTF-8
// bytes of the input.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use md5::Md5;
use serde::Serialize;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::error::TextError;

/// Inputs shorter than this (in characters) are rejected.
pub const MIN_DIGEST_INPUT_CHARS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Digests {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
    pub base64: String,
}

/// Compute every digest for `text`.
pub fn generate(text: &str) -> Result<Digests, TextError> {
    let len = text.chars().count();
    if len < MIN_DIGEST_INPUT_CHARS {
        return Err(TextError::InputTooShort {
            len,
            min: MIN_DIGEST_INPUT_CHARS,
        });
    }

    let bytes = text.as_bytes();
    Ok(Digests {
        md5: hex::encode(Md5::digest(bytes)),
        sha1: hex::encode(Sha1::digest(bytes)),
        sha256: hex::encode(Sha256::digest(bytes)),
        base64: STANDARD.encode(bytes),
    })
}
