/*
[INPUT]:  Message text and API secret
[OUTPUT]: Hex SHA-512 content hashes and HMAC-SHA512 signatures
[POS]:    Auth layer - cryptographic primitives for request authentication
[UPDATE]: When changing hashing algorithm or text encoding
*/

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha512};

use crate::http::{Result, SlError};

type HmacSha512 = Hmac<Sha512>;

/// Encode `text` one byte per character (ISO-8859-1).
///
/// Characters above U+00FF have no Latin-1 byte and are rejected.
pub fn latin1_bytes(field: &'static str, text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|character| {
            u8::try_from(u32::from(character)).map_err(|_| SlError::Encoding { field, character })
        })
        .collect()
}

/// Lowercase hex SHA-512 of the Latin-1 encoded body
pub fn content_hash(body: &str) -> Result<String> {
    let bytes = latin1_bytes("request body", body)?;
    Ok(hex::encode(Sha512::digest(&bytes)))
}

/// HMAC-SHA512 keyed by an API secret
pub struct HmacSigner {
    key: Vec<u8>,
}

impl HmacSigner {
    pub fn new(api_secret: &str) -> Result<Self> {
        Ok(Self {
            key: latin1_bytes("API secret", api_secret)?,
        })
    }

    /// Lowercase hex HMAC-SHA512 of the Latin-1 encoded message
    pub fn sign_hex(&self, message: &str) -> Result<String> {
        let bytes = latin1_bytes("signature payload", message)?;
        // HMAC accepts keys of any length, so this cannot fail.
        let mut mac = HmacSha512::new_from_slice(&self.key)
            .map_err(|err| SlError::Config(format!("invalid HMAC key: {err}")))?;
        mac.update(&bytes);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner").finish_non_exhaustive()
    }
}
