use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::notify::error::NotifyError;

type HmacSha256 = Hmac<Sha256>;

/// Lark custom bot signature.
///
/// Lark keys the HMAC with `"{timestamp}\n{secret}"` and signs an empty
/// message; the digest is base64 encoded with the standard padded alphabet.
pub fn sign(secret: &str, timestamp: i64) -> Result<String, NotifyError> {
    let string_to_sign = format!("{timestamp}\n{secret}");
    let mac = HmacSha256::new_from_slice(string_to_sign.as_bytes()).map_err(|err| {
        NotifyError::Signing {
            message: err.to_string(),
        }
    })?;
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
