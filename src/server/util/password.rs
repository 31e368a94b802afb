//! Salted SHA-256 credential digests.
//!
//! Stored form is `sha256$<salt hex>$<digest hex>` where the digest is
//! SHA-256(salt || password) over a random 16-byte salt.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::server::error::internal::InternalError;

const SCHEME: &str = "sha256";
const SALT_LEN: usize = 16;

/// Hashes `password` with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::random();
    let digest = digest(&salt, password);

    format!("{}${}${}", SCHEME, hex::encode(salt), hex::encode(digest))
}

/// Checks `password` against a digest produced by `hash_password`.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(InternalError::MalformedCredentialDigest)` - `stored` is not in the
///   expected layout
pub fn verify_password(password: &str, stored: &str) -> Result<bool, InternalError> {
    let mut parts = stored.splitn(3, '$');

    let (Some(scheme), Some(salt), Some(expected)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed("expected three `$`-separated parts"));
    };

    if scheme != SCHEME {
        return Err(malformed(&format!("unknown scheme `{}`", scheme)));
    }

    let salt = from_hex(salt)?;
    let expected = from_hex(expected)?;

    let actual = digest(&salt, password);
    if actual.len() != expected.len() {
        return Ok(false);
    }

    Ok(actual.as_slice().ct_eq(expected.as_slice()).into())
}

fn digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

fn from_hex(value: &str) -> Result<Vec<u8>, InternalError> {
    hex::decode(value).map_err(|e| malformed(&format!("invalid hex: {}", e)))
}

fn malformed(reason: &str) -> InternalError {
    InternalError::MalformedCredentialDigest {
        reason: reason.to_string(),
    }
}
