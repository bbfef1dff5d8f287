use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::PasswordError;

/// 128-bit salt
const SALT_SIZE: usize = 16;
/// 256-bit derived key
const KEY_SIZE: usize = 32;
const ITERATIONS: u32 = 100_000;

/// Password hashing implementation.
///
/// Derives keys with PBKDF2-HMAC-SHA256 over a random per-password salt.
/// Hash and salt are kept as separate base64 strings so they can be stored
/// in independent columns/fields.
pub struct PasswordHasher;

/// Derived hash and the salt it was derived with, both base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    pub hash: String,
    pub salt: String,
}

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password securely.
    ///
    /// Generates a fresh random salt from the OS CSPRNG and derives a
    /// 256-bit key with 100,000 PBKDF2 iterations.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Base64-encoded hash and salt
    pub fn hash(&self, password: &str) -> PasswordDigest {
        let mut salt_bytes = [0u8; SALT_SIZE];
        OsRng.fill_bytes(&mut salt_bytes);

        let mut key_bytes = [0u8; KEY_SIZE];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt_bytes, ITERATIONS, &mut key_bytes);

        PasswordDigest {
            hash: BASE64.encode(key_bytes),
            salt: BASE64.encode(salt_bytes),
        }
    }

    /// Verify a password against a stored hash and salt.
    ///
    /// Re-derives the key with identical parameters and compares in
    /// constant time, so verification never short-circuits on a prefix
    /// match.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored base64 hash
    /// * `salt` - Stored base64 salt
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    ///
    /// # Errors
    /// * `InvalidEncoding` - Stored hash or salt is not valid base64
    pub fn verify(&self, password: &str, hash: &str, salt: &str) -> Result<bool, PasswordError> {
        let salt_bytes = BASE64
            .decode(salt)
            .map_err(|e| PasswordError::InvalidEncoding(e.to_string()))?;
        let hash_bytes = BASE64
            .decode(hash)
            .map_err(|e| PasswordError::InvalidEncoding(e.to_string()))?;

        let mut key_bytes = [0u8; KEY_SIZE];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt_bytes, ITERATIONS, &mut key_bytes);

        // Slice comparison is length-aware: a stored hash of the wrong
        // length compares unequal rather than panicking.
        Ok(key_bytes[..].ct_eq(&hash_bytes[..]).into())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
