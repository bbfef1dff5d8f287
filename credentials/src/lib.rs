//! Credential primitives library
//!
//! Provides the cryptographic building blocks for credential-based
//! authentication services:
//! - Password hashing (PBKDF2-HMAC-SHA256 with per-password salt)
//! - Signed access-token issuance and validation (HS256 JWT)
//!
//! Services define their own orchestration on top of these primitives.
//! Nothing in this crate reads the clock or configuration ambiently;
//! callers pass both in, which keeps the primitives deterministic under test.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use credentials::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password");
//! let is_valid = hasher.verify("my_password", &digest.hash, &digest.salt).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Access Tokens
//! ```
//! use chrono::Utc;
//! use credentials::TokenSigner;
//!
//! let signer = TokenSigner::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     "issuer",
//!     "audience",
//!     5,
//! );
//! let token = signer.issue("user123", "alice", Utc::now(), None).unwrap();
//! let claims = signer.decode(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordDigest;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::TokenError;
pub use token::TokenSigner;
