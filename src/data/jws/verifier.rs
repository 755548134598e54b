use async_trait::async_trait;

use crate::errors::JwsError;

/// Establishes trust in a compact-serialized JWS signed by the App Store.
///
/// Implementations check the ES256 signature against the leaf certificate
/// in the `x5c` header and validate the chain up to Apple's root CA. This
/// crate ships no implementation; it lives with the HTTP and webhook layers.
#[async_trait]
pub trait JwsVerifier: Send + Sync {
    /// Returns the payload bytes only if the signature and chain are valid.
    async fn verify(&self, compact: &str) -> Result<Vec<u8>, JwsError>;
}
