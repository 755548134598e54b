use std::{fmt, marker::PhantomData};

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use super::JwsVerifier;
use crate::{
    data::{
        codec::{decode_slice, FromJson, JsonPath},
        models::app_store_server_api::jws_decoded_header_model::JwsDecodedHeaderModel,
    },
    errors::{JwsError, ModelError},
};

/// Apple emits unpadded base64url, but padded segments are accepted as well.
const SEGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A compact-serialized JWS whose payload decodes to `T`.
///
/// The token is opaque: holding one says nothing about whether it is
/// genuine. Trusted values come only from [`Jws::verify_and_decode`]. The
/// string is kept exactly as received and encodes back unchanged.
pub struct Jws<T> {
    compact: String,
    payload: PhantomData<fn() -> T>,
}

impl<T> Jws<T> {
    pub fn new(compact: impl Into<String>) -> Self {
        Self {
            compact: compact.into(),
            payload: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.compact
    }

    pub fn into_string(self) -> String {
        self.compact
    }

    fn segments(&self) -> Result<[&str; 3], JwsError> {
        let mut parts = self.compact.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), Some(signature), None)
                if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
            {
                Ok([header, payload, signature])
            }
            _ => Err(JwsError::Malformed(
                "expected three dot-separated segments",
            )),
        }
    }

    /// Decodes the protected header without checking the signature.
    pub fn decode_header_unverified(&self) -> Result<JwsDecodedHeaderModel, JwsError> {
        let [header, _, _] = self.segments()?;
        let bytes = decode_segment("header", header)?;
        debug!("inspecting unverified JWS header");
        Ok(decode_slice(&bytes)?)
    }
}

impl<T: FromJson> Jws<T> {
    /// Decodes the payload without checking the signature.
    ///
    /// The result carries no trust. Use it for routing or logging only;
    /// anything that grants or revokes entitlements must go through
    /// [`Jws::verify_and_decode`].
    pub fn decode_payload_unverified(&self) -> Result<T, JwsError> {
        let [_, payload, _] = self.segments()?;
        let bytes = decode_segment("payload", payload)?;
        debug!("inspecting unverified JWS payload");
        Ok(decode_slice(&bytes)?)
    }

    /// Verifies the token with `verifier` and decodes the payload it vouches
    /// for.
    pub async fn verify_and_decode<V>(&self, verifier: &V) -> Result<T, JwsError>
    where
        V: JwsVerifier + ?Sized,
    {
        let payload = verifier.verify(&self.compact).await?;
        debug!(bytes = payload.len(), "decoding verified JWS payload");
        Ok(decode_slice(&payload)?)
    }
}

fn decode_segment(segment: &'static str, encoded: &str) -> Result<Vec<u8>, JwsError> {
    SEGMENT_ENGINE
        .decode(encoded)
        .map_err(|source| JwsError::Base64 { segment, source })
}

impl<T> Clone for Jws<T> {
    fn clone(&self) -> Self {
        Self::new(self.compact.clone())
    }
}

impl<T> PartialEq for Jws<T> {
    fn eq(&self, other: &Self) -> bool {
        self.compact == other.compact
    }
}

impl<T> Eq for Jws<T> {}

impl<T> std::hash::Hash for Jws<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.compact.hash(state);
    }
}

impl<T> fmt::Debug for Jws<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Jws").field(&self.compact).finish()
    }
}

impl<T> FromJson for Jws<T> {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        String::from_json(value, path).map(Self::new)
    }
}

impl<T> Serialize for Jws<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.compact)
    }
}

impl<'de, T> Deserialize<'de> for Jws<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::json;

    use super::*;
    use crate::data::models::app_store_server_api::{
        common::Environment,
        jws_renewal_info_decoded_payload_model::JwsRenewalInfoDecodedPayloadModel,
    };

    fn compact(header: &Value, payload: &Value) -> String {
        format!(
            "{}.{}.c2lnbmF0dXJl",
            URL_SAFE_NO_PAD.encode(header.to_string()),
            URL_SAFE_NO_PAD.encode(payload.to_string()),
        )
    }

    fn renewal_payload() -> Value {
        json!({
            "autoRenewProductId": "com.example.yearly",
            "autoRenewStatus": 1,
            "environment": "Sandbox",
            "originalTransactionId": "2000000000000001",
            "productId": "com.example.monthly",
            "recentSubscriptionStartDate": 1_690_000_000_000i64,
            "renewalDate": 1_700_000_000_000i64,
            "signedDate": 1_695_000_000_000i64,
        })
    }

    #[test]
    fn decodes_header_and_payload_without_verification() {
        let token: Jws<JwsRenewalInfoDecodedPayloadModel> = Jws::new(compact(
            &json!({ "alg": "ES256", "x5c": ["MIIB"] }),
            &renewal_payload(),
        ));

        let header = token.decode_header_unverified().unwrap();
        assert_eq!(header.alg, "ES256");

        let payload = token.decode_payload_unverified().unwrap();
        assert_eq!(payload.product_id, "com.example.monthly");
        assert_eq!(payload.environment, Environment::Sandbox);
    }

    #[test]
    fn rejects_tokens_without_three_segments() {
        let token: Jws<JwsRenewalInfoDecodedPayloadModel> = Jws::new("abc.def");
        assert!(matches!(
            token.decode_payload_unverified(),
            Err(JwsError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_tokens_with_an_empty_segment() {
        for compact in ["e30.e30.", ".e30.sig", "e30..sig"] {
            let token: Jws<JwsRenewalInfoDecodedPayloadModel> = Jws::new(compact);
            assert!(
                matches!(token.decode_header_unverified(), Err(JwsError::Malformed(_))),
                "{compact}"
            );
        }
    }

    #[test]
    fn reports_bad_base64_segment() {
        let token: Jws<JwsRenewalInfoDecodedPayloadModel> = Jws::new("e30.!!!.sig");
        assert!(matches!(
            token.decode_payload_unverified(),
            Err(JwsError::Base64 {
                segment: "payload",
                ..
            })
        ));
    }

    #[test]
    fn payload_schema_errors_surface_as_model_errors() {
        let token: Jws<JwsRenewalInfoDecodedPayloadModel> =
            Jws::new(compact(&json!({ "alg": "ES256", "x5c": [] }), &json!({})));
        assert!(matches!(
            token.decode_payload_unverified(),
            Err(JwsError::Model(ModelError::SchemaMismatch { .. }))
        ));
    }

    #[test]
    fn serializes_as_the_original_string() {
        let token: Jws<JwsRenewalInfoDecodedPayloadModel> = Jws::new("a.b.c");
        assert_eq!(serde_json::to_value(&token).unwrap(), json!("a.b.c"));
    }

    struct StubVerifier {
        accept: bool,
        payload: Vec<u8>,
    }

    #[async_trait]
    impl JwsVerifier for StubVerifier {
        async fn verify(&self, _compact: &str) -> Result<Vec<u8>, JwsError> {
            if self.accept {
                Ok(self.payload.clone())
            } else {
                Err(JwsError::Verification("untrusted chain".to_owned()))
            }
        }
    }

    #[tokio::test]
    async fn trusted_decode_uses_the_verified_payload() {
        let token: Jws<JwsRenewalInfoDecodedPayloadModel> = Jws::new("opaque.to.verifier");
        let verifier = StubVerifier {
            accept: true,
            payload: renewal_payload().to_string().into_bytes(),
        };
        let payload = token.verify_and_decode(&verifier).await.unwrap();
        assert_eq!(payload.auto_renew_product_id, "com.example.yearly");
    }

    #[tokio::test]
    async fn rejected_tokens_yield_no_payload() {
        let token: Jws<JwsRenewalInfoDecodedPayloadModel> =
            Jws::new(compact(&json!({ "alg": "ES256", "x5c": [] }), &renewal_payload()));
        let verifier = StubVerifier {
            accept: false,
            payload: Vec::new(),
        };
        assert!(matches!(
            token.verify_and_decode(&verifier).await,
            Err(JwsError::Verification(_))
        ));
    }
}
