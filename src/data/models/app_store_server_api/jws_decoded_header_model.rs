use serde::Serialize;
use serde_json::Value;

use crate::{
    data::codec::{deserialize_via_from_json, FromJson, JsonPath, Nullable, ObjectReader},
    errors::ModelError,
};

/// Header of a JWS signed by the App Store.
///
/// https://developer.apple.com/documentation/appstoreserverapi/jwsdecodedheader
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JwsDecodedHeaderModel {
    /// The algorithm used for signing the JWS, `ES256` for App Store data.
    pub alg: String,
    /// The key identifier. App Store payloads omit it and identify the
    /// signing key through `x5c` instead.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub kid: Nullable<String>,
    /// The X.509 certificate chain, leaf first, base64 (not base64url)
    /// encoded DER.
    pub x5c: Vec<String>,
}

impl FromJson for JwsDecodedHeaderModel {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            alg: object.required("alg")?,
            kid: object.optional("kid")?,
            x5c: object.required("x5c")?,
        })
    }
}

deserialize_via_from_json!(JwsDecodedHeaderModel);
