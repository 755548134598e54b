use serde::Serialize;
use serde_json::Value;

use super::response_body_v2_decoded_payload_model::ResponseBodyV2DecodedPayloadModel;
use crate::{
    data::{
        codec::{deserialize_via_from_json, FromJson, JsonPath, ObjectReader},
        jws::Jws,
    },
    errors::ModelError,
};

/// A notification payload in JSON Web Signature (JWS) format, signed by the
/// App Store.
///
/// https://developer.apple.com/documentation/appstoreservernotifications/signedpayload
pub type SignedPayload = Jws<ResponseBodyV2DecodedPayloadModel>;

/// Data structure sent by the App Store Server Notifications.
///
/// https://developer.apple.com/documentation/appstoreservernotifications/responsebodyv2
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBodyV2Model {
    /// The payload in JSON Web Signature (JWS) format, signed by the App Store.
    pub signed_payload: SignedPayload,
}

impl FromJson for ResponseBodyV2Model {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            signed_payload: object.required("signedPayload")?,
        })
    }
}

deserialize_via_from_json!(ResponseBodyV2Model);
