use serde::Serialize;
use serde_json::Value;

use super::jws_transaction_decoded_payload_model::JwsTransaction;
use crate::{
    data::codec::{deserialize_via_from_json, FromJson, JsonPath, ObjectReader},
    errors::ModelError,
};

/// Data structure returned by the App Store Server API when querying for
/// transaction info.
///
/// https://developer.apple.com/documentation/appstoreserverapi/transactioninforesponse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfoResponseModel {
    /// A customer's in-app purchase transaction, signed by Apple, in JSON Web
    /// Signature (JWS) format.
    pub signed_transaction_info: JwsTransaction,
}

impl FromJson for TransactionInfoResponseModel {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            signed_transaction_info: object.required("signedTransactionInfo")?,
        })
    }
}

deserialize_via_from_json!(TransactionInfoResponseModel);
