use serde::Serialize;
use serde_json::Value;

use super::jws_transaction_decoded_payload_model::JwsTransaction;
use crate::{
    data::codec::{
        deserialize_via_from_json, integer_enum, FromJson, JsonPath, ObjectReader, OrUnknown,
    },
    errors::ModelError,
};

/// A response that includes the order lookup status and an array of signed
/// transactions for the in-app purchases in the order.
///
/// https://developer.apple.com/documentation/appstoreserverapi/orderlookupresponse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLookupResponseModel {
    pub status: OrUnknown<OrderLookupStatus>,
    /// Empty unless `status` is [`OrderLookupStatus::Valid`].
    pub signed_transactions: Vec<JwsTransaction>,
}

impl FromJson for OrderLookupResponseModel {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            status: object.required("status")?,
            signed_transactions: object.required("signedTransactions")?,
        })
    }
}

deserialize_via_from_json!(OrderLookupResponseModel);

integer_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/orderlookupstatus
    pub enum OrderLookupStatus {
        /// The order ID is valid.
        Valid = 0,
        /// The order ID is invalid.
        Invalid = 1,
    }
}
