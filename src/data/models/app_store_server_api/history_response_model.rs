use serde::Serialize;
use serde_json::Value;

use super::{
    common::{AppAppleId, Environment},
    jws_transaction_decoded_payload_model::JwsTransaction,
    pagination::Paginated,
};
use crate::{
    data::codec::{deserialize_via_from_json, FromJson, JsonPath, Nullable, ObjectReader, OrUnknown},
    errors::ModelError,
};

/// A response that contains the customer's transaction history for an app.
///
/// https://developer.apple.com/documentation/appstoreserverapi/historyresponse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponseModel {
    pub app_apple_id: AppAppleId,
    pub bundle_id: String,
    pub environment: OrUnknown<Environment>,
    /// Whether the App Store has more transactions than it returned.
    pub has_more: bool,
    /// Token to pass as `revision` in the next TransactionHistoryQuery.
    /// Required whenever `has_more` is set; see [`Paginated::next_page`].
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub revision: Nullable<String>,
    pub signed_transactions: Vec<JwsTransaction>,
}

impl Paginated for HistoryResponseModel {
    fn has_more(&self) -> bool {
        self.has_more
    }

    fn cursor(&self) -> Option<&str> {
        self.revision.value().map(String::as_str)
    }
}

impl FromJson for HistoryResponseModel {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            app_apple_id: object.required("appAppleId")?,
            bundle_id: object.required("bundleId")?,
            environment: object.required("environment")?,
            has_more: object.required("hasMore")?,
            revision: object.optional("revision")?,
            signed_transactions: object.required("signedTransactions")?,
        })
    }
}

deserialize_via_from_json!(HistoryResponseModel);
