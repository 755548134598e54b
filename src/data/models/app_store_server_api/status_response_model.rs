use serde::Serialize;
use serde_json::Value;

use super::{
    common::{AppAppleId, Environment, SubscriptionStatus},
    jws_renewal_info_decoded_payload_model::JwsRenewalInfo,
    jws_transaction_decoded_payload_model::JwsTransaction,
};
use crate::{
    data::codec::{deserialize_via_from_json, FromJson, JsonPath, ObjectReader, OrUnknown},
    errors::ModelError,
};

/// A response that contains status information for all of a customer's
/// auto-renewable subscriptions in your app.
///
/// https://developer.apple.com/documentation/appstoreserverapi/statusresponse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponseModel {
    /// One item per subscription group.
    pub data: Vec<SubscriptionGroupIdentifierItem>,
    pub environment: OrUnknown<Environment>,
    pub app_apple_id: AppAppleId,
    pub bundle_id: String,
}

impl StatusResponseModel {
    /// Every latest transaction across all subscription groups.
    pub fn last_transactions(&self) -> impl Iterator<Item = &LastTransactionsItem> {
        self.data.iter().flat_map(|group| group.last_transactions.iter())
    }
}

/// https://developer.apple.com/documentation/appstoreserverapi/subscriptiongroupidentifieritem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionGroupIdentifierItem {
    pub subscription_group_identifier: String,
    pub last_transactions: Vec<LastTransactionsItem>,
}

/// The most recent transaction information and renewal information for one
/// subscription in a group.
///
/// https://developer.apple.com/documentation/appstoreserverapi/lasttransactionsitem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastTransactionsItem {
    pub original_transaction_id: String,
    pub status: OrUnknown<SubscriptionStatus>,
    pub signed_renewal_info: JwsRenewalInfo,
    pub signed_transaction_info: JwsTransaction,
}

impl FromJson for StatusResponseModel {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            data: object.required("data")?,
            environment: object.required("environment")?,
            app_apple_id: object.required("appAppleId")?,
            bundle_id: object.required("bundleId")?,
        })
    }
}

impl FromJson for SubscriptionGroupIdentifierItem {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            subscription_group_identifier: object.required("subscriptionGroupIdentifier")?,
            last_transactions: object.required("lastTransactions")?,
        })
    }
}

impl FromJson for LastTransactionsItem {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            original_transaction_id: object.required("originalTransactionId")?,
            status: object.required("status")?,
            signed_renewal_info: object.required("signedRenewalInfo")?,
            signed_transaction_info: object.required("signedTransactionInfo")?,
        })
    }
}

deserialize_via_from_json!(
    StatusResponseModel,
    SubscriptionGroupIdentifierItem,
    LastTransactionsItem
);
