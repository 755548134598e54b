use serde::Serialize;
use serde_json::Value;

use super::common::Timestamp;
use crate::{
    data::{
        codec::{deserialize_via_from_json, FromJson, JsonPath, ObjectReader},
        models::app_store_server_notifications::response_body_v2_decoded_payload_model::{
            NotificationSubtype, NotificationType,
        },
    },
    errors::ModelError,
};

/// The request body for notification history.
///
/// https://developer.apple.com/documentation/appstoreserverapi/notificationhistoryrequest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationHistoryRequestModel {
    /// The start date of the timespan for the requested notification history
    /// records. Must be within the past 180 days.
    pub start_date: Timestamp,
    /// The end date of the timespan, exclusive.
    pub end_date: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<NotificationType>,
    /// Only valid together with `notification_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_subtype: Option<NotificationSubtype>,
    /// Include only notifications that the App Store server failed to send
    /// successfully.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_failures: Option<bool>,
    /// Mutually exclusive with the type filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl NotificationHistoryRequestModel {
    pub fn new(start_date: Timestamp, end_date: Timestamp) -> Self {
        Self {
            start_date,
            end_date,
            notification_type: None,
            notification_subtype: None,
            only_failures: None,
            transaction_id: None,
        }
    }
}

impl FromJson for NotificationHistoryRequestModel {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            start_date: object.required("startDate")?,
            end_date: object.required("endDate")?,
            notification_type: object.optional_or_none("notificationType")?,
            notification_subtype: object.optional_or_none("notificationSubtype")?,
            only_failures: object.optional_or_none("onlyFailures")?,
            transaction_id: object.optional_or_none("transactionId")?,
        })
    }
}

deserialize_via_from_json!(NotificationHistoryRequestModel);
