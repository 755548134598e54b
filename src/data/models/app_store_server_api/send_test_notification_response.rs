use serde::Serialize;
use serde_json::Value;

use crate::{
    data::codec::{deserialize_via_from_json, FromJson, JsonPath, ObjectReader},
    errors::ModelError,
};

/// Data structure returned by the App Store Server API when requesting a test
/// S2S notification.
///
/// https://developer.apple.com/documentation/appstoreserverapi/sendtestnotificationresponse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTestNotificationResponse {
    /// The test notification token that uniquely identifies the notification
    /// test that App Store Server Notifications sends to your server.
    pub test_notification_token: String,
}

impl FromJson for SendTestNotificationResponse {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            test_notification_token: object.required("testNotificationToken")?,
        })
    }
}

deserialize_via_from_json!(SendTestNotificationResponse);
