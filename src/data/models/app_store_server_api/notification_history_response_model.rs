use serde::Serialize;
use serde_json::Value;

use super::{check_test_notification_response_model::SendAttempt, pagination::Paginated};
use crate::{
    data::{
        codec::{deserialize_via_from_json, FromJson, JsonPath, Nullable, ObjectReader},
        models::app_store_server_notifications::response_body_v2_model::SignedPayload,
    },
    errors::ModelError,
};

/// A response that contains the App Store Server Notifications history for
/// your app.
///
/// https://developer.apple.com/documentation/appstoreserverapi/notificationhistoryresponse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationHistoryResponseModel {
    pub notification_history: Vec<NotificationHistoryResponseItem>,
    pub has_more: bool,
    /// Token to pass as `paginationToken` in the next NotificationHistoryQuery.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub pagination_token: Nullable<String>,
}

/// The App Store server notification history record, including the signed
/// notification payload and the result of the server's first send attempt.
///
/// https://developer.apple.com/documentation/appstoreserverapi/notificationhistoryresponseitem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationHistoryResponseItem {
    pub send_attempts: Vec<SendAttempt>,
    pub signed_payload: SignedPayload,
}

impl Paginated for NotificationHistoryResponseModel {
    fn has_more(&self) -> bool {
        self.has_more
    }

    fn cursor(&self) -> Option<&str> {
        self.pagination_token.value().map(String::as_str)
    }
}

impl FromJson for NotificationHistoryResponseModel {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            notification_history: object.required("notificationHistory")?,
            has_more: object.required("hasMore")?,
            pagination_token: object.optional("paginationToken")?,
        })
    }
}

impl FromJson for NotificationHistoryResponseItem {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            send_attempts: object.required("sendAttempts")?,
            signed_payload: object.required("signedPayload")?,
        })
    }
}

deserialize_via_from_json!(NotificationHistoryResponseModel, NotificationHistoryResponseItem);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::data::{
        codec::decode,
        models::app_store_server_api::{
            check_test_notification_response_model::SendAttemptResult, pagination::PageCursor,
        },
    };

    #[test]
    fn follows_pagination_token() {
        let response: NotificationHistoryResponseModel = decode(&json!({
            "notificationHistory": [{
                "sendAttempts": [
                    { "attemptDate": 1_700_000_000_000i64, "sendAttemptResult": "NO_RESPONSE" },
                ],
                "signedPayload": "h.p.s",
            }],
            "hasMore": true,
            "paginationToken": "page-2",
        }))
        .unwrap();
        assert_eq!(response.next_page(), PageCursor::Next("page-2"));
        assert_eq!(
            response.notification_history[0].send_attempts[0].send_attempt_result,
            SendAttemptResult::NoResponse
        );
    }

    #[test]
    fn missing_token_with_more_pages_is_flagged() {
        let response: NotificationHistoryResponseModel = decode(&json!({
            "notificationHistory": [],
            "hasMore": true,
        }))
        .unwrap();
        assert!(response.pagination_token.is_absent());
        assert_eq!(response.next_page(), PageCursor::MissingCursor);
    }
}
