use serde::Serialize;
use serde_json::Value;

use super::common::Timestamp;
use crate::{
    data::{
        codec::{
            deserialize_via_from_json, string_enum, FromJson, JsonPath, ObjectReader, OrUnknown,
        },
        models::app_store_server_notifications::response_body_v2_model::SignedPayload,
    },
    errors::ModelError,
};

/// A response that contains the contents of the test notification sent by
/// the App Store server and the result from your server.
///
/// https://developer.apple.com/documentation/appstoreserverapi/checktestnotificationresponse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckTestNotificationResponseModel {
    pub send_attempts: Vec<SendAttempt>,
    pub signed_payload: SignedPayload,
}

/// The success or error information and the date the App Store server
/// records when it attempts to send a server notification to your server.
///
/// https://developer.apple.com/documentation/appstoreserverapi/sendattemptitem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAttempt {
    pub attempt_date: Timestamp,
    pub send_attempt_result: OrUnknown<SendAttemptResult>,
}

impl SendAttempt {
    pub fn succeeded(&self) -> bool {
        self.send_attempt_result == SendAttemptResult::Success
    }
}

impl FromJson for CheckTestNotificationResponseModel {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            send_attempts: object.required("sendAttempts")?,
            signed_payload: object.required("signedPayload")?,
        })
    }
}

impl FromJson for SendAttempt {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            attempt_date: object.required("attemptDate")?,
            send_attempt_result: object.required("sendAttemptResult")?,
        })
    }
}

deserialize_via_from_json!(CheckTestNotificationResponseModel, SendAttempt);

string_enum! {
    /// The success or error information the App Store server records when it
    /// attempts to send an App Store server notification to your server.
    ///
    /// https://developer.apple.com/documentation/appstoreserverapi/sendattemptresult
    pub enum SendAttemptResult {
        Success => "SUCCESS",
        TimedOut => "TIMED_OUT",
        TlsIssue => "TLS_ISSUE",
        CircularRedirect => "CIRCULAR_REDIRECT",
        NoResponse => "NO_RESPONSE",
        SocketIssue => "SOCKET_ISSUE",
        UnsupportedCharset => "UNSUPPORTED_CHARSET",
        InvalidResponse => "INVALID_RESPONSE",
        PrematureClose => "PREMATURE_CLOSE",
        Other => "OTHER",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::data::codec::decode;

    #[test]
    fn decodes_attempts_and_keeps_payload() {
        let response: CheckTestNotificationResponseModel = decode(&json!({
            "sendAttempts": [
                { "attemptDate": 1_700_000_000_000i64, "sendAttemptResult": "TIMED_OUT" },
                { "attemptDate": 1_700_000_060_000i64, "sendAttemptResult": "SUCCESS" },
            ],
            "signedPayload": "h.p.s",
        }))
        .unwrap();
        assert!(!response.send_attempts[0].succeeded());
        assert!(response.send_attempts[1].succeeded());
        assert_eq!(response.signed_payload.as_str(), "h.p.s");
    }
}
