use serde::Serialize;
use serde_json::Value;

use crate::{
    data::codec::{deserialize_via_from_json, FromJson, JsonPath, ObjectReader},
    errors::ModelError,
};

/// Query parameters of the Get Notification History endpoint. The filters
/// themselves travel in the request body, see
/// [`NotificationHistoryRequestModel`](super::notification_history_request_model::NotificationHistoryRequestModel).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationHistoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,
}

impl NotificationHistoryQuery {
    pub fn with_pagination_token(token: impl Into<String>) -> Self {
        Self {
            pagination_token: Some(token.into()),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.pagination_token
            .iter()
            .map(|token| ("paginationToken", token.clone()))
            .collect()
    }
}

impl FromJson for NotificationHistoryQuery {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            pagination_token: object.optional_or_none("paginationToken")?,
        })
    }
}

deserialize_via_from_json!(NotificationHistoryQuery);
