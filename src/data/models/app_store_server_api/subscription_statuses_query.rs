use serde::Serialize;
use serde_json::Value;

use super::common::SubscriptionStatus;
use crate::{
    data::codec::{deserialize_via_from_json, FromJson, JsonPath, ObjectReader},
    errors::ModelError,
};

/// Query parameters of the Get All Subscription Statuses endpoint.
///
/// https://developer.apple.com/documentation/appstoreserverapi/get_all_subscription_statuses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatusesQuery {
    /// Only return subscriptions in these statuses. `None` returns all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<SubscriptionStatus>>,
}

impl SubscriptionStatusesQuery {
    pub fn with_statuses(statuses: impl IntoIterator<Item = SubscriptionStatus>) -> Self {
        Self {
            status: Some(statuses.into_iter().collect()),
        }
    }

    /// One `status` pair per filter value, as the endpoint expects.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.status
            .iter()
            .flatten()
            .map(|status| ("status", status.code().to_string()))
            .collect()
    }
}

impl FromJson for SubscriptionStatusesQuery {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            status: object.optional_or_none("status")?,
        })
    }
}

deserialize_via_from_json!(SubscriptionStatusesQuery);
