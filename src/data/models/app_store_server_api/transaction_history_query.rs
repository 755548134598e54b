use serde::Serialize;
use serde_json::Value;

use super::common::{InAppOwnershipType, Timestamp};
use crate::{
    data::codec::{deserialize_via_from_json, string_enum, FromJson, JsonPath, ObjectReader},
    errors::ModelError,
};

/// Query parameters of the Get Transaction History endpoint, used to filter
/// results and change sort order. Every filter is optional.
///
/// https://developer.apple.com/documentation/appstoreserverapi/get_transaction_history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryQuery {
    /// The `revision` token from a previous HistoryResponse, to fetch the
    /// next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductTypeParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_group_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_app_ownership_type: Option<InAppOwnershipType>,
    /// Whether to include only revoked transactions (`true`) or exclude them
    /// (`false`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked: Option<bool>,
}

impl TransactionHistoryQuery {
    /// Same filters, positioned at the page that `revision` points to.
    pub fn with_revision(&self, revision: impl Into<String>) -> Self {
        Self {
            revision: Some(revision.into()),
            ..self.clone()
        }
    }

    /// URL query pairs in the vendor's parameter names, ready for an HTTP
    /// client's query builder.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(revision) = &self.revision {
            pairs.push(("revision", revision.clone()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_owned()));
        }
        if let Some(start_date) = self.start_date {
            pairs.push(("startDate", start_date.as_millis().to_string()));
        }
        if let Some(end_date) = self.end_date {
            pairs.push(("endDate", end_date.as_millis().to_string()));
        }
        if let Some(product_type) = self.product_type {
            pairs.push(("productType", product_type.as_str().to_owned()));
        }
        if let Some(product_id) = &self.product_id {
            pairs.push(("productId", product_id.clone()));
        }
        if let Some(group) = &self.subscription_group_identifier {
            pairs.push(("subscriptionGroupIdentifier", group.clone()));
        }
        if let Some(ownership) = self.in_app_ownership_type {
            pairs.push(("inAppOwnershipType", ownership.as_str().to_owned()));
        }
        if let Some(revoked) = self.revoked {
            pairs.push(("revoked", revoked.to_string()));
        }
        pairs
    }
}

impl FromJson for TransactionHistoryQuery {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            revision: object.optional_or_none("revision")?,
            sort: object.optional_or_none("sort")?,
            start_date: object.optional_or_none("startDate")?,
            end_date: object.optional_or_none("endDate")?,
            product_type: object.optional_or_none("productType")?,
            product_id: object.optional_or_none("productId")?,
            subscription_group_identifier: object
                .optional_or_none("subscriptionGroupIdentifier")?,
            in_app_ownership_type: object.optional_or_none("inAppOwnershipType")?,
            revoked: object.optional_or_none("revoked")?,
        })
    }
}

deserialize_via_from_json!(TransactionHistoryQuery);

string_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/sort
    pub enum SortParameter {
        Ascending => "ASCENDING",
        Descending => "DESCENDING",
    }
}

string_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/producttype
    pub enum ProductTypeParameter {
        AutoRenewable => "AUTO_RENEWABLE",
        NonRenewable => "NON_RENEWABLE",
        Consumable => "CONSUMABLE",
        NonConsumable => "NON_CONSUMABLE",
    }
}
