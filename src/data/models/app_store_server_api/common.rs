use chrono::{DateTime, Utc};
use rust_iso3166::CountryCode;
use serde::Serialize;
use serde_json::Value;

use crate::{
    constants::{PRODUCTION_BASE_URL, SANDBOX_BASE_URL},
    data::codec::{
        deserialize_via_from_json, integer_enum, string_enum, wrong_type, FromJson, JsonPath,
    },
    errors::{MismatchReason, ModelError},
};

/// UNIX time in milliseconds, as carried by every App Store date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// `None` only for values outside chrono's representable range.
    pub fn to_date_time(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(date_time: DateTime<Utc>) -> Self {
        Self(date_time.timestamp_millis())
    }
}

impl FromJson for Timestamp {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        i64::from_json(value, path).map(Self)
    }
}

/// The unique identifier of an app in the App Store.
///
/// Documented as an integer, but older payloads carried it as a string, so
/// both are accepted. A string must be the canonical decimal form (no sign,
/// no leading zeros) so that it maps to exactly one integer. Always encoded
/// as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AppAppleId(pub i64);

impl FromJson for AppAppleId {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        match value {
            Value::Number(_) => i64::from_json(value, path).map(Self),
            Value::String(text) => text
                .parse::<i64>()
                .ok()
                .filter(|id| id.to_string() == *text)
                .map(Self)
                .ok_or_else(|| {
                    ModelError::mismatch(
                        path,
                        MismatchReason::OutOfRange {
                            expected: "app Apple ID",
                            value: text.clone(),
                        },
                    )
                }),
            other => Err(wrong_type("integer or numeric string", other, path)),
        }
    }
}

deserialize_via_from_json!(Timestamp, AppAppleId);

/// ISO 3166-1 alpha-3 country code of an App Store storefront.
///
/// https://developer.apple.com/documentation/appstoreservernotifications/storefrontcountrycode
pub type StorefrontCountryCode = String;

/// Resolves a storefront country code such as `USA` to its ISO 3166 record.
pub fn storefront_country(code: &str) -> Option<CountryCode> {
    rust_iso3166::from_alpha3(code)
}

string_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/environment
    pub enum Environment {
        /// Indicates that the data applies to the production environment.
        Production => "Production",
        /// Indicates that the data applies to testing in the sandbox environment.
        Sandbox => "Sandbox",
    }
}

impl Environment {
    /// Host serving App Store Server API requests for this environment.
    pub const fn base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

string_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/inappownershiptype
    pub enum InAppOwnershipType {
        /// The transaction belongs to the purchaser.
        Purchased => "PURCHASED",
        /// The transaction belongs to a family member who benefits from service.
        FamilyShared => "FAMILY_SHARED",
    }
}

string_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/offerdiscounttype
    pub enum OfferDiscountType {
        /// A payment mode of a product discount that indicates a free trial.
        FreeTrial => "FREE_TRIAL",
        /// A payment mode of a product discount that customers pay over a single or
        /// multiple billing periods.
        PayAsYouGo => "PAY_AS_YOU_GO",
        /// A payment mode of a product discount that customers pay up front.
        PayUpFront => "PAY_UP_FRONT",
    }
}

integer_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/offertype
    pub enum OfferType {
        /// An introductory offer.
        Introductory = 1,
        /// A promotional offer.
        Promotional = 2,
        /// An offer with a subscription offer code.
        SubscriptionOfferCode = 3,
        /// A win-back offer.
        WinBack = 4,
    }
}

integer_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/status
    pub enum SubscriptionStatus {
        /// The auto-renewable subscription is active.
        Active = 1,
        /// The auto-renewable subscription is expired.
        Expired = 2,
        /// The auto-renewable subscription is in a billing retry period.
        BillingRetry = 3,
        /// The auto-renewable subscription is in a Billing Grace Period.
        BillingGracePeriod = 4,
        /// The auto-renewable subscription is revoked.
        Revoked = 5,
    }
}
