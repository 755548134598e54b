use serde::Serialize;
use serde_json::Value;

use super::common::{Environment, OfferDiscountType, OfferType, Timestamp};
use crate::{
    data::{
        codec::{
            deserialize_via_from_json, integer_enum, FromJson, JsonPath, Nullable, ObjectReader,
            OrUnknown,
        },
        jws::Jws,
    },
    errors::ModelError,
};

/// Subscription renewal information, signed by the App Store, in JSON Web
/// Signature (JWS) format.
///
/// https://developer.apple.com/documentation/appstoreserverapi/jwsrenewalinfo
pub type JwsRenewalInfo = Jws<JwsRenewalInfoDecodedPayloadModel>;

/// Data structure for the decoded payload of a JWSRenewalInfo, returned by the
/// App Store Server API.
///
/// https://developer.apple.com/documentation/appstoreserverapi/jwsrenewalinfodecodedpayload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JwsRenewalInfoDecodedPayloadModel {
    /// The identifier of the product that renews at the next billing period.
    pub auto_renew_product_id: String,
    /// The renewal status of the auto-renewable subscription.
    pub auto_renew_status: OrUnknown<AutoRenewStatus>,
    /// The currency code for the renewalPrice of the subscription.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub currency: Nullable<String>,
    /// The list of win-back offer IDs that the customer is eligible for.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub eligible_win_back_offer_ids: Nullable<Vec<String>>,
    /// The server environment, either sandbox or production.
    pub environment: OrUnknown<Environment>,
    /// The reason the subscription expired.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub expiration_intent: Nullable<OrUnknown<ExpirationIntent>>,
    /// The time when the Billing Grace Period for subscription renewals
    /// expires.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub grace_period_expires_date: Nullable<Timestamp>,
    /// Whether the App Store is attempting to automatically renew the expired
    /// subscription.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub is_in_billing_retry_period: Nullable<bool>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub offer_discount_type: Nullable<OrUnknown<OfferDiscountType>>,
    /// The offer code or the promotional offer identifier.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub offer_identifier: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub offer_type: Nullable<OrUnknown<OfferType>>,
    /// The transaction identifier of the original purchase associated with this
    /// transaction.
    pub original_transaction_id: String,
    /// Whether the auto-renewable subscription is subject to a price increase.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub price_increase_status: Nullable<OrUnknown<PriceIncreaseStatus>>,
    /// The product identifier of the In-App Purchase.
    pub product_id: String,
    /// The earliest start date of the auto-renewable subscription in a series
    /// of subscription purchases that ignores all lapses of paid service that
    /// are 60 days or fewer.
    pub recent_subscription_start_date: Timestamp,
    /// The time when the most recent auto-renewable subscription purchase
    /// expires.
    pub renewal_date: Timestamp,
    /// The renewal price, in milliunits, of the auto-renewable subscription
    /// that renews at the next billing period.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub renewal_price: Nullable<i64>,
    /// The time that the App Store signed the JWS data.
    pub signed_date: Timestamp,
}

impl FromJson for JwsRenewalInfoDecodedPayloadModel {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            auto_renew_product_id: object.required("autoRenewProductId")?,
            auto_renew_status: object.required("autoRenewStatus")?,
            currency: object.optional("currency")?,
            eligible_win_back_offer_ids: object.optional("eligibleWinBackOfferIds")?,
            environment: object.required("environment")?,
            expiration_intent: object.optional("expirationIntent")?,
            grace_period_expires_date: object.optional("gracePeriodExpiresDate")?,
            is_in_billing_retry_period: object.optional("isInBillingRetryPeriod")?,
            offer_discount_type: object.optional("offerDiscountType")?,
            offer_identifier: object.optional("offerIdentifier")?,
            offer_type: object.optional("offerType")?,
            original_transaction_id: object.required("originalTransactionId")?,
            price_increase_status: object.optional("priceIncreaseStatus")?,
            product_id: object.required("productId")?,
            recent_subscription_start_date: object.required("recentSubscriptionStartDate")?,
            renewal_date: object.required("renewalDate")?,
            renewal_price: object.optional("renewalPrice")?,
            signed_date: object.required("signedDate")?,
        })
    }
}

deserialize_via_from_json!(JwsRenewalInfoDecodedPayloadModel);

integer_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/autorenewstatus
    pub enum AutoRenewStatus {
        /// Automatic renewal is off. The customer has turned off automatic renewal
        /// for the subscription, and it won't renew at the end of the current
        /// subscription period.
        Off = 0,
        /// Automatic renewal is on. The subscription renews at the end of the
        /// current subscription period.
        On = 1,
    }
}

integer_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/expirationintent
    pub enum ExpirationIntent {
        /// The customer canceled their subscription.
        VoluntaryCancellation = 1,
        /// Billing error; for example, the customer's payment information is no
        /// longer valid.
        BillingError = 2,
        /// The customer didn't consent to an auto-renewable subscription price
        /// increase that requires customer consent, allowing the subscription to
        /// expire.
        PriceIncreaseDecline = 3,
        /// The product wasn't available for purchase at the time of renewal.
        ProductUnavailable = 4,
        /// The subscription expired for some other reason.
        Other = 5,
    }
}

integer_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/priceincreasestatus
    pub enum PriceIncreaseStatus {
        /// The customer hasn't yet responded to an auto-renewable subscription
        /// price increase that requires customer consent.
        NoActionTaken = 0,
        /// The customer consented to an auto-renewable subscription price increase
        /// that requires customer consent, or the App Store has notified the
        /// customer of an auto-renewable subscription price increase that doesn't
        /// require consent.
        CustomerConsented = 1,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::data::codec::{decode, encode};

    fn renewal() -> Value {
        json!({
            "autoRenewProductId": "com.example.monthly",
            "autoRenewStatus": 0,
            "environment": "Production",
            "expirationIntent": 1,
            "isInBillingRetryPeriod": false,
            "originalTransactionId": "2000000000000001",
            "priceIncreaseStatus": 1,
            "productId": "com.example.monthly",
            "recentSubscriptionStartDate": 1_690_000_000_000i64,
            "renewalDate": 1_700_000_000_000i64,
            "signedDate": 1_695_000_000_000i64,
            "eligibleWinBackOfferIds": ["winback-1"],
        })
    }

    #[test]
    fn decodes_integer_coded_statuses() {
        let payload: JwsRenewalInfoDecodedPayloadModel = decode(&renewal()).unwrap();
        assert_eq!(payload.auto_renew_status, AutoRenewStatus::Off);
        assert_eq!(
            payload.expiration_intent,
            Nullable::Value(OrUnknown::Known(ExpirationIntent::VoluntaryCancellation))
        );
        assert_eq!(
            payload.price_increase_status,
            Nullable::Value(OrUnknown::Known(PriceIncreaseStatus::CustomerConsented))
        );
        assert!(payload.grace_period_expires_date.is_absent());
    }

    #[test]
    fn unknown_auto_renew_status_is_kept() {
        let mut value = renewal();
        value["autoRenewStatus"] = json!(2);
        let payload: JwsRenewalInfoDecodedPayloadModel = decode(&value).unwrap();
        assert_eq!(payload.auto_renew_status, OrUnknown::<AutoRenewStatus>::Unknown(2));
        assert_eq!(encode(&payload).unwrap(), value);
    }

    #[test]
    fn missing_renewal_date_is_fatal() {
        let mut value = renewal();
        value.as_object_mut().unwrap().remove("renewalDate");
        let error = decode::<JwsRenewalInfoDecodedPayloadModel>(&value).unwrap_err();
        assert_eq!(error.path(), "renewalDate");
    }
}
