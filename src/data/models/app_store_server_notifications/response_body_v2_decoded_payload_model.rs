use rust_iso3166::CountryCode;
use serde::Serialize;
use serde_json::Value;

use crate::{
    constants::NOTIFICATION_VERSION,
    data::{
        codec::{
            deserialize_via_from_json, string_enum, FromJson, JsonPath, Nullable, ObjectReader,
            OrUnknown,
        },
        models::app_store_server_api::{
            common::{
                storefront_country, AppAppleId, Environment, StorefrontCountryCode,
                SubscriptionStatus, Timestamp,
            },
            jws_renewal_info_decoded_payload_model::JwsRenewalInfo,
            jws_transaction_decoded_payload_model::JwsTransaction,
        },
    },
    errors::ModelError,
};

/// Data structure for the decoded payload of a SignedPayload, returned by the
/// App Store Server Notifications service.
///
/// https://developer.apple.com/documentation/appstoreservernotifications/responsebodyv2decodedpayload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBodyV2DecodedPayloadModel {
    /// The in-app purchase event for which the App Store sends this version 2
    /// notification.
    pub notification_type: OrUnknown<NotificationType>,
    /// Additional information that identifies the notification event. The
    /// subtype field is present only for specific version 2 notifications.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub subtype: Nullable<OrUnknown<NotificationSubtype>>,
    /// A unique identifier for the notification. Use this value to identify a
    /// duplicate notification.
    #[serde(rename = "notificationUUID")]
    pub notification_uuid: String,
    /// The App Store Server Notification version number, "2.0".
    pub version: String,
    /// The UNIX time, in milliseconds, that the App Store signed the JSON Web
    /// Signature data.
    pub signed_date: Timestamp,
    /// The app metadata and signed renewal and transaction information.
    /// Mutually exclusive with `summary`.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub data: Nullable<NotificationData>,
    /// Present when the App Store server completes a request to extend a
    /// subscription renewal date for eligible subscribers. Mutually exclusive
    /// with `data`.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub summary: Nullable<NotificationSummary>,
}

impl ResponseBodyV2DecodedPayloadModel {
    pub fn is_version_2(&self) -> bool {
        self.version == NOTIFICATION_VERSION
    }
}

impl FromJson for ResponseBodyV2DecodedPayloadModel {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            notification_type: object.required("notificationType")?,
            subtype: object.optional("subtype")?,
            notification_uuid: object.required("notificationUUID")?,
            version: object.required("version")?,
            signed_date: object.required("signedDate")?,
            data: object.optional("data")?,
            summary: object.optional("summary")?,
        })
    }
}

/// The app metadata and the signed renewal and transaction information.
///
/// https://developer.apple.com/documentation/appstoreservernotifications/data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    /// The unique identifier of the app that the notification applies to.
    /// Not present in the sandbox environment.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub app_apple_id: Nullable<AppAppleId>,
    pub bundle_id: String,
    /// The version of the build that identifies an iteration of the bundle.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub bundle_version: Nullable<String>,
    /// The reason the customer requested the refund. Only present for
    /// `CONSUMPTION_REQUEST` notifications.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub consumption_request_reason: Nullable<OrUnknown<ConsumptionRequestReason>>,
    pub environment: OrUnknown<Environment>,
    /// Only present for auto-renewable subscriptions.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub signed_renewal_info: Nullable<JwsRenewalInfo>,
    pub signed_transaction_info: JwsTransaction,
    /// The status of an auto-renewable subscription as of the signedDate in
    /// the notification.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub status: Nullable<OrUnknown<SubscriptionStatus>>,
}

impl FromJson for NotificationData {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            app_apple_id: object.optional("appAppleId")?,
            bundle_id: object.required("bundleId")?,
            bundle_version: object.optional("bundleVersion")?,
            consumption_request_reason: object.optional("consumptionRequestReason")?,
            environment: object.required("environment")?,
            signed_renewal_info: object.optional("signedRenewalInfo")?,
            signed_transaction_info: object.required("signedTransactionInfo")?,
            status: object.optional("status")?,
        })
    }
}

/// The payload data for a subscription-renewal-date extension notification.
///
/// https://developer.apple.com/documentation/appstoreservernotifications/summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSummary {
    /// The UUID that represents a specific request to extend a subscription
    /// renewal date.
    pub request_identifier: String,
    pub environment: OrUnknown<Environment>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub app_apple_id: Nullable<AppAppleId>,
    pub bundle_id: String,
    /// The product identifier of the auto-renewable subscription that the
    /// renewal-date extension applies to.
    pub product_id: String,
    /// The storefronts the extension applies to. Absent when the request
    /// covered every storefront.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub storefront_country_codes: Nullable<Vec<StorefrontCountryCode>>,
    /// The final count of subscriptions that fail to receive a subscription
    /// renewal date extension.
    pub failed_count: i64,
    /// The final count of subscriptions that successfully receive a
    /// subscription renewal date extension.
    pub succeeded_count: i64,
}

impl NotificationSummary {
    /// Resolved storefront countries; codes that are not ISO 3166 alpha-3
    /// are skipped.
    pub fn storefront_countries(&self) -> Vec<CountryCode> {
        self.storefront_country_codes
            .value()
            .into_iter()
            .flatten()
            .filter_map(|code| storefront_country(code))
            .collect()
    }
}

impl FromJson for NotificationSummary {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            request_identifier: object.required("requestIdentifier")?,
            environment: object.required("environment")?,
            app_apple_id: object.optional("appAppleId")?,
            bundle_id: object.required("bundleId")?,
            product_id: object.required("productId")?,
            storefront_country_codes: object.optional("storefrontCountryCodes")?,
            failed_count: object.required("failedCount")?,
            succeeded_count: object.required("succeededCount")?,
        })
    }
}

deserialize_via_from_json!(
    ResponseBodyV2DecodedPayloadModel,
    NotificationData,
    NotificationSummary
);

string_enum! {
    /// https://developer.apple.com/documentation/appstoreservernotifications/notificationtype
    pub enum NotificationType {
        /// The customer initiated a refund request for a consumable in-app
        /// purchase, and the App Store is requesting consumption data.
        ConsumptionRequest => "CONSUMPTION_REQUEST",
        /// Along with its subtype, the customer made a change to their
        /// subscription plan. `UPGRADE` takes effect immediately, `DOWNGRADE`
        /// at the next renewal date. No subtype means a downgrade was
        /// cancelled.
        DidChangeRenewalPref => "DID_CHANGE_RENEWAL_PREF",
        /// Along with its subtype, the customer or the App Store changed the
        /// subscription auto-renewal status.
        DidChangeRenewalStatus => "DID_CHANGE_RENEWAL_STATUS",
        /// The subscription failed to renew due to a billing issue. With
        /// subtype `GRACE_PERIOD`, continue to provide service through the
        /// grace period.
        DidFailToRenew => "DID_FAIL_TO_RENEW",
        /// The subscription successfully renewed. With subtype
        /// `BILLING_RECOVERY`, a previously failed renewal succeeded.
        DidRenew => "DID_RENEW",
        /// Along with its subtype, the subscription expired.
        Expired => "EXPIRED",
        /// The billing grace period ended without renewing the subscription.
        GracePeriodExpired => "GRACE_PERIOD_EXPIRED",
        /// A customer with an active subscription redeemed a subscription
        /// offer.
        OfferRedeemed => "OFFER_REDEEMED",
        /// The system informed the customer of a subscription price increase.
        /// Subtype `PENDING` or `ACCEPTED` tells whether they consented.
        PriceIncrease => "PRICE_INCREASE",
        /// The App Store successfully refunded a transaction.
        Refund => "REFUND",
        /// The App Store declined a refund request.
        RefundDeclined => "REFUND_DECLINED",
        /// The App Store extended the subscription renewal date for a
        /// specific subscription.
        RenewalExtended => "RENEWAL_EXTENDED",
        /// A family member lost access to the in-app purchase through Family
        /// Sharing.
        Revoke => "REVOKE",
        /// Along with its subtype, the customer subscribed to an
        /// auto-renewable subscription.
        Subscribed => "SUBSCRIBED",
        /// The App Store is attempting to extend the subscription renewal date
        /// for all eligible subscribers. Subtype `SUMMARY` or `FAILURE`.
        RenewalExtension => "RENEWAL_EXTENSION",
        /// The App Store reversed a previously granted refund.
        RefundReversed => "REFUND_REVERSED",
    }
}

string_enum! {
    /// https://developer.apple.com/documentation/appstoreservernotifications/subtype
    pub enum NotificationSubtype {
        InitialBuy => "INITIAL_BUY",
        Resubscribe => "RESUBSCRIBE",
        Downgrade => "DOWNGRADE",
        Upgrade => "UPGRADE",
        AutoRenewEnabled => "AUTO_RENEW_ENABLED",
        AutoRenewDisabled => "AUTO_RENEW_DISABLED",
        Voluntary => "VOLUNTARY",
        BillingRetry => "BILLING_RETRY",
        PriceIncrease => "PRICE_INCREASE",
        GracePeriod => "GRACE_PERIOD",
        BillingRecovery => "BILLING_RECOVERY",
        /// The customer hasn't yet responded to a price increase.
        Pending => "PENDING",
        /// The customer consented to a price increase, or it needed no
        /// consent.
        Accepted => "ACCEPTED",
        /// The renewal-date extension completed for all eligible subscribers.
        Summary => "SUMMARY",
        /// The renewal-date extension failed for one subscription.
        Failure => "FAILURE",
    }
}

string_enum! {
    /// The customer-provided reason for a refund request.
    ///
    /// https://developer.apple.com/documentation/appstoreservernotifications/consumptionrequestreason
    pub enum ConsumptionRequestReason {
        /// The customer didn't intend to make the in-app purchase.
        UnintendedPurchase => "UNINTENDED_PURCHASE",
        /// The customer had issues with receiving or using the in-app purchase.
        FulfillmentIssue => "FULFILLMENT_ISSUE",
        /// The customer wasn't satisfied with the in-app purchase.
        UnsatisfiedWithPurchase => "UNSATISFIED_WITH_PURCHASE",
        /// The customer requested a refund based on a legal reason.
        Legal => "LEGAL",
        Other => "OTHER",
    }
}
