use rust_iso3166::CountryCode;
use serde::Serialize;
use serde_json::Value;

use super::common::{
    storefront_country, Environment, InAppOwnershipType, OfferDiscountType, OfferType,
    StorefrontCountryCode, Timestamp,
};
use crate::{
    data::{
        codec::{
            deserialize_via_from_json, integer_enum, string_enum, FromJson, JsonPath, Nullable,
            ObjectReader, OrUnknown,
        },
        jws::Jws,
    },
    errors::ModelError,
};

/// A customer's in-app purchase transaction, signed by Apple, in JSON Web
/// Signature (JWS) format.
///
/// https://developer.apple.com/documentation/appstoreserverapi/jwstransaction
pub type JwsTransaction = Jws<JwsTransactionDecodedPayloadModel>;

/// Data structure for the decoded payload of a JWSTransaction, returned by the
/// App Store Server API.
///
/// https://developer.apple.com/documentation/appstoreserverapi/jwstransactiondecodedpayload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JwsTransactionDecodedPayloadModel {
    /// A UUID you create at the time of purchase that associates the
    /// transaction with a customer on your own service.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub app_account_token: Nullable<String>,
    /// The bundle identifier of the app.
    pub bundle_id: String,
    /// The three-letter ISO 4217 currency code associated with the price
    /// parameter. This value is present only if price is present.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub currency: Nullable<String>,
    /// The server environment, either sandbox or production.
    pub environment: OrUnknown<Environment>,
    /// The UNIX time, in milliseconds, that the subscription expires or renews.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub expires_date: Nullable<Timestamp>,
    /// Whether the transaction was purchased by the customer, or is available
    /// to them through Family Sharing.
    pub in_app_ownership_type: OrUnknown<InAppOwnershipType>,
    /// Whether the customer upgraded to another subscription.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub is_upgraded: Nullable<bool>,
    /// The payment mode of the subscription offer, such as Free Trial, Pay As
    /// You Go, or Pay Up Front.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub offer_discount_type: Nullable<OrUnknown<OfferDiscountType>>,
    /// The offer code or the promotional offer identifier.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub offer_identifier: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub offer_type: Nullable<OrUnknown<OfferType>>,
    /// The purchase date of the original transaction identifier.
    pub original_purchase_date: Timestamp,
    /// The transaction identifier of the original purchase.
    pub original_transaction_id: String,
    /// The price, in milliunits of `currency`, that the system recorded at
    /// the time of the purchase.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub price: Nullable<i64>,
    pub product_id: String,
    /// The time that the App Store charged the customer's account for a
    /// purchase, restored product, subscription, or renewal after a lapse.
    pub purchase_date: Timestamp,
    /// The number of consumable products the customer purchased.
    pub quantity: i32,
    /// The time that the App Store refunded the transaction or revoked it
    /// from Family Sharing.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub revocation_date: Nullable<Timestamp>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub revocation_reason: Nullable<OrUnknown<RevocationReason>>,
    /// The time that the App Store signed the JWS data.
    pub signed_date: Timestamp,
    pub storefront: StorefrontCountryCode,
    /// An Apple-defined value that uniquely identifies the App Store
    /// storefront associated with the purchase.
    pub storefront_id: String,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub subscription_group_identifier: Nullable<String>,
    pub transaction_id: String,
    /// Whether the transaction is a customer's purchase or a renewal the
    /// system initiated.
    pub transaction_reason: OrUnknown<TransactionReason>,
    #[serde(rename = "type")]
    pub transaction_type: OrUnknown<TransactionType>,
    /// Identifies subscription purchase events across devices, including
    /// renewals. Not sent for other product types.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub web_order_line_item_id: Nullable<String>,
}

impl JwsTransactionDecodedPayloadModel {
    /// Whether the App Store refunded or revoked this transaction.
    pub fn is_revoked(&self) -> bool {
        self.revocation_date.is_value()
    }

    pub fn storefront_country(&self) -> Option<CountryCode> {
        storefront_country(&self.storefront)
    }
}

impl FromJson for JwsTransactionDecodedPayloadModel {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            app_account_token: object.optional("appAccountToken")?,
            bundle_id: object.required("bundleId")?,
            currency: object.optional("currency")?,
            environment: object.required("environment")?,
            expires_date: object.optional("expiresDate")?,
            in_app_ownership_type: object.required("inAppOwnershipType")?,
            is_upgraded: object.optional("isUpgraded")?,
            offer_discount_type: object.optional("offerDiscountType")?,
            offer_identifier: object.optional("offerIdentifier")?,
            offer_type: object.optional("offerType")?,
            original_purchase_date: object.required("originalPurchaseDate")?,
            original_transaction_id: object.required("originalTransactionId")?,
            price: object.optional("price")?,
            product_id: object.required("productId")?,
            purchase_date: object.required("purchaseDate")?,
            quantity: object.required("quantity")?,
            revocation_date: object.optional("revocationDate")?,
            revocation_reason: object.optional("revocationReason")?,
            signed_date: object.required("signedDate")?,
            storefront: object.required("storefront")?,
            storefront_id: object.required("storefrontId")?,
            subscription_group_identifier: object.optional("subscriptionGroupIdentifier")?,
            transaction_id: object.required("transactionId")?,
            transaction_reason: object.required("transactionReason")?,
            transaction_type: object.required("type")?,
            web_order_line_item_id: object.optional("webOrderLineItemId")?,
        })
    }
}

deserialize_via_from_json!(JwsTransactionDecodedPayloadModel);

string_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/type
    pub enum TransactionType {
        /// An auto-renewable subscription.
        AutoRenewableSubscription => "Auto-Renewable Subscription",
        /// A non-consumable In-App Purchase.
        NonConsumable => "Non-Consumable",
        /// A consumable In-App Purchase.
        Consumable => "Consumable",
        /// A non-renewing subscription.
        NonRenewingSubscription => "Non-Renewing Subscription",
    }
}

string_enum! {
    /// https://developer.apple.com/documentation/appstoreservernotifications/transactionreason
    pub enum TransactionReason {
        /// The customer initiated the purchase, which may be for any in-app
        /// purchase type.
        Purchase => "PURCHASE",
        /// The App Store server initiated the purchase transaction to renew an
        /// auto-renewable subscription.
        Renewal => "RENEWAL",
    }
}

integer_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/revocationreason
    pub enum RevocationReason {
        /// The App Store refunded the transaction on behalf of the customer for
        /// other reasons, for example, an accidental purchase.
        Other = 0,
        /// The App Store refunded the transaction on behalf of the customer due to
        /// an actual or perceived issue within your app.
        Issue = 1,
    }
}
