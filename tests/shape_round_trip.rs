//! Every shape decodes from a fixture that sets each of its fields, and
//! encodes back to exactly that fixture. A wire key spelled differently on
//! the decode and encode side makes the fixture come back changed.

use std::fmt::Debug;

use fractic_app_store_models::{
    codec::{decode, encode, FromJson},
    models::{
        app_store_server_api::{
            check_test_notification_response_model::CheckTestNotificationResponseModel,
            consumption_request_model::ConsumptionRequestModel,
            history_response_model::HistoryResponseModel,
            jws_decoded_header_model::JwsDecodedHeaderModel,
            jws_renewal_info_decoded_payload_model::JwsRenewalInfoDecodedPayloadModel,
            jws_transaction_decoded_payload_model::JwsTransactionDecodedPayloadModel,
            notification_history_query::NotificationHistoryQuery,
            notification_history_request_model::NotificationHistoryRequestModel,
            notification_history_response_model::NotificationHistoryResponseModel,
            order_lookup_response_model::OrderLookupResponseModel,
            send_test_notification_response::SendTestNotificationResponse,
            status_response_model::StatusResponseModel,
            subscription_statuses_query::SubscriptionStatusesQuery,
            transaction_history_query::TransactionHistoryQuery,
            transaction_info_response_model::TransactionInfoResponseModel,
        },
        app_store_server_notifications::{
            response_body_v2_decoded_payload_model::{
                NotificationSummary, ResponseBodyV2DecodedPayloadModel,
            },
            response_body_v2_model::ResponseBodyV2Model,
        },
    },
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

fn assert_exact_round_trip<T>(fixture: Value)
where
    T: FromJson + DeserializeOwned + Serialize + PartialEq + Debug,
{
    let name = std::any::type_name::<T>();
    let decoded: T = decode(&fixture).unwrap_or_else(|e| panic!("{name}: {e}"));
    let encoded = encode(&decoded).unwrap();
    assert_eq!(encoded, fixture, "{name} did not encode back to its fixture");
    assert_eq!(decode::<T>(&encoded).unwrap(), decoded, "{name}");

    let via_serde: T = serde_json::from_value(fixture).unwrap();
    assert_eq!(via_serde, decoded, "{name} decodes differently through serde");
}

fn transaction_payload() -> Value {
    json!({
        "appAccountToken": "7389a31a-fb6d-4569-a2a6-db7d85d84813",
        "bundleId": "com.example.app",
        "currency": "EUR",
        "environment": "Sandbox",
        "expiresDate": 1_702_592_000_000i64,
        "inAppOwnershipType": "FAMILY_SHARED",
        "isUpgraded": false,
        "offerDiscountType": "PAY_AS_YOU_GO",
        "offerIdentifier": "spring-promo",
        "offerType": 2,
        "originalPurchaseDate": 1_690_000_000_000i64,
        "originalTransactionId": "2000000000000001",
        "price": 4990,
        "productId": "com.example.monthly",
        "purchaseDate": 1_700_000_000_000i64,
        "quantity": 1,
        "revocationDate": 1_701_000_000_000i64,
        "revocationReason": 1,
        "signedDate": 1_700_000_000_500i64,
        "storefront": "DEU",
        "storefrontId": "143443",
        "subscriptionGroupIdentifier": "21000000",
        "transactionId": "2000000000000009",
        "transactionReason": "RENEWAL",
        "type": "Auto-Renewable Subscription",
        "webOrderLineItemId": "2000000000000010",
    })
}

fn renewal_payload() -> Value {
    json!({
        "autoRenewProductId": "com.example.yearly",
        "autoRenewStatus": 1,
        "currency": "EUR",
        "eligibleWinBackOfferIds": ["winback-1", "winback-2"],
        "environment": "Production",
        "expirationIntent": 5,
        "gracePeriodExpiresDate": 1_700_500_000_000i64,
        "isInBillingRetryPeriod": true,
        "offerDiscountType": "FREE_TRIAL",
        "offerIdentifier": "intro",
        "offerType": 4,
        "originalTransactionId": "2000000000000001",
        "priceIncreaseStatus": null,
        "productId": "com.example.monthly",
        "recentSubscriptionStartDate": 1_690_000_000_000i64,
        "renewalDate": 1_702_592_000_000i64,
        "renewalPrice": 49_990,
        "signedDate": 1_700_000_000_500i64,
    })
}

fn send_attempts() -> Value {
    json!([
        { "attemptDate": 1_700_000_000_000i64, "sendAttemptResult": "CIRCULAR_REDIRECT" },
        { "attemptDate": 1_700_000_060_000i64, "sendAttemptResult": "SUCCESS" },
    ])
}

fn notification_summary() -> Value {
    json!({
        "requestIdentifier": "efb27071-45a4-4aca-9854-2a1e8a5a23ec",
        "environment": "Production",
        "appAppleId": 1_234_567_890,
        "bundleId": "com.example.app",
        "productId": "com.example.monthly",
        "storefrontCountryCodes": ["USA", "CAN"],
        "failedCount": 3,
        "succeededCount": 2_500,
    })
}

#[test]
fn decoded_payloads() {
    assert_exact_round_trip::<JwsTransactionDecodedPayloadModel>(transaction_payload());
    assert_exact_round_trip::<JwsRenewalInfoDecodedPayloadModel>(renewal_payload());
    assert_exact_round_trip::<JwsDecodedHeaderModel>(json!({
        "alg": "ES256",
        "kid": "key-1",
        "x5c": ["MIIEMDCC", "MIIDFjCC", "MIICQzCC"],
    }));
}

#[test]
fn transaction_envelopes() {
    assert_exact_round_trip::<HistoryResponseModel>(json!({
        "appAppleId": 1_234_567_890,
        "bundleId": "com.example.app",
        "environment": "Production",
        "hasMore": true,
        "revision": "rev-2",
        "signedTransactions": ["a.b.c", "d.e.f"],
    }));
    assert_exact_round_trip::<TransactionInfoResponseModel>(json!({
        "signedTransactionInfo": "a.b.c",
    }));
    assert_exact_round_trip::<OrderLookupResponseModel>(json!({
        "status": 0,
        "signedTransactions": ["a.b.c"],
    }));
    assert_exact_round_trip::<StatusResponseModel>(json!({
        "data": [
            {
                "subscriptionGroupIdentifier": "21000000",
                "lastTransactions": [{
                    "originalTransactionId": "2000000000000001",
                    "status": 3,
                    "signedRenewalInfo": "r.r.r",
                    "signedTransactionInfo": "t.t.t",
                }],
            },
            {
                "subscriptionGroupIdentifier": "21000001",
                "lastTransactions": [],
            },
        ],
        "environment": "Sandbox",
        "appAppleId": 1_234_567_890,
        "bundleId": "com.example.app",
    }));
}

#[test]
fn notification_envelopes() {
    assert_exact_round_trip::<SendTestNotificationResponse>(json!({
        "testNotificationToken": "ce3af791-365e-4c60-841b-1674b43c1609_1700000000000",
    }));
    assert_exact_round_trip::<CheckTestNotificationResponseModel>(json!({
        "sendAttempts": send_attempts(),
        "signedPayload": "h.p.s",
    }));
    assert_exact_round_trip::<NotificationHistoryResponseModel>(json!({
        "notificationHistory": [
            { "sendAttempts": send_attempts(), "signedPayload": "h.p.s" },
        ],
        "hasMore": false,
        "paginationToken": "page-3",
    }));
    assert_exact_round_trip::<ResponseBodyV2Model>(json!({
        "signedPayload": "h.p.s",
    }));
}

#[test]
fn decoded_notifications() {
    assert_exact_round_trip::<NotificationSummary>(notification_summary());
    assert_exact_round_trip::<ResponseBodyV2DecodedPayloadModel>(json!({
        "notificationType": "CONSUMPTION_REQUEST",
        "subtype": "VOLUNTARY",
        "notificationUUID": "002e14d5-51f5-4503-b5a8-c3a1af68eb20",
        "version": "2.0",
        "signedDate": 1_700_000_000_000i64,
        "data": {
            "appAppleId": 1_234_567_890,
            "bundleId": "com.example.app",
            "bundleVersion": "42",
            "consumptionRequestReason": "FULFILLMENT_ISSUE",
            "environment": "Production",
            "signedRenewalInfo": "r.r.r",
            "signedTransactionInfo": "t.t.t",
            "status": 2,
        },
    }));
    assert_exact_round_trip::<ResponseBodyV2DecodedPayloadModel>(json!({
        "notificationType": "RENEWAL_EXTENSION",
        "subtype": "SUMMARY",
        "notificationUUID": "9a1b2c3d",
        "version": "2.0",
        "signedDate": 1_700_000_000_000i64,
        "summary": notification_summary(),
    }));
}

#[test]
fn request_shapes() {
    assert_exact_round_trip::<TransactionHistoryQuery>(json!({
        "revision": "rev-2",
        "sort": "ASCENDING",
        "startDate": 1_690_000_000_000i64,
        "endDate": 1_700_000_000_000i64,
        "productType": "NON_CONSUMABLE",
        "productId": "com.example.lifetime",
        "subscriptionGroupIdentifier": "21000000",
        "inAppOwnershipType": "PURCHASED",
        "revoked": false,
    }));
    assert_exact_round_trip::<SubscriptionStatusesQuery>(json!({ "status": [1, 4, 5] }));
    assert_exact_round_trip::<SubscriptionStatusesQuery>(json!({ "status": [] }));
    assert_exact_round_trip::<NotificationHistoryQuery>(json!({ "paginationToken": "page-2" }));
    assert_exact_round_trip::<NotificationHistoryRequestModel>(json!({
        "startDate": 1_690_000_000_000i64,
        "endDate": 1_700_000_000_000i64,
        "notificationType": "SUBSCRIBED",
        "notificationSubtype": "RESUBSCRIBE",
        "onlyFailures": true,
        "transactionId": "2000000000000001",
    }));
    assert_exact_round_trip::<ConsumptionRequestModel>(json!({
        "accountTenure": 7,
        "appAccountToken": "",
        "consumptionStatus": 3,
        "customerConsented": true,
        "deliveryStatus": 5,
        "lifetimeDollarsPurchased": 7,
        "lifetimeDollarsRefunded": 2,
        "platform": 2,
        "playTime": 7,
        "sampleContentProvided": true,
        "userStatus": 4,
    }));
}
