//! Vendor operations the models belong to, with their HTTP method and path.
//!
//! No client lives here; callers feed [`Endpoint::url`] and the request
//! shapes into whatever HTTP stack they use.

use std::fmt;

use crate::data::models::app_store_server_api::common::Environment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One App Store Server API operation.
///
/// Each variant notes its request and response shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint<'a> {
    /// `TransactionHistoryQuery` in, `HistoryResponseModel` out.
    GetTransactionHistory { transaction_id: &'a str },
    /// `TransactionInfoResponseModel` out.
    GetTransactionInfo { transaction_id: &'a str },
    /// `SubscriptionStatusesQuery` in, `StatusResponseModel` out.
    GetAllSubscriptionStatuses { transaction_id: &'a str },
    /// `OrderLookupResponseModel` out.
    LookUpOrderId { order_id: &'a str },
    /// `SendTestNotificationResponse` out.
    RequestTestNotification,
    /// `CheckTestNotificationResponseModel` out.
    GetTestNotificationStatus { test_notification_token: &'a str },
    /// `NotificationHistoryQuery` and `NotificationHistoryRequestModel` in,
    /// `NotificationHistoryResponseModel` out.
    GetNotificationHistory,
    /// `ConsumptionRequestModel` in; no response body.
    SendConsumptionInformation { transaction_id: &'a str },
}

impl Endpoint<'_> {
    pub const fn method(&self) -> HttpMethod {
        match self {
            Endpoint::RequestTestNotification | Endpoint::GetNotificationHistory => HttpMethod::Post,
            Endpoint::SendConsumptionInformation { .. } => HttpMethod::Put,
            _ => HttpMethod::Get,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::GetTransactionHistory { transaction_id } => {
                format!("/inApps/v2/history/{transaction_id}")
            }
            Endpoint::GetTransactionInfo { transaction_id } => {
                format!("/inApps/v1/transactions/{transaction_id}")
            }
            Endpoint::GetAllSubscriptionStatuses { transaction_id } => {
                format!("/inApps/v1/subscriptions/{transaction_id}")
            }
            Endpoint::LookUpOrderId { order_id } => format!("/inApps/v1/lookup/{order_id}"),
            Endpoint::RequestTestNotification => "/inApps/v1/notifications/test".to_owned(),
            Endpoint::GetTestNotificationStatus {
                test_notification_token,
            } => format!("/inApps/v1/notifications/test/{test_notification_token}"),
            Endpoint::GetNotificationHistory => "/inApps/v1/notifications/history".to_owned(),
            Endpoint::SendConsumptionInformation { transaction_id } => {
                format!("/inApps/v1/transactions/consumption/{transaction_id}")
            }
        }
    }

    /// Full URL on the host serving `environment`.
    ///
    /// Apple recommends calling production first and retrying against the
    /// sandbox when the transaction is not found there.
    pub fn url(&self, environment: Environment) -> String {
        format!("{}{}", environment.base_url(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_info_urls_per_environment() {
        let endpoint = Endpoint::GetTransactionInfo {
            transaction_id: "2000000000000001",
        };
        assert_eq!(endpoint.method(), HttpMethod::Get);
        assert_eq!(
            endpoint.url(Environment::Production),
            "https://api.storekit.itunes.apple.com/inApps/v1/transactions/2000000000000001"
        );
        assert_eq!(
            endpoint.url(Environment::Sandbox),
            "https://api.storekit-sandbox.itunes.apple.com/inApps/v1/transactions/2000000000000001"
        );
    }

    #[test]
    fn methods_match_the_vendor_operations() {
        assert_eq!(Endpoint::RequestTestNotification.method(), HttpMethod::Post);
        assert_eq!(Endpoint::GetNotificationHistory.method().to_string(), "POST");
        assert_eq!(
            Endpoint::SendConsumptionInformation { transaction_id: "1" }.method(),
            HttpMethod::Put
        );
        assert_eq!(Endpoint::LookUpOrderId { order_id: "MK5TTTVWJH" }.method(), HttpMethod::Get);
    }

    #[test]
    fn paths() {
        assert_eq!(
            Endpoint::GetTransactionHistory { transaction_id: "42" }.path(),
            "/inApps/v2/history/42"
        );
        assert_eq!(
            Endpoint::GetAllSubscriptionStatuses { transaction_id: "42" }.path(),
            "/inApps/v1/subscriptions/42"
        );
        assert_eq!(
            Endpoint::GetTestNotificationStatus {
                test_notification_token: "abc_123"
            }
            .path(),
            "/inApps/v1/notifications/test/abc_123"
        );
        assert_eq!(
            Endpoint::SendConsumptionInformation { transaction_id: "42" }.path(),
            "/inApps/v1/transactions/consumption/42"
        );
    }
}
