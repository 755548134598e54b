use serde::Serialize;
use serde_json::Value;

use crate::{
    data::codec::{deserialize_via_from_json, integer_enum, FromJson, JsonPath, ObjectReader},
    errors::ModelError,
};

/// The request body containing consumption information, sent in reply to a
/// `CONSUMPTION_REQUEST` notification.
///
/// Every field is required by the endpoint. Use the `Undeclared` member of
/// an axis to decline to provide that information.
///
/// https://developer.apple.com/documentation/appstoreserverapi/consumptionrequest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionRequestModel {
    pub account_tenure: AccountTenure,
    /// The UUID the app set as `appAccountToken` on the purchase, or an
    /// empty string if none was set.
    pub app_account_token: String,
    pub consumption_status: ConsumptionStatus,
    /// Whether the customer consented to provide consumption data to the App
    /// Store. Apple rejects the request unless this is `true`.
    pub customer_consented: bool,
    pub delivery_status: DeliveryStatus,
    pub lifetime_dollars_purchased: LifetimeDollarsPurchased,
    pub lifetime_dollars_refunded: LifetimeDollarsRefunded,
    pub platform: Platform,
    pub play_time: PlayTime,
    /// Whether you provided, prior to purchase, a free sample or trial of the
    /// content, or information about its functionality.
    pub sample_content_provided: bool,
    pub user_status: UserStatus,
}

impl FromJson for ConsumptionRequestModel {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            account_tenure: object.required("accountTenure")?,
            app_account_token: object.required("appAccountToken")?,
            consumption_status: object.required("consumptionStatus")?,
            customer_consented: object.required("customerConsented")?,
            delivery_status: object.required("deliveryStatus")?,
            lifetime_dollars_purchased: object.required("lifetimeDollarsPurchased")?,
            lifetime_dollars_refunded: object.required("lifetimeDollarsRefunded")?,
            platform: object.required("platform")?,
            play_time: object.required("playTime")?,
            sample_content_provided: object.required("sampleContentProvided")?,
            user_status: object.required("userStatus")?,
        })
    }
}

deserialize_via_from_json!(ConsumptionRequestModel);

integer_enum! {
    /// The age of the customer's account.
    ///
    /// https://developer.apple.com/documentation/appstoreserverapi/accounttenure
    pub enum AccountTenure {
        Undeclared = 0,
        Between0And3Days = 1,
        Between3And10Days = 2,
        Between10And30Days = 3,
        Between30And90Days = 4,
        Between90And180Days = 5,
        Between180And365Days = 6,
        Over365Days = 7,
    }
}

integer_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/consumptionstatus
    pub enum ConsumptionStatus {
        Undeclared = 0,
        NotConsumed = 1,
        PartiallyConsumed = 2,
        FullyConsumed = 3,
    }
}

integer_enum! {
    /// Whether the app successfully delivered an In-App Purchase that works
    /// properly.
    ///
    /// https://developer.apple.com/documentation/appstoreserverapi/deliverystatus
    pub enum DeliveryStatus {
        DeliveredAndWorking = 0,
        /// Not delivered due to a quality issue.
        NotDeliveredBecauseQuality = 1,
        /// The app delivered the wrong item.
        DeliveredWrong = 2,
        /// Not delivered due to a server outage.
        NotDeliveredBecauseOutage = 3,
        /// Not delivered due to an in-game currency change.
        NotDeliveredBecauseCurrencyChange = 4,
        NotDeliveredBecauseOther = 5,
    }
}

integer_enum! {
    /// Total amount, in USD, of in-app purchases the customer has made in
    /// your app, across all platforms.
    ///
    /// https://developer.apple.com/documentation/appstoreserverapi/lifetimedollarspurchased
    pub enum LifetimeDollarsPurchased {
        Undeclared = 0,
        Usd0 = 1,
        Usd0_01To49_99 = 2,
        Usd50To99_99 = 3,
        Usd100To499_99 = 4,
        Usd500To999_99 = 5,
        Usd1000To1999_99 = 6,
        Usd2000OrMore = 7,
    }
}

integer_enum! {
    /// Total amount, in USD, of refunds the customer has received in your
    /// app, across all platforms.
    ///
    /// https://developer.apple.com/documentation/appstoreserverapi/lifetimedollarsrefunded
    pub enum LifetimeDollarsRefunded {
        Undeclared = 0,
        Usd0 = 1,
        Usd0_01To49_99 = 2,
        Usd50To99_99 = 3,
        Usd100To499_99 = 4,
        Usd500To999_99 = 5,
        Usd1000To1999_99 = 6,
        Usd2000OrMore = 7,
    }
}

integer_enum! {
    /// The platform on which the customer consumed the in-app purchase.
    ///
    /// https://developer.apple.com/documentation/appstoreserverapi/platform
    pub enum Platform {
        Undeclared = 0,
        Apple = 1,
        NonApple = 2,
    }
}

integer_enum! {
    /// The amount of time that the customer used the app.
    ///
    /// https://developer.apple.com/documentation/appstoreserverapi/playtime
    pub enum PlayTime {
        Undeclared = 0,
        Between0And5Minutes = 1,
        Between5And60Minutes = 2,
        Between1And6Hours = 3,
        Between6And24Hours = 4,
        Between1And4Days = 5,
        Between4And16Days = 6,
        Over16Days = 7,
    }
}

integer_enum! {
    /// https://developer.apple.com/documentation/appstoreserverapi/userstatus
    pub enum UserStatus {
        Undeclared = 0,
        Active = 1,
        Suspended = 2,
        Terminated = 3,
        /// The customer's account has limited access.
        Limited = 4,
    }
}
