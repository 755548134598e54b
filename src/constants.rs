/// Host of the App Store Server API for production data.
pub const PRODUCTION_BASE_URL: &str = "https://api.storekit.itunes.apple.com";

/// Host of the App Store Server API for sandbox testing data.
pub const SANDBOX_BASE_URL: &str = "https://api.storekit-sandbox.itunes.apple.com";

/// Value of the `version` field in App Store Server Notifications V2 payloads.
pub const NOTIFICATION_VERSION: &str = "2.0";
