pub mod data {
    pub mod codec {
        mod from_json;
        mod nullable;
        mod path;
        mod wire_enum;

        pub(crate) use from_json::{deserialize_via_from_json, wrong_type};
        pub use from_json::{
            decode, decode_slice, decode_str, encode, encode_string, FromJson, ObjectReader,
        };
        pub use nullable::Nullable;
        pub use path::JsonPath;
        pub(crate) use wire_enum::{integer_enum, string_enum};
        pub use wire_enum::{OrUnknown, WireEnum};
    }
    pub mod jws {
        mod signed_token;
        mod verifier;

        pub use signed_token::Jws;
        pub use verifier::JwsVerifier;
    }
    pub mod models {
        pub mod app_store_server_api {
            pub mod check_test_notification_response_model;
            pub mod common;
            pub mod consumption_request_model;
            pub mod history_response_model;
            pub mod jws_decoded_header_model;
            pub mod jws_renewal_info_decoded_payload_model;
            pub mod jws_transaction_decoded_payload_model;
            pub mod notification_history_query;
            pub mod notification_history_request_model;
            pub mod notification_history_response_model;
            pub mod order_lookup_response_model;
            pub mod pagination;
            pub mod send_test_notification_response;
            pub mod status_response_model;
            pub mod subscription_statuses_query;
            pub mod transaction_history_query;
            pub mod transaction_info_response_model;
        }
        pub mod app_store_server_notifications {
            pub mod response_body_v2_decoded_payload_model;
            pub mod response_body_v2_model;
        }
    }
}

pub use data::{codec, jws, models};

pub mod constants;
pub mod endpoints;
pub mod errors;
