use std::{fmt, hash::Hash};

use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

use super::{from_json::FromJson, path::JsonPath};
use crate::errors::ModelError;

/// A closed enumeration whose members map one-to-one onto vendor wire codes.
///
/// The wire code of each member is an external contract: string codes are
/// case- and spelling-exact, integer codes are exact.
pub trait WireEnum: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// `String` for string-coded enumerations, `i64` for integer-coded ones.
    type Raw: Clone
        + Eq
        + Hash
        + fmt::Debug
        + fmt::Display
        + Serialize
        + FromJson
        + Send
        + Sync;

    const NAME: &'static str;
    const ALL: &'static [Self];

    fn to_raw(self) -> Self::Raw;
    fn from_raw(raw: &Self::Raw) -> Option<Self>;
}

/// An enumeration value read from an inbound payload.
///
/// The vendor adds codes over time, so an unrecognized code is kept as
/// [`OrUnknown::Unknown`] instead of failing the whole payload. Request
/// shapes hold the bare enumeration and reject unknown codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrUnknown<E: WireEnum> {
    Known(E),
    Unknown(E::Raw),
}

impl<E: WireEnum> OrUnknown<E> {
    pub fn known(&self) -> Option<E> {
        match self {
            OrUnknown::Known(known) => Some(*known),
            OrUnknown::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, OrUnknown::Known(_))
    }

    /// The wire code, whether or not it is recognized.
    pub fn raw(&self) -> E::Raw {
        match self {
            OrUnknown::Known(known) => known.to_raw(),
            OrUnknown::Unknown(raw) => raw.clone(),
        }
    }
}

impl<E: WireEnum> From<E> for OrUnknown<E> {
    fn from(known: E) -> Self {
        OrUnknown::Known(known)
    }
}

impl<E: WireEnum> PartialEq<E> for OrUnknown<E> {
    fn eq(&self, other: &E) -> bool {
        matches!(self, OrUnknown::Known(known) if known == other)
    }
}

impl<E: WireEnum> fmt::Display for OrUnknown<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrUnknown::Known(known) => known.to_raw().fmt(f),
            OrUnknown::Unknown(raw) => raw.fmt(f),
        }
    }
}

impl<E: WireEnum> FromJson for OrUnknown<E> {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        // A code of the wrong primitive type is still a schema mismatch.
        let raw = E::Raw::from_json(value, path)?;
        Ok(match E::from_raw(&raw) {
            Some(known) => OrUnknown::Known(known),
            None => {
                warn!(
                    enumeration = E::NAME,
                    value = %raw,
                    path = %path,
                    "keeping unrecognized enumerant from inbound payload"
                );
                OrUnknown::Unknown(raw)
            }
        })
    }
}

impl<E: WireEnum> Serialize for OrUnknown<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OrUnknown::Known(known) => known.to_raw().serialize(serializer),
            OrUnknown::Unknown(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de, E: WireEnum> serde::Deserialize<'de> for OrUnknown<E> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
        super::decode(&value).map_err(serde::de::Error::custom)
    }
}

/// Declares a string-coded [`WireEnum`].
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl $crate::data::codec::WireEnum for $name {
            type Raw = ::std::string::String;

            const NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$( Self::$variant, )+];

            fn to_raw(self) -> ::std::string::String {
                self.as_str().to_owned()
            }

            fn from_raw(raw: &::std::string::String) -> ::std::option::Option<Self> {
                match raw.as_str() {
                    $( $wire => ::std::option::Option::Some(Self::$variant), )+
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::errors::ModelError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $wire => ::std::result::Result::Ok(Self::$variant), )+
                    _ => ::std::result::Result::Err($crate::errors::ModelError::unknown_enumerant(
                        stringify!($name),
                        s,
                        &$crate::data::codec::JsonPath::Root,
                    )),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl $crate::data::codec::FromJson for $name {
            fn from_json(
                value: &::serde_json::Value,
                path: &$crate::data::codec::JsonPath<'_>,
            ) -> ::std::result::Result<Self, $crate::errors::ModelError> {
                let raw = <::std::string::String as $crate::data::codec::FromJson>::from_json(
                    value, path,
                )?;
                <Self as $crate::data::codec::WireEnum>::from_raw(&raw).ok_or_else(|| {
                    $crate::errors::ModelError::unknown_enumerant(stringify!($name), &raw, path)
                })
            }
        }

        $crate::data::codec::deserialize_via_from_json!($name);
    };
}
pub(crate) use string_enum;

/// Declares an integer-coded [`WireEnum`].
macro_rules! integer_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde_repr::Serialize_repr)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $code,
            )+
        }

        impl $name {
            pub const fn code(self) -> i64 {
                self as i64
            }
        }

        impl $crate::data::codec::WireEnum for $name {
            type Raw = i64;

            const NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$( Self::$variant, )+];

            fn to_raw(self) -> i64 {
                self.code()
            }

            fn from_raw(raw: &i64) -> ::std::option::Option<Self> {
                match *raw {
                    $( $code => ::std::option::Option::Some(Self::$variant), )+
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::convert::TryFrom<i64> for $name {
            type Error = $crate::errors::ModelError;

            fn try_from(code: i64) -> ::std::result::Result<Self, Self::Error> {
                <Self as $crate::data::codec::WireEnum>::from_raw(&code).ok_or_else(|| {
                    $crate::errors::ModelError::unknown_enumerant(
                        stringify!($name),
                        code,
                        &$crate::data::codec::JsonPath::Root,
                    )
                })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.code())
            }
        }

        impl $crate::data::codec::FromJson for $name {
            fn from_json(
                value: &::serde_json::Value,
                path: &$crate::data::codec::JsonPath<'_>,
            ) -> ::std::result::Result<Self, $crate::errors::ModelError> {
                let raw = <i64 as $crate::data::codec::FromJson>::from_json(value, path)?;
                <Self as $crate::data::codec::WireEnum>::from_raw(&raw).ok_or_else(|| {
                    $crate::errors::ModelError::unknown_enumerant(stringify!($name), raw, path)
                })
            }
        }

        $crate::data::codec::deserialize_via_from_json!($name);
    };
}
pub(crate) use integer_enum;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::data::codec::decode;

    string_enum! {
        enum Fruit {
            Apple => "APPLE",
            Pear => "PEAR",
        }
    }

    integer_enum! {
        enum Level {
            Low = 1,
            High = 2,
        }
    }

    #[test]
    fn strict_decoding_rejects_unknown_codes() {
        let error = decode::<Fruit>(&json!("BANANA")).unwrap_err();
        assert_eq!(
            error,
            ModelError::UnknownEnumerant {
                enumeration: "Fruit",
                value: "BANANA".to_owned(),
                path: "$".to_owned(),
            }
        );
        assert!(decode::<Level>(&json!(9)).is_err());
    }

    #[test]
    fn tolerant_decoding_keeps_the_raw_code() {
        assert_eq!(
            decode::<OrUnknown<Fruit>>(&json!("BANANA")).unwrap(),
            OrUnknown::<Fruit>::Unknown("BANANA".to_owned())
        );
        assert_eq!(
            decode::<OrUnknown<Level>>(&json!(9)).unwrap(),
            OrUnknown::<Level>::Unknown(9)
        );
        assert_eq!(decode::<OrUnknown<Level>>(&json!(2)).unwrap(), Level::High);
    }

    #[test]
    fn tolerant_decoding_still_checks_the_primitive_type() {
        assert!(decode::<OrUnknown<Level>>(&json!("2")).is_err());
        assert!(decode::<OrUnknown<Fruit>>(&json!(1)).is_err());
    }

    #[test]
    fn unknown_codes_encode_back_unchanged() {
        let unknown: OrUnknown<Fruit> = OrUnknown::Unknown("BANANA".to_owned());
        assert_eq!(serde_json::to_value(&unknown).unwrap(), json!("BANANA"));
        assert_eq!(serde_json::to_value(Level::High).unwrap(), json!(2));
        assert_eq!(serde_json::to_value(Fruit::Pear).unwrap(), json!("PEAR"));
    }

    #[test]
    fn conversions_cover_every_member() {
        for fruit in Fruit::ALL {
            assert_eq!(fruit.as_str().parse::<Fruit>().unwrap(), *fruit);
        }
        for level in Level::ALL {
            assert_eq!(Level::try_from(level.code()).unwrap(), *level);
        }
    }
}
