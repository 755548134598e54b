use serde::Serialize;
use serde_json::{Map, Value};

use super::{nullable::Nullable, path::JsonPath};
use crate::errors::{MismatchReason, ModelError};

/// Construction of a strongly-typed value from decoded JSON.
///
/// Implementations report the exact field path of whatever failed, so a
/// missing `bundleId` surfaces as `SchemaMismatch` at `bundleId` and a bad
/// status code deep inside a status response as
/// `data[0].lastTransactions[0].status`.
pub trait FromJson: Sized {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError>;
}

/// Decodes a shape from an already-parsed JSON value.
pub fn decode<T: FromJson>(value: &Value) -> Result<T, ModelError> {
    T::from_json(value, &JsonPath::Root)
}

/// Decodes a shape from JSON text.
pub fn decode_str<T: FromJson>(json: &str) -> Result<T, ModelError> {
    let value: Value = serde_json::from_str(json).map_err(invalid_json)?;
    decode(&value)
}

/// Decodes a shape from JSON bytes, such as a JWS payload segment.
pub fn decode_slice<T: FromJson>(json: &[u8]) -> Result<T, ModelError> {
    let value: Value = serde_json::from_slice(json).map_err(invalid_json)?;
    decode(&value)
}

/// Encodes a shape back to its wire JSON. For every shape in this crate,
/// `decode(&encode(&x)?)? == x`.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Value, ModelError> {
    serde_json::to_value(value).map_err(|e| {
        ModelError::mismatch(&JsonPath::Root, MismatchReason::Unserializable(e.to_string()))
    })
}

pub fn encode_string<T: Serialize + ?Sized>(value: &T) -> Result<String, ModelError> {
    serde_json::to_string(value).map_err(|e| {
        ModelError::mismatch(&JsonPath::Root, MismatchReason::Unserializable(e.to_string()))
    })
}

fn invalid_json(error: serde_json::Error) -> ModelError {
    ModelError::mismatch(&JsonPath::Root, MismatchReason::InvalidJson(error.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn wrong_type(expected: &'static str, value: &Value, path: &JsonPath<'_>) -> ModelError {
    ModelError::mismatch(
        path,
        MismatchReason::WrongType {
            expected,
            found: json_kind(value),
        },
    )
}

/// Field-by-field reader over a JSON object.
///
/// Unknown keys are ignored: the vendor adds fields over time and older
/// readers must keep working.
pub struct ObjectReader<'a> {
    fields: &'a Map<String, Value>,
    path: &'a JsonPath<'a>,
}

impl<'a> ObjectReader<'a> {
    pub fn new(value: &'a Value, path: &'a JsonPath<'a>) -> Result<Self, ModelError> {
        match value {
            Value::Object(fields) => Ok(Self { fields, path }),
            other => Err(wrong_type("object", other, path)),
        }
    }

    /// A field that must be present and non-null.
    pub fn required<T: FromJson>(&self, key: &'static str) -> Result<T, ModelError> {
        let path = self.path.key(key);
        match self.fields.get(key) {
            None => Err(ModelError::mismatch(&path, MismatchReason::Missing)),
            Some(Value::Null) => Err(ModelError::mismatch(&path, MismatchReason::Null)),
            Some(value) => T::from_json(value, &path),
        }
    }

    /// A field that may be absent or null. A present value of the wrong
    /// type is still a mismatch.
    pub fn optional<T: FromJson>(&self, key: &'static str) -> Result<Nullable<T>, ModelError> {
        let path = self.path.key(key);
        match self.fields.get(key) {
            None => Ok(Nullable::Absent),
            Some(Value::Null) => Ok(Nullable::Null),
            Some(value) => T::from_json(value, &path).map(Nullable::Value),
        }
    }

    /// Request-side optional field: absent and null both mean "not set".
    pub fn optional_or_none<T: FromJson>(&self, key: &'static str) -> Result<Option<T>, ModelError> {
        self.optional(key).map(Nullable::into_option)
    }
}

impl FromJson for String {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| wrong_type("string", value, path))
    }
}

impl FromJson for bool {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        value.as_bool().ok_or_else(|| wrong_type("boolean", value, path))
    }
}

impl FromJson for i64 {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        match value {
            Value::Number(number) => number.as_i64().ok_or_else(|| {
                ModelError::mismatch(
                    path,
                    MismatchReason::OutOfRange {
                        expected: "integer",
                        value: number.to_string(),
                    },
                )
            }),
            other => Err(wrong_type("integer", other, path)),
        }
    }
}

impl FromJson for i32 {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let wide = i64::from_json(value, path)?;
        i32::try_from(wide).map_err(|_| {
            ModelError::mismatch(
                path,
                MismatchReason::OutOfRange {
                    expected: "32-bit integer",
                    value: wide.to_string(),
                },
            )
        })
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value, path: &JsonPath<'_>) -> Result<Self, ModelError> {
        let items = value.as_array().ok_or_else(|| wrong_type("array", value, path))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_json(item, &path.index(index)))
            .collect()
    }
}

/// Implements `serde::Deserialize` for shapes by routing through
/// [`FromJson`], so serde-based callers see the same tolerance rules and
/// field paths as [`decode`].
macro_rules! deserialize_via_from_json {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'de> ::serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    let value =
                        <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                    $crate::data::codec::decode(&value).map_err(::serde::de::Error::custom)
                }
            }
        )+
    };
}
pub(crate) use deserialize_via_from_json;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn required_field_reports_missing_and_null_separately() {
        let value = json!({ "present": null });
        let root = JsonPath::Root;
        let reader = ObjectReader::new(&value, &root).unwrap();

        let missing = reader.required::<String>("absent").unwrap_err();
        assert_eq!(
            missing,
            ModelError::SchemaMismatch {
                path: "absent".to_owned(),
                reason: MismatchReason::Missing,
            }
        );

        let null = reader.required::<String>("present").unwrap_err();
        assert_eq!(
            null,
            ModelError::SchemaMismatch {
                path: "present".to_owned(),
                reason: MismatchReason::Null,
            }
        );
    }

    #[test]
    fn optional_field_keeps_absent_and_null_apart() {
        let value = json!({ "nulled": null, "set": 7 });
        let root = JsonPath::Root;
        let reader = ObjectReader::new(&value, &root).unwrap();

        assert_eq!(reader.optional::<i64>("missing").unwrap(), Nullable::Absent);
        assert_eq!(reader.optional::<i64>("nulled").unwrap(), Nullable::Null);
        assert_eq!(reader.optional::<i64>("set").unwrap(), Nullable::Value(7));
        assert_eq!(reader.optional_or_none::<i64>("nulled").unwrap(), None);
    }

    #[test]
    fn wrong_primitive_type_names_expected_and_found() {
        let error = decode::<Vec<bool>>(&json!([true, "no"])).unwrap_err();
        assert_eq!(
            error,
            ModelError::SchemaMismatch {
                path: "[1]".to_owned(),
                reason: MismatchReason::WrongType {
                    expected: "boolean",
                    found: "string",
                },
            }
        );
    }

    #[test]
    fn fractional_numbers_are_not_integers() {
        let error = decode::<i64>(&json!(1.5)).unwrap_err();
        assert!(matches!(
            error,
            ModelError::SchemaMismatch {
                reason: MismatchReason::OutOfRange { .. },
                ..
            }
        ));
    }

    #[test]
    fn invalid_json_text_is_a_root_mismatch() {
        let error = decode_str::<String>("{not json").unwrap_err();
        assert_eq!(error.path(), "$");
    }
}
