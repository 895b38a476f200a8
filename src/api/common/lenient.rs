//
//  bitbucket-kit
//  api/common/lenient.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Lenient field deserializers.
//!
//! The Bitbucket API does not guarantee which fields of a record are populated, nor
//! their types. Wire payloads therefore decode every field through these helpers:
//! a value of the expected JSON type is kept, anything else (including `null`)
//! becomes `None`. Combine with `#[serde(default)]` so missing fields also decode.
//!
//! ```rust
//! use serde::Deserialize;
//! use bitbucket_kit::api::common::lenient;
//!
//! #[derive(Deserialize)]
//! struct Payload {
//!     #[serde(default, deserialize_with = "lenient::string")]
//!     name: Option<String>,
//! }
//!
//! let payload: Payload = serde_json::from_str(r#"{"name": 42}"#).unwrap();
//! assert_eq!(payload.name, None);
//! ```
//!
//! Derived `Deserialize` impls also accept a JSON array and fill fields by
//! position. Records that must only decode from an object read their fields
//! through [`object`] instead:
//!
//! ```rust
//! use serde::{Deserialize, Deserializer};
//! use bitbucket_kit::api::common::lenient;
//!
//! struct Payload {
//!     name: Option<String>,
//! }
//!
//! impl<'de> Deserialize<'de> for Payload {
//!     fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
//!         let mut fields = lenient::object(deserializer)?;
//!         Ok(Self { name: fields.string("name") })
//!     }
//! }
//!
//! assert!(serde_json::from_str::<Payload>(r#"["bob"]"#).is_err());
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Fields of a JSON object, consumed one key at a time with the same leniency
/// as [`string`] and [`boolean`].
#[derive(Debug, Default)]
pub struct Fields(Map<String, Value>);

impl Fields {
    /// Removes `key` and keeps it only if it is a JSON string.
    pub fn string(&mut self, key: &str) -> Option<String> {
        self.0.remove(key).and_then(|value| as_string(key, value))
    }

    /// Removes `key` and keeps it only if it is a JSON boolean.
    pub fn boolean(&mut self, key: &str) -> Option<bool> {
        self.0.remove(key).and_then(|value| as_boolean(key, value))
    }
}

/// Decodes a JSON object. Arrays and scalars are rejected, so a record never
/// decodes from a positional (array) body.
pub fn object<'de, D>(deserializer: D) -> Result<Fields, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(Fields(map)),
        other => Err(D::Error::custom(format!(
            "invalid type: expected a JSON object, found {}",
            kind(&other)
        ))),
    }
}

/// Decodes a JSON string; any other value yields `None`.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_string("field", Value::deserialize(deserializer)?))
}

/// Decodes a JSON boolean; any other value yields `None`.
pub fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_boolean("field", Value::deserialize(deserializer)?))
}

fn as_string(key: &str, value: Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value),
        Value::Null => None,
        other => {
            tracing::warn!("Ignoring non-string value for {}: {}", key, other);
            None
        }
    }
}

fn as_boolean(key: &str, value: Value) -> Option<bool> {
    match value {
        Value::Bool(value) => Some(value),
        Value::Null => None,
        other => {
            tracing::warn!("Ignoring non-boolean value for {}: {}", key, other);
            None
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "boolean")]
        flag: Option<bool>,
    }

    #[test]
    fn test_keeps_values_of_the_right_type() {
        let sample: Sample = serde_json::from_str(r#"{"text": "hi", "flag": true}"#).unwrap();
        assert_eq!(sample.text.as_deref(), Some("hi"));
        assert_eq!(sample.flag, Some(true));
    }

    #[test]
    fn test_wrong_types_and_nulls_become_none() {
        let sample: Sample =
            serde_json::from_str(r#"{"text": ["a"], "flag": "yes"}"#).unwrap();
        assert_eq!(sample.text, None);
        assert_eq!(sample.flag, None);

        let sample: Sample = serde_json::from_str(r#"{"text": null, "flag": null}"#).unwrap();
        assert_eq!(sample.text, None);
        assert_eq!(sample.flag, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let sample: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(sample.text, None);
        assert_eq!(sample.flag, None);
    }

    #[derive(Debug)]
    struct Record {
        name: Option<String>,
        active: Option<bool>,
    }

    impl<'de> Deserialize<'de> for Record {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let mut fields = object(deserializer)?;
            Ok(Self {
                name: fields.string("name"),
                active: fields.boolean("active"),
            })
        }
    }

    #[test]
    fn test_object_reads_fields_leniently() {
        let record: Record =
            serde_json::from_str(r#"{"name": "bob", "active": "yes", "extra": 1}"#).unwrap();
        assert_eq!(record.name.as_deref(), Some("bob"));
        assert_eq!(record.active, None);

        let record: Record = serde_json::from_str("{}").unwrap();
        assert_eq!(record.name, None);
    }

    #[test]
    fn test_object_rejects_arrays_and_scalars() {
        let error = serde_json::from_str::<Record>(r#"["bob", true]"#).unwrap_err();
        assert!(error.to_string().contains("expected a JSON object, found an array"));

        assert!(serde_json::from_str::<Record>("[]").is_err());
        assert!(serde_json::from_str::<Record>("\"bob\"").is_err());
        assert!(serde_json::from_str::<Record>("null").is_err());
    }
}
