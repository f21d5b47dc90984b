//! Field-level value types shared by all API entities.
//!
//! The Utho API is loose about scalar types: the same field may arrive as
//! `"2"`, `2`, `null` or be missing entirely depending on endpoint and
//! resource age. [`Scalar`] absorbs all of those into display text.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A scalar API value kept as text.
///
/// Deserializes from strings, integers, floats, booleans and null.
/// Null and missing values become the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Scalar(String);

impl Scalar {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for Scalar {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Scalar {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
        Ok(Scalar(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Scalar, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Scalar, E> {
        Ok(Scalar::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Scalar, E> {
        Ok(Scalar::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Scalar, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// Decode an embedded collection, treating `null` like an empty list.
pub fn list_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a user-supplied boolean flag value.
///
/// Accepts `1/0`, `t/f`, `true/false`, `yes/no` in any case.
/// An empty value is `false`, matching an unset flag.
pub fn parse_bool(value: &str) -> Result<bool, DomainError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "f" | "false" | "no" => Ok(false),
        "1" | "t" | "true" | "yes" => Ok(true),
        _ => Err(DomainError::InvalidBool(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct Probe {
        value: Scalar,
    }

    #[rstest]
    #[case(r#"{"value": "abc"}"#, "abc")]
    #[case(r#"{"value": 42}"#, "42")]
    #[case(r#"{"value": -3}"#, "-3")]
    #[case(r#"{"value": 1.5}"#, "1.5")]
    #[case(r#"{"value": true}"#, "true")]
    #[case(r#"{"value": null}"#, "")]
    #[case(r#"{}"#, "")]
    fn given_loose_json_scalar_when_decoding_then_yields_text(
        #[case] json: &str,
        #[case] expected: &str,
    ) {
        let probe: Probe = serde_json::from_str(json).unwrap();
        assert_eq!(probe.value.as_str(), expected);
    }

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct ListProbe {
        #[serde(deserialize_with = "list_or_null")]
        items: Vec<Scalar>,
    }

    #[rstest]
    #[case(r#"{"items": null}"#, 0)]
    #[case(r#"{}"#, 0)]
    #[case(r#"{"items": [1, "two"]}"#, 2)]
    fn given_collection_or_null_when_decoding_then_yields_list(
        #[case] json: &str,
        #[case] expected: usize,
    ) {
        let probe: ListProbe = serde_json::from_str(json).unwrap();
        assert_eq!(probe.items.len(), expected);
    }

    #[test]
    fn given_nested_object_when_decoding_scalar_then_fails() {
        let result: Result<Probe, _> = serde_json::from_str(r#"{"value": {"a": 1}}"#);
        assert!(result.is_err());
    }

    #[rstest]
    #[case("true", true)]
    #[case("TRUE", true)]
    #[case("1", true)]
    #[case("yes", true)]
    #[case("false", false)]
    #[case("0", false)]
    #[case("", false)]
    fn given_bool_text_when_parsing_then_returns_value(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(parse_bool(input).unwrap(), expected);
    }

    #[test]
    fn given_garbage_when_parsing_bool_then_rejects() {
        assert_eq!(
            parse_bool("maybe"),
            Err(DomainError::InvalidBool("maybe".to_string()))
        );
    }
}
