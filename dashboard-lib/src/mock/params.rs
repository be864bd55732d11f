//! Search parameters sent by the table's search bar

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ParamError;
use crate::model::Value;

/// Search parameters keyed by search-field key.
///
/// # Example
///
/// ```
/// use dashboard_lib::mock::SearchParams;
///
/// let params = SearchParams::new()
///     .with("keyword", "user1")
///     .with("status", 2);
/// assert_eq!(params.keyword(), Some("user1"));
/// assert_eq!(params.int("status"), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchParams(HashMap<String, Value>);

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter (builder pattern).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a non-empty string parameter.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    /// The free-text `keyword` parameter.
    pub fn keyword(&self) -> Option<&str> {
        self.str("keyword")
    }

    /// Returns a parameter coerced to an integer.
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::to_int)
    }

    /// Returns `true` if the parameter is absent, null or an empty string.
    pub fn is_blank(&self, key: &str) -> bool {
        match self.get(key) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a `key=value` pair into a parameter.
    ///
    /// Integer-looking values become `Value::Int`; everything else stays a
    /// string.
    pub fn parse_pair(raw: &str) -> Result<(String, Value), ParamError> {
        let (key, value) = raw.split_once('=').ok_or_else(|| ParamError::MissingSeparator {
            raw: raw.to_string(),
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ParamError::EmptyKey {
                raw: raw.to_string(),
            });
        }
        let value = match value.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::String(value.to_string()),
        };
        Ok((key.to_string(), value))
    }
}

impl FromIterator<(String, Value)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            SearchParams::parse_pair("status=2").unwrap(),
            ("status".to_string(), Value::Int(2))
        );
        assert_eq!(
            SearchParams::parse_pair("name=a=b").unwrap(),
            ("name".to_string(), Value::from("a=b"))
        );
        assert!(matches!(
            SearchParams::parse_pair("status"),
            Err(ParamError::MissingSeparator { .. })
        ));
        assert!(matches!(
            SearchParams::parse_pair("=x"),
            Err(ParamError::EmptyKey { .. })
        ));
    }

    #[test]
    fn test_blank_and_str() {
        let params = SearchParams::new().with("status", "").with("name", "x");
        assert!(params.is_blank("status"));
        assert!(params.is_blank("missing"));
        assert!(!params.is_blank("name"));
        assert_eq!(params.str("status"), None);
    }
}
