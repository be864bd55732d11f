//! Search field descriptors for the table toolbar

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// Kind of input a search field renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchFieldKind {
    Input,
    Select,
    Date,
    Custom,
    Search,
}

/// A selectable entry of a select search field.
///
/// Deserializes from `{ "key", "value" }` or from a bare string, which is
/// used as both key and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSearchOption")]
pub struct SearchOption {
    pub key: String,
    pub value: String,
}

impl SearchOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<&str> for SearchOption {
    fn from(option: &str) -> Self {
        Self::new(option, option)
    }
}

impl From<String> for SearchOption {
    fn from(option: String) -> Self {
        Self::new(option.clone(), option)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSearchOption {
    Bare(String),
    Pair { key: String, value: String },
}

impl From<RawSearchOption> for SearchOption {
    fn from(raw: RawSearchOption) -> Self {
        match raw {
            RawSearchOption::Bare(option) => option.into(),
            RawSearchOption::Pair { key, value } => Self::new(key, value),
        }
    }
}

/// A field of the search bar above a table.
///
/// Hidden fields belong to the collapsed "advanced search" panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchField {
    #[serde(rename = "type")]
    pub kind: SearchFieldKind,

    /// Search parameter key sent to the data service.
    pub key: String,

    /// Display label.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default)]
    pub is_hidden: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SearchOption>,
}

impl SearchField {
    pub fn new(kind: SearchFieldKind, key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            name: name.into(),
            placeholder: None,
            width: None,
            is_hidden: false,
            default_value: None,
            options: Vec::new(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Moves the field into the advanced search panel.
    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SearchOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_accept_bare_strings() {
        let field: SearchField = serde_json::from_str(
            r#"{"type":"select","key":"level","name":"Level","options":["P5",{"key":"p6","value":"P6"}]}"#,
        )
        .unwrap();

        assert_eq!(
            field.options,
            [SearchOption::new("P5", "P5"), SearchOption::new("p6", "P6")]
        );
    }

    #[test]
    fn test_bare_option_round_trips() {
        let option = SearchOption::from("Engineering");
        let json = serde_json::to_string(&option).unwrap();
        let back: SearchOption = serde_json::from_str(&json).unwrap();
        assert_eq!(back, option);
    }
}
