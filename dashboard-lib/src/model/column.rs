//! Table column descriptors

use chrono::DateTime;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use super::Record;
use super::RenderHook;
use super::Renderable;
use super::StatusTone;
use super::Value;

/// Semantic type of a column, driving how its cells render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnType {
    #[default]
    Text,
    Tag,
    Date,
    DateTime,
    Select,
    Status,
    Custom,
}

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A value-to-label mapping used by select, status and tag columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnOption {
    pub label: String,
    pub value: Value,
}

impl ColumnOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A column of a table configuration.
///
/// # Example
///
/// ```
/// use dashboard_lib::model::{Align, ColumnType, TableColumn};
///
/// let column = TableColumn::new("age", "Age", ColumnType::Text)
///     .width(80)
///     .align(Align::Center)
///     .sortable();
/// assert_eq!(column.data_index, "age");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    /// Unique key within a table configuration.
    pub key: String,

    /// Header text.
    pub title: String,

    /// Name of the record field this column displays.
    pub data_index: String,

    /// Semantic type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,

    #[serde(default)]
    pub sorter: bool,

    /// Value-to-label options for select, status and tag columns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ColumnOption>,

    /// Tag colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Custom cell renderer.
    #[serde(skip)]
    pub render: Option<RenderHook>,
}

impl TableColumn {
    /// Creates a column whose `data_index` equals its key.
    pub fn new(key: impl Into<String>, title: impl Into<String>, column_type: ColumnType) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
            column_type,
            width: None,
            align: None,
            sorter: false,
            options: Vec::new(),
            color: None,
            render: None,
        }
    }

    pub fn data_index(mut self, data_index: impl Into<String>) -> Self {
        self.data_index = data_index.into();
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sorter = true;
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = ColumnOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Attaches a custom renderer.
    pub fn render(mut self, hook: RenderHook) -> Self {
        self.render = Some(hook);
        self
    }

    /// Returns the label of the option matching `value`, if any.
    pub fn option_label(&self, value: &Value) -> Option<&str> {
        self.options
            .iter()
            .find(|opt| option_matches(&opt.value, value))
            .map(|opt| opt.label.as_str())
    }

    /// Renders the cell of this column for `record`.
    ///
    /// A custom hook wins; otherwise the column type decides.
    pub fn render_cell(&self, record: &Record, index: usize) -> Renderable {
        let value = record.value(&self.data_index);
        if let Some(hook) = &self.render {
            return hook.call(&value, record, index);
        }
        if value.is_null() {
            return Renderable::Empty;
        }

        match self.column_type {
            ColumnType::Text | ColumnType::Custom => Renderable::text(value.to_string()),
            ColumnType::Tag => Renderable::Tag {
                label: self.label_or_raw(&value),
                color: self.color.clone(),
            },
            ColumnType::Select => Renderable::text(self.label_or_raw(&value)),
            ColumnType::Status => Renderable::Status {
                label: self.label_or_raw(&value),
                tone: value
                    .to_int()
                    .map(StatusTone::from_code)
                    .unwrap_or(StatusTone::Default),
            },
            ColumnType::Date => Renderable::text(format_timestamp(&value, "%Y-%m-%d")),
            ColumnType::DateTime => Renderable::text(format_timestamp(&value, "%Y-%m-%d %H:%M:%S")),
        }
    }

    fn label_or_raw(&self, value: &Value) -> String {
        self.option_label(value)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string())
    }
}

/// Options declared as numbers still match string cells and vice versa.
fn option_matches(option: &Value, value: &Value) -> bool {
    if option == value {
        return true;
    }
    match (option.to_int(), value.to_int()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Formats RFC 3339 or `YYYY-MM-DD HH:MM:SS` strings; anything else is shown raw.
fn format_timestamp(value: &Value, format: &str) -> String {
    let Some(raw) = value.as_str() else {
        return value.to_string();
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(format).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.format(format).to_string();
    }
    raw.to_string()
}

/// Whitelisted column fields that `update_column` may change.
///
/// The key is not patchable.
#[derive(Debug, Clone, Default)]
pub struct ColumnPatch {
    pub title: Option<String>,
    pub data_index: Option<String>,
    pub column_type: Option<ColumnType>,
    pub width: Option<u32>,
    pub align: Option<Align>,
    pub sorter: Option<bool>,
    pub options: Option<Vec<ColumnOption>>,
    pub color: Option<String>,
    pub render: Option<RenderHook>,
}

impl ColumnPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn data_index(mut self, data_index: impl Into<String>) -> Self {
        self.data_index = Some(data_index.into());
        self
    }

    pub fn column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn sorter(mut self, sorter: bool) -> Self {
        self.sorter = Some(sorter);
        self
    }

    pub fn options(mut self, options: Vec<ColumnOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn render(mut self, hook: RenderHook) -> Self {
        self.render = Some(hook);
        self
    }

    /// Returns `true` if the patch sets no field.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.data_index.is_none()
            && self.column_type.is_none()
            && self.width.is_none()
            && self.align.is_none()
            && self.sorter.is_none()
            && self.options.is_none()
            && self.color.is_none()
            && self.render.is_none()
    }

    /// Merges the set fields over `column`, leaving the rest untouched.
    pub fn apply(self, column: &mut TableColumn) {
        if let Some(title) = self.title {
            column.title = title;
        }
        if let Some(data_index) = self.data_index {
            column.data_index = data_index;
        }
        if let Some(column_type) = self.column_type {
            column.column_type = column_type;
        }
        if let Some(width) = self.width {
            column.width = Some(width);
        }
        if let Some(align) = self.align {
            column.align = Some(align);
        }
        if let Some(sorter) = self.sorter {
            column.sorter = sorter;
        }
        if let Some(options) = self.options {
            column.options = options;
        }
        if let Some(color) = self.color {
            column.color = Some(color);
        }
        if let Some(render) = self.render {
            column.render = Some(render);
        }
    }
}
