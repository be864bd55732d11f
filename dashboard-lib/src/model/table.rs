//! Table configuration consumed by the table widget

use serde::Deserialize;
use serde::Serialize;

use super::ButtonPosition;
use super::OperateButton;
use super::Record;
use super::SearchField;
use super::TableColumn;

/// Size of a table or a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Middle,
    Large,
}

/// Row selection control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    #[default]
    Checkbox,
    Radio,
}

/// Row selection settings.
///
/// Leaving `selected_row_keys` unset keeps the widget uncontrolled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSelection {
    #[serde(rename = "type")]
    pub selection_type: SelectionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_row_keys: Option<Vec<String>>,
}

impl RowSelection {
    pub fn new(selection_type: SelectionType) -> Self {
        Self {
            selection_type,
            selected_row_keys: None,
        }
    }
}

/// Pagination state of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page, 1-based.
    pub current: u32,
    pub page_size: u32,
    pub total: u64,
    #[serde(default)]
    pub show_size_changer: bool,
    #[serde(default)]
    pub show_quick_jumper: bool,
}

impl Pagination {
    pub fn new(current: u32, page_size: u32, total: u64) -> Self {
        Self {
            current,
            page_size,
            total,
            show_size_changer: false,
            show_quick_jumper: false,
        }
    }

    /// Index of the first row on the current page.
    pub fn offset(&self) -> u64 {
        u64::from(self.current.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Number of pages needed for `total` rows.
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 10, 0)
    }
}

/// Declarative description of a data table.
///
/// Serializes to the property names a generic data-table widget expects
/// (`columns`, `dataSource`, `pagination`, `rowKey`, `rowSelection`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub columns: Vec<TableColumn>,
    pub data_source: Vec<Record>,
    pub pagination: Pagination,
    pub row_key: String,
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub bordered: bool,
    #[serde(default)]
    pub size: Size,
    #[serde(rename = "rowSelection", default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<RowSelection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_list: Vec<SearchField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operate_list: Vec<OperateButton>,
}

impl TableConfig {
    /// Creates an empty config keyed by `id`.
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            data_source: Vec::new(),
            pagination: Pagination::default(),
            row_key: "id".to_string(),
            loading: false,
            bordered: false,
            size: Size::Middle,
            selection: None,
            search_list: Vec::new(),
            operate_list: Vec::new(),
        }
    }

    /// Returns the column with the given key.
    pub fn column(&self, key: &str) -> Option<&TableColumn> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Search fields shown in the main search bar.
    pub fn visible_search_fields(&self) -> impl Iterator<Item = &SearchField> {
        self.search_list.iter().filter(|f| !f.is_hidden)
    }

    /// Search fields folded into the advanced search panel.
    pub fn advanced_search_fields(&self) -> impl Iterator<Item = &SearchField> {
        self.search_list.iter().filter(|f| f.is_hidden)
    }

    /// Shown toolbar buttons on one side of the toolbar, in declaration order.
    pub fn toolbar_buttons(&self, position: ButtonPosition) -> impl Iterator<Item = &OperateButton> {
        self.operate_list
            .iter()
            .filter(move |b| b.show && b.position == position)
    }

    /// Serializes the config into the widget's JSON shape.
    pub fn to_widget_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Whitelisted top-level config fields that `update` may replace.
///
/// Each set field replaces the current value wholesale.
#[derive(Debug, Clone, Default)]
pub struct TableConfigPatch {
    pub columns: Option<Vec<TableColumn>>,
    pub data_source: Option<Vec<Record>>,
    pub pagination: Option<Pagination>,
    pub row_key: Option<String>,
    pub loading: Option<bool>,
    pub bordered: Option<bool>,
    pub size: Option<Size>,
    pub selection: Option<Option<RowSelection>>,
    pub search_list: Option<Vec<SearchField>>,
    pub operate_list: Option<Vec<OperateButton>>,
}

impl TableConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: Vec<TableColumn>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn data_source(mut self, rows: Vec<Record>) -> Self {
        self.data_source = Some(rows);
        self
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn row_key(mut self, row_key: impl Into<String>) -> Self {
        self.row_key = Some(row_key.into());
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = Some(bordered);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets or clears (`None`) row selection.
    pub fn selection(mut self, selection: Option<RowSelection>) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn search_list(mut self, fields: Vec<SearchField>) -> Self {
        self.search_list = Some(fields);
        self
    }

    pub fn operate_list(mut self, buttons: Vec<OperateButton>) -> Self {
        self.operate_list = Some(buttons);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_none()
            && self.data_source.is_none()
            && self.pagination.is_none()
            && self.row_key.is_none()
            && self.loading.is_none()
            && self.bordered.is_none()
            && self.size.is_none()
            && self.selection.is_none()
            && self.search_list.is_none()
            && self.operate_list.is_none()
    }

    /// Shallow-merges the set fields over `config`.
    pub fn apply(self, config: &mut TableConfig) {
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(rows) = self.data_source {
            config.data_source = rows;
        }
        if let Some(pagination) = self.pagination {
            config.pagination = pagination;
        }
        if let Some(row_key) = self.row_key {
            config.row_key = row_key;
        }
        if let Some(loading) = self.loading {
            config.loading = loading;
        }
        if let Some(bordered) = self.bordered {
            config.bordered = bordered;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(selection) = self.selection {
            config.selection = selection;
        }
        if let Some(fields) = self.search_list {
            config.search_list = fields;
        }
        if let Some(buttons) = self.operate_list {
            config.operate_list = buttons;
        }
    }
}
