//! Default table template

use log::info;

use crate::model::Align;
use crate::model::ButtonKind;
use crate::model::ButtonPosition;
use crate::model::ClickHandler;
use crate::model::ColumnOption;
use crate::model::ColumnType;
use crate::model::Icon;
use crate::model::OperateButton;
use crate::model::Pagination;
use crate::model::Record;
use crate::model::RowSelection;
use crate::model::SearchField;
use crate::model::SearchFieldKind;
use crate::model::SearchOption;
use crate::model::SelectionType;
use crate::model::Size;
use crate::model::TableColumn;
use crate::model::TableConfig;

pub(crate) const DEPARTMENTS: [&str; 4] = ["Engineering", "Product", "Design", "Operations"];

/// Click handlers of the template's toolbar buttons.
///
/// Created once per store; every config built from the template shares them.
#[derive(Debug, Clone)]
pub struct TemplateHandlers {
    pub add: ClickHandler,
    pub batch_delete: ClickHandler,
    pub export: ClickHandler,
    pub settings: ClickHandler,
}

impl Default for TemplateHandlers {
    fn default() -> Self {
        Self {
            add: ClickHandler::new(|| info!("Add user clicked")),
            batch_delete: ClickHandler::new(|| info!("Batch delete clicked")),
            export: ClickHandler::new(|| info!("Export data clicked")),
            settings: ClickHandler::new(|| info!("Settings clicked")),
        }
    }
}

/// Rows shown by a freshly created table.
pub fn sample_rows() -> Vec<Record> {
    vec![
        Record::new("1")
            .set("name", "Zhang San")
            .set("age", 25)
            .set("email", "zhangsan@example.com")
            .set("status", 0)
            .set("salary", 8000)
            .set("createTime", "2024-01-15T10:30:00Z")
            .set("department", "Engineering")
            .set("level", "Senior"),
        Record::new("2")
            .set("name", "Li Si")
            .set("age", 30)
            .set("email", "lisi@example.com")
            .set("status", 1)
            .set("salary", 12000)
            .set("createTime", "2024-01-20T14:20:00Z")
            .set("department", "Product")
            .set("level", "Intermediate"),
        Record::new("3")
            .set("name", "Wang Wu")
            .set("age", 28)
            .set("email", "wangwu@example.com")
            .set("status", 3)
            .set("salary", 9500)
            .set("createTime", "2024-01-25T09:15:00Z")
            .set("department", "Design")
            .set("level", "Junior"),
    ]
}

fn status_options() -> Vec<ColumnOption> {
    vec![
        ColumnOption::new("Active", 0),
        ColumnOption::new("Inactive", 1),
        ColumnOption::new("Pending", 2),
    ]
}

/// The eight columns of the template.
pub fn default_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("name", "Name", ColumnType::Text)
            .width(120)
            .sortable(),
        TableColumn::new("age", "Age", ColumnType::Text)
            .width(80)
            .align(Align::Center)
            .sortable(),
        TableColumn::new("email", "Email", ColumnType::Text).width(200),
        TableColumn::new("status", "Status", ColumnType::Status)
            .width(100)
            .align(Align::Center)
            .options(status_options()),
        TableColumn::new("salary", "Salary", ColumnType::Text)
            .width(120)
            .align(Align::Right)
            .sortable(),
        TableColumn::new("createTime", "Created", ColumnType::DateTime).width(160),
        TableColumn::new("department", "Department", ColumnType::Select)
            .width(120)
            .options(DEPARTMENTS.iter().map(|d| ColumnOption::new(*d, *d))),
        TableColumn::new("level", "Level", ColumnType::Tag)
            .width(100)
            .align(Align::Center)
            .color("blue"),
    ]
}

/// Search bar of the template; department and creation time are advanced.
pub fn default_search_list() -> Vec<SearchField> {
    vec![
        SearchField::new(SearchFieldKind::Input, "name", "Name")
            .placeholder("Enter a name")
            .width(200),
        SearchField::new(SearchFieldKind::Select, "status", "Status")
            .placeholder("Select a status")
            .width(220)
            .options([
                SearchOption::new("0", "Active"),
                SearchOption::new("1", "Inactive"),
                SearchOption::new("2", "Pending"),
            ]),
        SearchField::new(SearchFieldKind::Select, "department", "Department")
            .placeholder("Select a department")
            .hidden()
            .options(DEPARTMENTS.iter().map(|d| SearchOption::new(*d, *d))),
        SearchField::new(SearchFieldKind::Date, "createTime", "Created")
            .placeholder("Select a date")
            .width(200)
            .hidden(),
    ]
}

/// Toolbar of the template, wired to `handlers`.
pub fn default_operate_list(handlers: &TemplateHandlers) -> Vec<OperateButton> {
    vec![
        OperateButton::new("Add user")
            .kind(ButtonKind::Primary)
            .size(Size::Middle)
            .icon(Icon::Plus)
            .position(ButtonPosition::Left)
            .on_click(handlers.add.clone()),
        OperateButton::new("Batch delete")
            .size(Size::Middle)
            .danger()
            .icon(Icon::Delete)
            .position(ButtonPosition::Left)
            .disabled()
            .on_click(handlers.batch_delete.clone()),
        OperateButton::new("Export data")
            .size(Size::Small)
            .icon(Icon::FileText)
            .position(ButtonPosition::Right)
            .on_click(handlers.export.clone()),
        OperateButton::new("Settings")
            .size(Size::Small)
            .icon(Icon::Setting)
            .position(ButtonPosition::Right)
            .on_click(handlers.settings.clone()),
    ]
}

/// Assembles the full template for the given page state.
pub fn default_config(
    rows: &[Record],
    current_page: u32,
    page_size: u32,
    handlers: &TemplateHandlers,
) -> TableConfig {
    let mut pagination = Pagination::new(current_page, page_size, rows.len() as u64);
    pagination.show_size_changer = true;
    pagination.show_quick_jumper = true;

    TableConfig {
        columns: default_columns(),
        data_source: rows.to_vec(),
        pagination,
        row_key: "id".to_string(),
        loading: false,
        bordered: true,
        size: Size::Middle,
        selection: Some(RowSelection::new(SelectionType::Checkbox)),
        search_list: default_search_list(),
        operate_list: default_operate_list(handlers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_shape() {
        let config = default_config(&sample_rows(), 1, 10, &TemplateHandlers::default());
        assert_eq!(config.columns.len(), 8);
        assert_eq!(config.data_source.len(), 3);
        assert_eq!(config.pagination.total, 3);
        assert_eq!(config.search_list.len(), 4);
        assert_eq!(config.operate_list.len(), 4);
        assert_eq!(config.visible_search_fields().count(), 2);
        assert_eq!(config.advanced_search_fields().count(), 2);
    }

    #[test]
    fn test_column_keys_are_unique() {
        let columns = default_columns();
        for (i, column) in columns.iter().enumerate() {
            assert!(columns[i + 1..].iter().all(|c| c.key != column.key));
        }
    }

    #[test]
    fn test_toolbar_sides() {
        let config = default_config(&sample_rows(), 1, 10, &TemplateHandlers::default());
        let left: Vec<_> = config
            .toolbar_buttons(ButtonPosition::Left)
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(left, ["Add user", "Batch delete"]);
        assert_eq!(config.toolbar_buttons(ButtonPosition::Right).count(), 2);
    }
}
