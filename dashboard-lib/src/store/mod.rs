//! Registry of named table configurations
//!
//! [`TableConfigStore`] owns every [`TableGeneratorConfig`] of a session.
//! It is a plain value: create one per session (or per test) and pass it to
//! whatever needs it. Mutations take `&mut self`; there is no interior
//! locking.
//!
//! # Example
//!
//! ```
//! use dashboard_lib::model::ColumnPatch;
//! use dashboard_lib::store::TableConfigStore;
//!
//! let mut store = TableConfigStore::new();
//! let created = store.create("Users", Some("All registered users"));
//!
//! store.update_column(&created.id, "age", ColumnPatch::new().width(120))?;
//!
//! let stored = store.get(&created.id).unwrap();
//! assert_eq!(stored.config.column("age").unwrap().width, Some(120));
//! # Ok::<(), dashboard_lib::error::StoreError>(())
//! ```

mod buttons;
mod defaults;
mod id;

pub use buttons::ButtonState;
pub use buttons::ButtonStatePatch;
pub use defaults::*;
pub use id::IdGenerator;

use chrono::Utc;
use log::debug;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::model::ColumnPatch;
use crate::model::Record;
use crate::model::TableColumn;
use crate::model::TableConfig;
use crate::model::TableConfigPatch;
use crate::model::TableGeneratorConfig;

use buttons::ButtonStates;

/// In-memory registry of table configurations.
#[derive(Debug)]
pub struct TableConfigStore {
    entries: Vec<TableGeneratorConfig>,
    current: Option<String>,
    ids: IdGenerator,
    handlers: TemplateHandlers,
    sample_rows: Vec<Record>,
    current_page: u32,
    page_size: u32,
    selected_row_keys: Vec<String>,
    button_states: ButtonStates,
}

impl Default for TableConfigStore {
    fn default() -> Self {
        Self::with_config(StoreConfig::default())
    }
}

impl TableConfigStore {
    /// Creates an empty store with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given settings.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            ids: IdGenerator::new(),
            handlers: TemplateHandlers::default(),
            sample_rows: sample_rows(),
            current_page: config.current_page,
            page_size: config.page_size,
            selected_row_keys: Vec::new(),
            button_states: ButtonStates::default(),
        }
    }

    /// Replaces the toolbar handlers used by subsequently created configs.
    pub fn with_handlers(mut self, handlers: TemplateHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    // =========================================================================
    // Template
    // =========================================================================

    /// Builds the default configuration for a new table.
    ///
    /// Rows are fresh copies; toolbar handlers are shared with every other
    /// config built by this store.
    pub fn create_default_config(&self) -> TableConfig {
        default_config(
            &self.sample_rows,
            self.current_page,
            self.page_size,
            &self.handlers,
        )
    }

    /// The store's toolbar handlers.
    pub fn handlers(&self) -> &TemplateHandlers {
        &self.handlers
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Creates a config from the default template and makes it current.
    ///
    /// Returns an owned copy; changing it does not affect the store.
    pub fn create(&mut self, name: impl Into<String>, description: Option<&str>) -> TableGeneratorConfig {
        let now = Utc::now();
        let entry = TableGeneratorConfig {
            id: self.ids.next_id(),
            name: name.into(),
            description: description.map(str::to_string),
            config: self.create_default_config(),
            created_at: now,
            updated_at: now,
        };
        debug!("Created table config '{}' ({})", entry.name, entry.id);

        self.current = Some(entry.id.clone());
        self.entries.push(entry.clone());
        entry
    }

    /// Returns the config with the given id.
    pub fn get(&self, id: &str) -> Option<&TableGeneratorConfig> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All configs in creation order.
    pub fn list(&self) -> &[TableGeneratorConfig] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shallow-merges `patch` over the config's top-level fields.
    pub fn update(&mut self, id: &str, patch: TableConfigPatch) -> Result<(), StoreError> {
        let entry = self.entry_mut(id)?;
        if patch.is_empty() {
            return Ok(());
        }
        patch.apply(&mut entry.config);
        entry.touch();
        debug!("Updated table config {}", id);
        Ok(())
    }

    /// Appends a column. Column keys must be unique within a config.
    pub fn add_column(&mut self, id: &str, column: TableColumn) -> Result<(), StoreError> {
        let entry = self.entry_mut(id)?;
        if entry.config.columns.iter().any(|c| c.key == column.key) {
            return Err(StoreError::duplicate_column(id, column.key));
        }
        debug!("Adding column '{}' to table config {}", column.key, id);
        entry.config.columns.push(column);
        entry.touch();
        Ok(())
    }

    /// Removes every column whose key is `column_key`, returning them in order.
    ///
    /// A bulk [`update`](Self::update) can leave duplicate keys behind; all of
    /// them go.
    pub fn remove_column(&mut self, id: &str, column_key: &str) -> Result<Vec<TableColumn>, StoreError> {
        let entry = self.entry_mut(id)?;
        let (removed, kept): (Vec<_>, Vec<_>) = entry
            .config
            .columns
            .drain(..)
            .partition(|c| c.key == column_key);
        entry.config.columns = kept;
        if removed.is_empty() {
            return Err(StoreError::column_not_found(id, column_key));
        }
        entry.touch();
        debug!(
            "Removed {} column(s) '{}' from table config {}",
            removed.len(),
            column_key,
            id
        );
        Ok(removed)
    }

    /// Merges `patch` over the column with `column_key`.
    pub fn update_column(&mut self, id: &str, column_key: &str, patch: ColumnPatch) -> Result<(), StoreError> {
        let entry = self.entry_mut(id)?;
        let column = entry
            .config
            .columns
            .iter_mut()
            .find(|c| c.key == column_key)
            .ok_or_else(|| StoreError::column_not_found(id, column_key))?;
        if patch.is_empty() {
            return Ok(());
        }
        patch.apply(column);
        entry.touch();
        debug!("Updated column '{}' of table config {}", column_key, id);
        Ok(())
    }

    /// Removes a config, clearing the current selection if it pointed at it.
    ///
    /// Deleting an unknown id does nothing and returns `None`.
    pub fn delete(&mut self, id: &str) -> Option<TableGeneratorConfig> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(index);
        if self.current.as_deref() == Some(id) {
            self.current = None;
        }
        debug!("Deleted table config {}", id);
        Some(removed)
    }

    fn entry_mut(&mut self, id: &str) -> Result<&mut TableGeneratorConfig, StoreError> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found(id))
    }

    // =========================================================================
    // Current selection
    // =========================================================================

    /// The config being edited, if any.
    pub fn current(&self) -> Option<&TableGeneratorConfig> {
        let id = self.current.as_deref()?;
        self.get(id)
    }

    /// Makes an existing config current.
    pub fn set_current(&mut self, id: &str) -> Result<(), StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::not_found(id));
        }
        self.current = Some(id.to_string());
        Ok(())
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    // =========================================================================
    // Table UI state
    // =========================================================================

    /// Sets the page state new default configs start from.
    pub fn update_pagination(&mut self, page: u32, page_size: u32) {
        self.current_page = page;
        self.page_size = page_size;
    }

    /// Current page and page size.
    pub fn pagination(&self) -> (u32, u32) {
        (self.current_page, self.page_size)
    }

    /// Records the rows the user has selected in the table.
    pub fn select_rows(&mut self, keys: impl IntoIterator<Item = String>) {
        self.selected_row_keys = keys.into_iter().collect();
    }

    pub fn selected_row_keys(&self) -> &[String] {
        &self.selected_row_keys
    }

    /// Updates a toolbar button's loading/disabled flags.
    pub fn set_button_state(&mut self, key: &str, patch: ButtonStatePatch) {
        self.button_states.set(key, patch);
    }

    /// Returns a button's flags; unknown buttons are neither loading nor disabled.
    pub fn button_state(&self, key: &str) -> ButtonState {
        self.button_states.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_becomes_current() {
        let mut store = TableConfigStore::new();
        let first = store.create("First", None);
        let second = store.create("Second", None);

        assert_ne!(first.id, second.id);
        assert_eq!(store.current().map(|c| c.id.as_str()), Some(second.id.as_str()));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_current_clears_pointer() {
        let mut store = TableConfigStore::new();
        let created = store.create("Only", None);

        assert!(store.delete(&created.id).is_some());
        assert!(store.current().is_none());
        assert!(store.delete(&created.id).is_none());
    }

    #[test]
    fn test_delete_other_keeps_current() {
        let mut store = TableConfigStore::new();
        let first = store.create("First", None);
        let second = store.create("Second", None);

        store.delete(&first.id);
        assert_eq!(store.current().map(|c| c.id.as_str()), Some(second.id.as_str()));
    }

    #[test]
    fn test_set_current_unknown() {
        let mut store = TableConfigStore::new();
        assert_eq!(store.set_current("nope"), Err(StoreError::not_found("nope")));
    }

    #[test]
    fn test_pagination_feeds_template() {
        let mut store = TableConfigStore::new();
        store.update_pagination(3, 50);
        let config = store.create_default_config();
        assert_eq!(config.pagination.current, 3);
        assert_eq!(config.pagination.page_size, 50);
        assert_eq!(store.pagination(), (3, 50));
    }

    #[test]
    fn test_button_state_defaults_and_merges() {
        let mut store = TableConfigStore::new();
        assert_eq!(store.button_state("export"), ButtonState::default());

        store.set_button_state("export", ButtonStatePatch::loading(true));
        store.set_button_state("export", ButtonStatePatch::disabled(true));
        assert_eq!(
            store.button_state("export"),
            ButtonState {
                loading: true,
                disabled: true
            }
        );
    }

    #[test]
    fn test_select_rows() {
        let mut store = TableConfigStore::new();
        store.select_rows(vec!["1".to_string(), "3".to_string()]);
        assert_eq!(store.selected_row_keys(), ["1", "3"]);
    }

    #[test]
    fn test_remove_column_drops_every_duplicate() {
        let mut store = TableConfigStore::new();
        let created = store.create("T", None);
        let mut columns = created.config.columns.clone();
        columns.push(TableColumn::new("age", "Age (copy)", crate::model::ColumnType::Text));
        store
            .update(&created.id, TableConfigPatch::new().columns(columns))
            .unwrap();

        let removed = store.remove_column(&created.id, "age").unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[1].title, "Age (copy)");

        let stored = store.get(&created.id).unwrap();
        assert!(stored.config.column("age").is_none());
        assert_eq!(stored.config.columns.len(), 7);
        assert_eq!(stored.config.columns[1].key, "email");
    }

    #[test]
    fn test_empty_patch_does_not_touch() {
        let mut store = TableConfigStore::new();
        let created = store.create("T", None);
        store.update(&created.id, TableConfigPatch::new()).unwrap();
        assert_eq!(store.get(&created.id).unwrap().updated_at, created.updated_at);
    }
}
