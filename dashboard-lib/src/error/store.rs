//! Table config store error types

/// Errors returned by [`TableConfigStore`](crate::store::TableConfigStore) mutations.
///
/// The store is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No table config has the given id.
    #[error("Table config '{id}' not found")]
    NotFound { id: String },

    /// The table config exists but has no column with the given key.
    #[error("Column '{key}' not found in table config '{id}'")]
    ColumnNotFound { id: String, key: String },

    /// A column with the given key already exists in the table config.
    #[error("Column '{key}' already exists in table config '{id}'")]
    DuplicateColumn { id: String, key: String },
}

impl StoreError {
    /// Creates a new not-found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates a new column-not-found error.
    pub fn column_not_found(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            id: id.into(),
            key: key.into(),
        }
    }

    /// Creates a new duplicate-column error.
    pub fn duplicate_column(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            id: id.into(),
            key: key.into(),
        }
    }

    /// Returns `true` for the not-found variants.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::ColumnNotFound { .. })
    }
}
