//! Search parameter parsing errors

/// Error parsing a `key=value` search parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    /// The input has no `=` separator.
    #[error("Invalid search parameter '{raw}': expected key=value")]
    MissingSeparator { raw: String },

    /// The key part is empty.
    #[error("Invalid search parameter '{raw}': empty key")]
    EmptyKey { raw: String },
}
