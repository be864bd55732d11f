//! Render output and caller-supplied hooks

use std::sync::Arc;

use serde::Serialize;

use super::Icon;
use super::Record;
use super::Value;

/// Badge tone used by status cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusTone {
    Success,
    Error,
    Warning,
    Processing,
    Default,
}

impl StatusTone {
    /// Maps a numeric status code to a badge tone.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => StatusTone::Success,
            1 => StatusTone::Error,
            2 => StatusTone::Warning,
            3 => StatusTone::Processing,
            _ => StatusTone::Default,
        }
    }
}

/// What a table cell renders as.
///
/// This is the closed set of primitives the table widget knows how to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Renderable {
    /// Plain text.
    Text { text: String },
    /// A coloured tag.
    Tag { label: String, color: Option<String> },
    /// A status badge.
    Status { label: String, tone: StatusTone },
    /// An icon.
    Icon { icon: Icon },
    /// Nothing.
    Empty,
}

impl Renderable {
    /// Creates a text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Renderable::Text { text: text.into() }
    }
}

type RenderFn = dyn Fn(&Value, &Record, usize) -> Renderable + Send + Sync;

/// A caller-supplied cell renderer: `(value, record, row_index) -> Renderable`.
///
/// Hooks are behaviour, not data: cloning one shares the same callable, so
/// copies of a column keep pointing at the caller's function.
#[derive(Clone)]
pub struct RenderHook(Arc<RenderFn>);

impl RenderHook {
    /// Wraps a render function.
    pub fn new(f: impl Fn(&Value, &Record, usize) -> Renderable + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invokes the hook.
    pub fn call(&self, value: &Value, record: &Record, index: usize) -> Renderable {
        (self.0)(value, record, index)
    }

    /// Returns `true` if both hooks share the same callable.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for RenderHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RenderHook(..)")
    }
}

/// A caller-supplied click handler for toolbar buttons.
#[derive(Clone)]
pub struct ClickHandler(Arc<dyn Fn() + Send + Sync>);

impl ClickHandler {
    /// Wraps a click callback.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invokes the handler.
    pub fn call(&self) {
        (self.0)()
    }

    /// Returns `true` if both handlers share the same callable.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ClickHandler(..)")
    }
}
