//! Toolbar operate buttons

use serde::Deserialize;
use serde::Serialize;

use super::ClickHandler;
use super::Icon;
use super::Size;

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Primary,
    #[default]
    Default,
    Dashed,
    Link,
    Text,
}

/// Which side of the toolbar a button sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonPosition {
    #[default]
    Left,
    Right,
}

/// A toolbar button above a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperateButton {
    pub label: String,

    #[serde(rename = "type", default)]
    pub kind: ButtonKind,

    #[serde(default)]
    pub size: Size,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    #[serde(default)]
    pub position: ButtonPosition,

    #[serde(default)]
    pub danger: bool,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub loading: bool,

    #[serde(default = "default_show")]
    pub show: bool,

    /// Permission tag checked by the host application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,

    #[serde(skip)]
    pub on_click: Option<ClickHandler>,
}

fn default_show() -> bool {
    true
}

impl OperateButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ButtonKind::Default,
            size: Size::Middle,
            icon: None,
            position: ButtonPosition::Left,
            danger: false,
            disabled: false,
            loading: false,
            show: true,
            permission: None,
            on_click: None,
        }
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn position(mut self, position: ButtonPosition) -> Self {
        self.position = position;
        self
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    pub fn on_click(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Fires the click handler unless the button is hidden, disabled or loading.
    ///
    /// Returns `true` if a handler ran.
    pub fn click(&self) -> bool {
        if !self.show || self.disabled || self.loading {
            return false;
        }
        match &self.on_click {
            Some(handler) => {
                handler.call();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;

    fn counting_button() -> (OperateButton, Arc<AtomicUsize>) {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let button = OperateButton::new("Add").on_click(ClickHandler::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        (button, clicks)
    }

    #[test]
    fn test_click_runs_handler() {
        let (button, clicks) = counting_button();
        assert!(button.click());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_button_ignores_click() {
        let (button, clicks) = counting_button();
        let button = button.disabled();
        assert!(!button.click());
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_show_defaults_to_true_when_deserializing() {
        let button: OperateButton = serde_json::from_str(r#"{"label":"Export"}"#).unwrap();
        assert!(button.show);
        assert_eq!(button.kind, ButtonKind::Default);
    }
}
