//! Toolbar button UI state

use std::collections::HashMap;

/// Loading/disabled flags of a toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub loading: bool,
    pub disabled: bool,
}

/// Partial update of a [`ButtonState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonStatePatch {
    pub loading: Option<bool>,
    pub disabled: Option<bool>,
}

impl ButtonStatePatch {
    pub fn loading(loading: bool) -> Self {
        Self {
            loading: Some(loading),
            disabled: None,
        }
    }

    pub fn disabled(disabled: bool) -> Self {
        Self {
            loading: None,
            disabled: Some(disabled),
        }
    }
}

/// Per-key button states; unknown keys read as the default state.
#[derive(Debug, Default)]
pub(crate) struct ButtonStates {
    states: HashMap<String, ButtonState>,
}

impl ButtonStates {
    pub fn set(&mut self, key: &str, patch: ButtonStatePatch) {
        let state = self.states.entry(key.to_string()).or_default();
        if let Some(loading) = patch.loading {
            state.loading = loading;
        }
        if let Some(disabled) = patch.disabled {
            state.disabled = disabled;
        }
    }

    pub fn get(&self, key: &str) -> ButtonState {
        self.states.get(key).copied().unwrap_or_default()
    }
}
