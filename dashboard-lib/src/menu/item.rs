//! Menu tree nodes

use serde::Deserialize;
use serde::Serialize;

use crate::model::Icon;

/// A node of the navigation menu.
///
/// Leaves carry a `path`; branches carry `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Creates a navigable leaf.
    pub fn leaf(
        key: impl Into<String>,
        title: impl Into<String>,
        icon: Option<Icon>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            icon,
            path: Some(path.into()),
            children: Vec::new(),
        }
    }

    /// Creates a branch grouping `children`.
    pub fn branch(
        key: impl Into<String>,
        title: impl Into<String>,
        icon: Option<Icon>,
        children: Vec<MenuItem>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            icon,
            path: None,
            children,
        }
    }

    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// Finds the first node with `key` in this subtree, depth-first.
    pub fn find(&self, key: &str) -> Option<&MenuItem> {
        if self.key == key {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(key))
    }

    /// Collects all navigable leaves of this subtree in menu order.
    pub fn leaves(&self) -> Vec<&MenuItem> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }
}

fn collect_leaves<'a>(item: &'a MenuItem, out: &mut Vec<&'a MenuItem>) {
    if item.path.is_some() {
        out.push(item);
    }
    for child in &item.children {
        collect_leaves(child, out);
    }
}
