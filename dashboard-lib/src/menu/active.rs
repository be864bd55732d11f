//! Selected/open state of the menu for a path

use serde::Serialize;

use super::MenuItem;

/// Keys the menu widget should highlight and expand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSelection {
    pub selected_keys: Vec<String>,
    /// Ancestor branches of the selection, innermost first.
    pub open_keys: Vec<String>,
}

impl MenuSelection {
    pub fn is_empty(&self) -> bool {
        self.selected_keys.is_empty() && self.open_keys.is_empty()
    }
}

/// Resolves which item matches `current_path` and which branches enclose it.
///
/// The search is depth-first, visiting an item's children before its later
/// siblings, and stops at the first exact path match.
pub fn resolve_active(current_path: &str, items: &[MenuItem]) -> MenuSelection {
    let mut selection = MenuSelection::default();
    find_selected(current_path, items, None, &mut selection);
    selection
}

fn find_selected(
    current_path: &str,
    items: &[MenuItem],
    parent_key: Option<&str>,
    selection: &mut MenuSelection,
) -> bool {
    for item in items {
        if item.path.as_deref() == Some(current_path) {
            selection.selected_keys.push(item.key.clone());
        } else if !find_selected(current_path, &item.children, Some(&item.key), selection) {
            continue;
        }

        if let Some(parent) = parent_key {
            selection.open_keys.push(parent.to_string());
        }
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Vec<MenuItem> {
        vec![
            MenuItem::leaf("home", "Dashboard", None, "/"),
            MenuItem::leaf("tableGenerator", "Table Generator", None, "/table-generator"),
            MenuItem::branch(
                "components",
                "Components",
                None,
                vec![MenuItem::leaf("components-table", "Table", None, "/component/table")],
            ),
        ]
    }

    #[test]
    fn test_top_level_leaf() {
        let selection = resolve_active("/table-generator", &menu());
        assert_eq!(selection.selected_keys, ["tableGenerator"]);
        assert!(selection.open_keys.is_empty());
    }

    #[test]
    fn test_nested_leaf_opens_branch() {
        let selection = resolve_active("/component/table", &menu());
        assert_eq!(selection.selected_keys, ["components-table"]);
        assert_eq!(selection.open_keys, ["components"]);
    }

    #[test]
    fn test_no_match() {
        assert!(resolve_active("/missing", &menu()).is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let items = vec![
            MenuItem::branch(
                "group",
                "Group",
                None,
                vec![MenuItem::leaf("inner", "Inner", None, "/dup")],
            ),
            MenuItem::leaf("outer", "Outer", None, "/dup"),
        ];
        let selection = resolve_active("/dup", &items);
        assert_eq!(selection.selected_keys, ["inner"]);
        assert_eq!(selection.open_keys, ["group"]);
    }

    #[test]
    fn test_deep_nesting_lists_ancestors_innermost_first() {
        let items = vec![MenuItem::branch(
            "outer",
            "Outer",
            None,
            vec![MenuItem::branch(
                "inner",
                "Inner",
                None,
                vec![MenuItem::leaf("leaf", "Leaf", None, "/deep")],
            )],
        )];
        let selection = resolve_active("/deep", &items);
        assert_eq!(selection.open_keys, ["inner", "outer"]);
    }
}
