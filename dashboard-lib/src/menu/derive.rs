//! Menu derivation from route metadata

use std::collections::HashMap;

use log::debug;

use super::MenuItem;
use super::RouteDescriptor;
use super::RouteMeta;
use crate::model::Icon;

/// Order used for routes that declare none. Sorts last.
pub const DEFAULT_ORDER: i32 = 999;

fn effective_order(meta: &RouteMeta) -> i32 {
    meta.order.unwrap_or(DEFAULT_ORDER)
}

/// Display settings of a synthesized parent menu.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentMenu {
    pub title: String,
    pub icon: Icon,
}

/// Builds the navigation menu from a flat list of routes.
///
/// Routes grouped under a `parent` key become children of a synthesized
/// branch, but only when that parent key has been registered; children of
/// unregistered parents are dropped from the menu.
///
/// # Example
///
/// ```
/// use dashboard_lib::menu::{MenuDeriver, app_routes, normalize_routes};
///
/// let routes = normalize_routes(&app_routes());
/// let menu = MenuDeriver::new().derive(&routes);
///
/// let keys: Vec<_> = menu.iter().map(|item| item.key.as_str()).collect();
/// assert_eq!(keys, ["home", "tableGenerator", "about", "components"]);
/// ```
#[derive(Debug, Clone)]
pub struct MenuDeriver {
    parents: HashMap<String, ParentMenu>,
}

impl Default for MenuDeriver {
    /// The dashboard's registry: `components` → "Components".
    fn default() -> Self {
        Self::empty().with_parent("components", "Components", Icon::Table)
    }
}

impl MenuDeriver {
    /// Creates a deriver with the dashboard's parent menus registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a deriver with no parent menus registered.
    pub fn empty() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Registers the display settings of a parent menu.
    pub fn with_parent(mut self, key: impl Into<String>, title: impl Into<String>, icon: Icon) -> Self {
        self.parents.insert(
            key.into(),
            ParentMenu {
                title: title.into(),
                icon,
            },
        );
        self
    }

    /// Returns the registered parent menu for `key`.
    pub fn parent(&self, key: &str) -> Option<&ParentMenu> {
        self.parents.get(key)
    }

    /// Derives the ordered, at most two-level menu tree.
    pub fn derive(&self, routes: &[RouteDescriptor]) -> Vec<MenuItem> {
        let mut menu_routes: Vec<&RouteDescriptor> = routes
            .iter()
            .filter(|r| r.meta.show_in_menu && !r.meta.title.is_empty())
            .collect();
        menu_routes.sort_by_key(|r| effective_order(&r.meta));

        // First route with a matching name decides an item's order.
        let order_of = |key: &str| {
            menu_routes
                .iter()
                .find(|r| r.name == key)
                .map(|r| effective_order(&r.meta))
                .unwrap_or(DEFAULT_ORDER)
        };

        let mut top_level = Vec::new();
        let mut grouped: Vec<(&str, Vec<MenuItem>)> = Vec::new();

        for route in &menu_routes {
            let item = MenuItem::leaf(
                route.name.clone(),
                route.meta.title.clone(),
                route.meta.icon.clone(),
                route.path.clone(),
            );
            match route.meta.parent.as_deref().filter(|p| !p.is_empty()) {
                Some(parent) => match grouped.iter_mut().find(|(key, _)| *key == parent) {
                    Some((_, children)) => children.push(item),
                    None => grouped.push((parent, vec![item])),
                },
                None => top_level.push(item),
            }
        }

        for (parent_key, mut children) in grouped {
            let Some(parent) = self.parents.get(parent_key) else {
                debug!(
                    "Dropping {} menu item(s) under unregistered parent '{}'",
                    children.len(),
                    parent_key
                );
                continue;
            };
            children.sort_by_key(|item| order_of(&item.key));
            top_level.push(MenuItem::branch(
                parent_key,
                parent.title.clone(),
                Some(parent.icon.clone()),
                children,
            ));
        }

        top_level.sort_by_key(|item| order_of(&item.key));
        top_level
    }
}

/// Derives the menu with the dashboard's default parent registry.
pub fn derive_menu(routes: &[RouteDescriptor]) -> Vec<MenuItem> {
    MenuDeriver::new().derive(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, order: Option<i32>) -> RouteDescriptor {
        let route = RouteDescriptor::new(name, format!("/{}", name))
            .title(name)
            .show_in_menu();
        match order {
            Some(order) => route.order(order),
            None => route,
        }
    }

    fn keys(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.key.as_str()).collect()
    }

    #[test]
    fn test_filters_hidden_and_untitled() {
        let routes = vec![
            leaf("a", Some(1)),
            RouteDescriptor::new("hidden", "/hidden").title("Hidden").order(0),
            RouteDescriptor::new("untitled", "/untitled").show_in_menu(),
        ];
        assert_eq!(keys(&derive_menu(&routes)), ["a"]);
    }

    #[test]
    fn test_missing_order_sorts_last_and_ties_are_stable() {
        let routes = vec![
            leaf("none1", None),
            leaf("five", Some(5)),
            leaf("tie_a", Some(2)),
            leaf("none2", None),
            leaf("tie_b", Some(2)),
        ];
        assert_eq!(
            keys(&derive_menu(&routes)),
            ["tie_a", "tie_b", "five", "none1", "none2"]
        );
    }

    #[test]
    fn test_explicit_sentinel_ties_with_missing_order() {
        let routes = vec![leaf("missing", None), leaf("explicit", Some(DEFAULT_ORDER))];
        assert_eq!(keys(&derive_menu(&routes)), ["missing", "explicit"]);
    }

    #[test]
    fn test_groups_children_under_registered_parent() {
        let routes = vec![
            leaf("top", Some(1)),
            leaf("child_b", Some(2)).parent("components"),
            leaf("child_a", Some(1)).parent("components"),
        ];
        let menu = derive_menu(&routes);
        assert_eq!(keys(&menu), ["top", "components"]);

        let branch = &menu[1];
        assert_eq!(branch.title, "Components");
        assert_eq!(branch.icon, Some(Icon::Table));
        assert!(branch.path.is_none());
        assert_eq!(keys(&branch.children), ["child_a", "child_b"]);
    }

    #[test]
    fn test_drops_children_of_unregistered_parent() {
        let routes = vec![leaf("top", Some(1)), leaf("orphan", Some(1)).parent("settings")];
        let menu = derive_menu(&routes);
        assert_eq!(keys(&menu), ["top"]);
        assert!(menu.iter().all(|item| item.find("orphan").is_none()));
    }

    #[test]
    fn test_branch_uses_parent_route_order_when_visible() {
        let routes = vec![
            leaf("first", Some(1)),
            leaf("group", Some(2)),
            leaf("last", Some(3)),
            leaf("member", Some(9)).parent("group"),
        ];
        let deriver = MenuDeriver::empty().with_parent("group", "Group", Icon::Setting);
        let menu = deriver.derive(&routes);
        // The visible `group` route and the synthesized branch share order 2.
        assert_eq!(keys(&menu), ["first", "group", "group", "last"]);
        assert!(menu[2].is_branch());
    }

    #[test]
    fn test_empty_parent_key_is_top_level() {
        let routes = vec![leaf("a", Some(1)).parent("")];
        let menu = derive_menu(&routes);
        assert_eq!(keys(&menu), ["a"]);
        assert!(!menu[0].is_branch());
    }
}
