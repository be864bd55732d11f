//! Route descriptors

use serde::Deserialize;
use serde::Serialize;

use crate::model::Icon;

/// Menu-related metadata attached to a route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    /// Menu label. Routes without a title never show in the menu.
    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    #[serde(default)]
    pub show_in_menu: bool,

    /// Sort key; lower comes first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    /// Key of the parent menu this route is grouped under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// A route as registered with the router.
///
/// # Example
///
/// ```
/// use dashboard_lib::menu::RouteDescriptor;
/// use dashboard_lib::model::Icon;
///
/// let route = RouteDescriptor::new("about", "/about")
///     .title("About")
///     .icon(Icon::InfoCircle)
///     .show_in_menu()
///     .order(3);
/// assert_eq!(route.meta.order, Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub meta: RouteMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// Nested routes; their paths may be relative to this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            meta: RouteMeta::default(),
            redirect: None,
            children: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = title.into();
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.meta.icon = Some(icon);
        self
    }

    pub fn show_in_menu(mut self) -> Self {
        self.meta.show_in_menu = true;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.meta.order = Some(order);
        self
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.meta.parent = Some(parent.into());
        self
    }

    pub fn redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    pub fn child(mut self, route: RouteDescriptor) -> Self {
        self.children.push(route);
        self
    }
}

/// Flattens nested routes into absolute-path routes, parents first.
///
/// Child paths starting with `/` are kept as-is; relative ones are joined
/// onto their parent's path. The returned routes have no children.
pub fn normalize_routes(routes: &[RouteDescriptor]) -> Vec<RouteDescriptor> {
    let mut out = Vec::new();
    for route in routes {
        flatten_into(route, None, &mut out);
    }
    out
}

fn flatten_into(route: &RouteDescriptor, base: Option<&str>, out: &mut Vec<RouteDescriptor>) {
    let path = match base {
        Some(base) => join_path(base, &route.path),
        None => route.path.clone(),
    };

    let mut flat = route.clone();
    flat.path = path.clone();
    flat.children = Vec::new();
    out.push(flat);

    for child in &route.children {
        flatten_into(child, Some(&path), out);
    }
}

fn join_path(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return if base.is_empty() { "/".to_string() } else { base.to_string() };
    }
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/component", "table"), "/component/table");
        assert_eq!(join_path("/component/", "table"), "/component/table");
        assert_eq!(join_path("/", "about"), "/about");
        assert_eq!(join_path("/component", "/abs"), "/abs");
        assert_eq!(join_path("/component", ""), "/component");
    }

    #[test]
    fn test_normalize_flattens_parents_first() {
        let routes = vec![
            RouteDescriptor::new("components", "/component")
                .child(RouteDescriptor::new("components-table", "table"))
                .child(RouteDescriptor::new("components-form", "form")),
        ];
        let flat = normalize_routes(&routes);
        let paths: Vec<_> = flat.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["/component", "/component/table", "/component/form"]);
        assert!(flat.iter().all(|r| r.children.is_empty()));
    }

    #[test]
    fn test_meta_deserializes_camel_case() {
        let route: RouteDescriptor = serde_json::from_str(
            r#"{"name":"home","path":"/","meta":{"title":"Dashboard","showInMenu":true,"order":1,"icon":"DashboardOutlined"}}"#,
        )
        .unwrap();
        assert!(route.meta.show_in_menu);
        assert_eq!(route.meta.icon, Some(Icon::Dashboard));
    }
}
