//! The dashboard's route table

use super::RouteDescriptor;
use crate::model::Icon;

/// Returns the dashboard's routes as registered with the router.
///
/// The `components` group is hidden itself; only its children show, under
/// the synthesized "Components" branch. Pass the result through
/// [`normalize_routes`](super::normalize_routes) before deriving the menu.
pub fn app_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("home", "/")
            .title("Dashboard")
            .icon(Icon::Dashboard)
            .show_in_menu()
            .order(1),
        RouteDescriptor::new("about", "/about")
            .title("About")
            .icon(Icon::InfoCircle)
            .show_in_menu()
            .order(3),
        RouteDescriptor::new("tableGenerator", "/table-generator")
            .title("Table Generator")
            .icon(Icon::Table)
            .show_in_menu()
            .order(2),
        components_routes(),
    ]
}

fn components_routes() -> RouteDescriptor {
    RouteDescriptor::new("components", "/component")
        .redirect("/component/table")
        .title("Components")
        .icon(Icon::Table)
        .order(4)
        .child(
            RouteDescriptor::new("components-table", "table")
                .title("Table Component")
                .icon(Icon::Table)
                .show_in_menu()
                .parent("components")
                .order(1),
        )
}
