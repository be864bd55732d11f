//! Integration tests for menu derivation and active-path resolution.

use dashboard_lib::menu::DEFAULT_ORDER;
use dashboard_lib::menu::MenuDeriver;
use dashboard_lib::menu::RouteDescriptor;
use dashboard_lib::menu::app_routes;
use dashboard_lib::menu::derive_menu;
use dashboard_lib::menu::normalize_routes;
use dashboard_lib::menu::resolve_active;
use dashboard_lib::model::Icon;

fn app_menu() -> Vec<dashboard_lib::menu::MenuItem> {
    derive_menu(&normalize_routes(&app_routes()))
}

#[test]
fn app_menu_is_ordered_by_route_order() {
    let keys: Vec<_> = app_menu().into_iter().map(|item| item.key).collect();
    assert_eq!(keys, ["home", "tableGenerator", "about", "components"]);
}

#[test]
fn app_menu_groups_component_children() {
    let menu = app_menu();
    let components = menu.iter().find(|i| i.key == "components").unwrap();

    assert!(components.is_branch());
    assert_eq!(components.title, "Components");
    assert_eq!(components.icon, Some(Icon::Table));
    assert_eq!(components.path, None);
    assert_eq!(components.children.len(), 1);
    assert_eq!(components.children[0].path.as_deref(), Some("/component/table"));
}

#[test]
fn top_level_orders_are_non_decreasing() {
    let routes = vec![
        RouteDescriptor::new("c", "/c").title("C").show_in_menu().order(5),
        RouteDescriptor::new("a", "/a").title("A").show_in_menu(),
        RouteDescriptor::new("b", "/b").title("B").show_in_menu().order(-1),
        RouteDescriptor::new("d", "/d").title("D").show_in_menu().order(DEFAULT_ORDER),
    ];
    let keys: Vec<_> = derive_menu(&routes).into_iter().map(|i| i.key).collect();
    assert_eq!(keys, ["b", "c", "a", "d"]);
}

#[test]
fn unregistered_parent_drops_children() {
    let routes = vec![
        RouteDescriptor::new("home", "/").title("Home").show_in_menu().order(1),
        RouteDescriptor::new("orphan", "/x/y")
            .title("Orphan")
            .show_in_menu()
            .parent("reports"),
    ];
    let menu = derive_menu(&routes);
    assert_eq!(menu.len(), 1);
    assert!(menu[0].find("orphan").is_none());

    let menu = MenuDeriver::new()
        .with_parent("reports", "Reports", Icon::FileText)
        .derive(&routes);
    assert_eq!(menu.len(), 2);
    assert!(menu[1].find("orphan").is_some());
}

#[test]
fn resolve_top_level_path() {
    let selection = resolve_active("/table-generator", &app_menu());
    assert_eq!(selection.selected_keys, ["tableGenerator"]);
    assert!(selection.open_keys.is_empty());
}

#[test]
fn resolve_nested_path_opens_parent() {
    let selection = resolve_active("/component/table", &app_menu());
    assert_eq!(selection.selected_keys, ["components-table"]);
    assert_eq!(selection.open_keys, ["components"]);
}

#[test]
fn resolve_unknown_path_is_empty() {
    assert!(resolve_active("/nowhere", &app_menu()).is_empty());
}
