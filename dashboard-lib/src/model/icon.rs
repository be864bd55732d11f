//! Icon kinds

use serde::Deserialize;
use serde::Serialize;

/// An icon a menu entry or toolbar button can display.
///
/// The known kinds are the ones the dashboard ships with; anything else is
/// carried by name and resolved by the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    Dashboard,
    Table,
    InfoCircle,
    Plus,
    Delete,
    FileText,
    Setting,
    /// Any other icon, by its widget-library name.
    Named(String),
}

impl Icon {
    /// Returns the widget-library name of the icon.
    pub fn name(&self) -> &str {
        match self {
            Icon::Dashboard => "DashboardOutlined",
            Icon::Table => "TableOutlined",
            Icon::InfoCircle => "InfoCircleOutlined",
            Icon::Plus => "PlusOutlined",
            Icon::Delete => "DeleteOutlined",
            Icon::FileText => "FileTextOutlined",
            Icon::Setting => "SettingOutlined",
            Icon::Named(name) => name,
        }
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        match name.as_str() {
            "DashboardOutlined" => Icon::Dashboard,
            "TableOutlined" => Icon::Table,
            "InfoCircleOutlined" => Icon::InfoCircle,
            "PlusOutlined" => Icon::Plus,
            "DeleteOutlined" => Icon::Delete,
            "FileTextOutlined" => Icon::FileText,
            "SettingOutlined" => Icon::Setting,
            _ => Icon::Named(name),
        }
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.name().to_string()
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
