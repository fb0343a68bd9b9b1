//! Panel routing: which of the six dashboard panels is visible.

use std::fmt;

/// One of the six known dashboard panels, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivePanel {
    #[default]
    Dashboard,
    Products,
    Inventory,
    Orders,
    Customers,
    Deliveries,
}

impl ActivePanel {
    /// All panels in sidebar order.
    pub const ALL: [ActivePanel; 6] = [
        ActivePanel::Dashboard,
        ActivePanel::Products,
        ActivePanel::Inventory,
        ActivePanel::Orders,
        ActivePanel::Customers,
        ActivePanel::Deliveries,
    ];

    /// Lowercase identifier used by the CLI, config and headless commands.
    pub fn id(self) -> &'static str {
        match self {
            ActivePanel::Dashboard => "dashboard",
            ActivePanel::Products => "products",
            ActivePanel::Inventory => "inventory",
            ActivePanel::Orders => "orders",
            ActivePanel::Customers => "customers",
            ActivePanel::Deliveries => "deliveries",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            ActivePanel::Dashboard => "Dashboard",
            ActivePanel::Products => "Products",
            ActivePanel::Inventory => "Inventory",
            ActivePanel::Orders => "Orders",
            ActivePanel::Customers => "Customers",
            ActivePanel::Deliveries => "Deliveries",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ActivePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The selected route. Identifiers outside the six known panels are kept
/// verbatim and render an empty main region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRoute {
    Panel(ActivePanel),
    Unknown(String),
}

impl Default for PanelRoute {
    fn default() -> Self {
        PanelRoute::Panel(ActivePanel::default())
    }
}

impl From<ActivePanel> for PanelRoute {
    fn from(panel: ActivePanel) -> Self {
        PanelRoute::Panel(panel)
    }
}

impl PanelRoute {
    /// Resolve an identifier. No validation; unknown ids are preserved.
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        match ActivePanel::from_id(&id) {
            Some(panel) => PanelRoute::Panel(panel),
            None => PanelRoute::Unknown(id),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            PanelRoute::Panel(panel) => panel.id(),
            PanelRoute::Unknown(id) => id,
        }
    }

    pub fn panel(&self) -> Option<ActivePanel> {
        match self {
            PanelRoute::Panel(panel) => Some(*panel),
            PanelRoute::Unknown(_) => None,
        }
    }

    pub fn is(&self, panel: ActivePanel) -> bool {
        self.panel() == Some(panel)
    }

    /// Header title: the identifier with its first character upper-cased.
    pub fn title(&self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
