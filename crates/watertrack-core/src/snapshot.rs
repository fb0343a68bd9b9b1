//! Business-metrics snapshot and the records it carries.
//!
//! A [`Snapshot`] is produced wholesale by a [`SnapshotSource`](crate::mock::SnapshotSource)
//! and replaced wholesale on every refresh; none of its fields are mutated in
//! place. Serialized field names are camelCase to match the headless stream.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of monthly revenue points in [`Snapshot::sales_data`].
pub const MONTHS_PER_YEAR: usize = 12;

/// A full set of dashboard metrics at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub total_revenue: u32,
    pub active_orders: u32,
    /// Percentage in `0..=100`
    pub inventory_status: u8,
    pub active_customers: u32,
    pub recent_activity: Vec<ActivityEvent>,
    pub alerts: Vec<Alert>,
    /// Always [`MONTHS_PER_YEAR`] entries, January first.
    pub sales_data: Vec<MonthlyRevenue>,
    pub products: Vec<Product>,
    pub filling_history: Vec<FillEvent>,
}

impl Snapshot {
    /// Look up a product by the string form of its id (as held by form drafts).
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        let id: u32 = id.trim().parse().ok()?;
        self.products.iter().find(|p| p.id == id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Activity
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of a recent-activity entry.
///
/// Unrecognized kinds are kept verbatim in [`ActivityKind::Other`] and render
/// with a neutral marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    NewOrder,
    DeliveryComplete,
    LowStock,
    Other(String),
}

impl ActivityKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityKind::NewOrder => "new-order",
            ActivityKind::DeliveryComplete => "delivery-complete",
            ActivityKind::LowStock => "low-stock",
            ActivityKind::Other(s) => s,
        }
    }
}

impl From<String> for ActivityKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "new-order" => ActivityKind::NewOrder,
            "delivery-complete" => ActivityKind::DeliveryComplete,
            "low-stock" => ActivityKind::LowStock,
            _ => ActivityKind::Other(s),
        }
    }
}

impl From<ActivityKind> for String {
    fn from(kind: ActivityKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One line in the "Recent Activity" card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub kind: ActivityKind,
    pub message: String,
}

impl ActivityEvent {
    pub fn new(kind: ActivityKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Alerts
// ─────────────────────────────────────────────────────────────────────────────

/// Severity of an alert. Unknown severities fall back to a neutral marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
    Other(String),
}

impl AlertSeverity {
    pub fn as_str(&self) -> &str {
        match self {
            AlertSeverity::Critical => "critical",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Info => "info",
            AlertSeverity::Other(s) => s,
        }
    }
}

impl From<String> for AlertSeverity {
    fn from(s: String) -> Self {
        match s.as_str() {
            "critical" => AlertSeverity::Critical,
            "warning" => AlertSeverity::Warning,
            "info" => AlertSeverity::Info,
            _ => AlertSeverity::Other(s),
        }
    }
}

impl From<AlertSeverity> for String {
    fn from(severity: AlertSeverity) -> Self {
        severity.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    pub fn new(severity: AlertSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sales / products / filling history
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Short month name ("Jan".."Dec")
    pub month: String,
    pub revenue: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub stock: u32,
}

/// A past stock-filling operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillEvent {
    pub id: u32,
    pub product: String,
    pub quantity: u32,
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}
