//! # watertrack-core - Core Domain Types
//!
//! Foundation crate for WaterTrack. Provides the dashboard data model, the
//! mock snapshot generator, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, rand, tracing).
//!
//! ## Public API
//!
//! ### Data Model (`snapshot`)
//! - [`Snapshot`] - One full set of dashboard metrics, replaced wholesale on refresh
//! - [`ActivityEvent`], [`ActivityKind`] - Recent-activity entries
//! - [`Alert`], [`AlertSeverity`] - Alerts needing attention
//! - [`MonthlyRevenue`], [`Product`], [`FillEvent`] - Chart and table rows
//!
//! ### Data Source (`mock`)
//! - [`SnapshotSource`] - Trait for anything producing snapshots
//! - [`MockDataSource`] - Random generator with the documented ranges
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with a fatal/non-fatal split
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use watertrack_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod mock;
pub mod prelude;
pub mod snapshot;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use mock::{MockDataSource, SnapshotSource, MONTH_LABELS};
pub use snapshot::{
    ActivityEvent, ActivityKind, Alert, AlertSeverity, FillEvent, MonthlyRevenue, Product,
    Snapshot, MONTHS_PER_YEAR,
};
