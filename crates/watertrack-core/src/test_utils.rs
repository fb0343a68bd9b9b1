//! Test helpers shared with downstream crates (`test-helpers` feature).

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::mock::{MockDataSource, SnapshotSource};
use crate::snapshot::Snapshot;

/// A [`SnapshotSource`] that always returns the same snapshot and counts calls.
#[derive(Debug)]
pub struct FixedSource {
    snapshot: Snapshot,
    calls: AtomicUsize,
}

impl FixedSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times [`SnapshotSource::fetch`] has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SnapshotSource for FixedSource {
    fn fetch(&self) -> Snapshot {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.snapshot.clone()
    }
}

/// A snapshot with known round numbers, for render and handler tests.
pub fn sample_snapshot() -> Snapshot {
    let mut snapshot = MockDataSource::new().generate();
    snapshot.total_revenue = 123_456;
    snapshot.active_orders = 789;
    snapshot.inventory_status = 85;
    snapshot.active_customers = 2_500;
    for (i, month) in snapshot.sales_data.iter_mut().enumerate() {
        month.revenue = 30_000 + (i as u32) * 1_000;
    }
    snapshot
}
