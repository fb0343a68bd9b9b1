//! Prelude for common imports used throughout all WaterTrack crates

pub use crate::error::{Error, Result, ResultExt};
pub use tracing::{debug, error, info, instrument, trace, warn};
