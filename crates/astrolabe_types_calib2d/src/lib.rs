//! Sensor calibration entity types (Layer 3).
//!
//! Calibration constraints relate SE(2) poses to the odometry and sensor
//! parameters being estimated alongside them. Their serialized form refers
//! to vertex types from the 2D SLAM family, so the `"calib2d"` group
//! declares `uses = ["slam2d"]` — an ordering constraint by name only. This
//! crate has **no** Cargo dependency on `astrolabe_types_slam2d`; whoever
//! assembles the process adds both groups to one registrar, and the
//! registrar guarantees slam2d's registration completes first.
//!
//! # Usage
//!
//! ```ignore
//! let mut registrar = Registrar::new();
//! registrar.add_group(Slam2dGroup).add_group(Calib2dGroup);
//! let registry = registrar.finish()?;
//! ```

/// The `calib2d` registration group.
pub mod group;

/// Concrete calibration vertex and edge types.
pub mod types;

/// Draw actions for calibration edges (requires the `viz` feature).
#[cfg(feature = "viz")]
pub mod actions;

pub use group::Calib2dGroup;
pub use types::{EdgeSe2Calib, EdgeSe2OdomDifferentialCalib, VertexOdomDifferential};
