//! 2D SLAM entity types (Layer 3).
//!
//! One extension module's worth of pose-graph types: SE(2) poses, planar
//! landmarks, the constraints between them, and a sensor-offset parameter
//! block. All of them reach the rest of the system exclusively through the
//! `"slam2d"` registration group — nothing outside this crate names the
//! concrete types at compile time.
//!
//! # Usage
//!
//! ```
//! use astrolabe_groups::Registrar;
//! use astrolabe_types_slam2d::Slam2dGroup;
//!
//! let mut registrar = Registrar::new();
//! registrar.add_group(Slam2dGroup);
//! let registry = registrar.finish().unwrap();
//!
//! assert!(registry.has("VERTEX_SE2"));
//! assert!(registry.has("EDGE_SE2"));
//! ```
//!
//! # Visualization
//!
//! With the `viz` feature enabled, the group additionally annotates its
//! types with draw actions. Core registration and construction are
//! identical whether or not the feature is present.

/// The `slam2d` registration group.
pub mod group;

/// Concrete vertex, edge, and parameter types.
pub mod types;

/// Draw actions for slam2d types (requires the `viz` feature).
#[cfg(feature = "viz")]
pub mod actions;

pub use group::Slam2dGroup;
pub use types::{EdgeSe2, EdgeSe2PointXy, ParamSe2Offset, VertexPointXy, VertexSe2};
