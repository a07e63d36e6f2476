//! Concrete vertex, edge, and parameter types.
//!
//! These carry only the state a graph loader fills in after construction;
//! estimation math lives in the solver, not here.

use astrolabe_registry::Entity;

/// A robot pose in SE(2): `[x, y, theta]`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VertexSe2 {
    /// Current pose estimate.
    pub pose: [f64; 3],
}

impl Entity for VertexSe2 {}

/// A planar landmark: `[x, y]`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VertexPointXy {
    /// Current landmark position estimate.
    pub point: [f64; 2],
}

impl Entity for VertexPointXy {}

/// An odometry constraint between two SE(2) poses.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EdgeSe2 {
    /// Measured relative transform `[dx, dy, dtheta]`.
    pub measurement: [f64; 3],
}

impl Entity for EdgeSe2 {}

/// An observation constraint from an SE(2) pose to a landmark.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EdgeSe2PointXy {
    /// Measured landmark position in the observing frame.
    pub measurement: [f64; 2],
}

impl Entity for EdgeSe2PointXy {}

/// A sensor offset parameter block shared by observation edges.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParamSe2Offset {
    /// Sensor pose in the robot frame `[x, y, theta]`.
    pub offset: [f64; 3],
}

impl Entity for ParamSe2Offset {}
