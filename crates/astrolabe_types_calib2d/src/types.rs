//! Concrete calibration vertex and edge types.

use astrolabe_registry::Entity;

/// Differential-drive odometry parameters being calibrated:
/// `[left_radius, right_radius, baseline]`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VertexOdomDifferential {
    /// Current parameter estimate.
    pub params: [f64; 3],
}

impl Entity for VertexOdomDifferential {}

/// A constraint tying two poses to the sensor offset being calibrated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EdgeSe2Calib {
    /// Measured relative transform `[dx, dy, dtheta]`.
    pub measurement: [f64; 3],
}

impl Entity for EdgeSe2Calib {}

/// A constraint tying raw wheel odometry to the differential-drive
/// parameters being calibrated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EdgeSe2OdomDifferentialCalib {
    /// Raw wheel velocities and interval `[v_left, v_right, dt]`.
    pub measurement: [f64; 3],
}

impl Entity for EdgeSe2OdomDifferentialCalib {}
