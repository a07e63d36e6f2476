//! Draw actions for calibration edges (requires the `viz` feature).

use astrolabe_registry::{Entity, EntityAction};
use tracing::debug;

use crate::types::{EdgeSe2Calib, EdgeSe2OdomDifferentialCalib};

/// Draws a calibration constraint as a dashed line.
#[derive(Debug, Default)]
pub struct DrawEdgeSe2Calib;

impl EntityAction for DrawEdgeSe2Calib {
    fn run(&self, entity: &dyn Entity) {
        if let Some(edge) = entity.downcast_ref::<EdgeSe2Calib>() {
            debug!(measurement = ?edge.measurement, "draw dashed calibration line");
        }
    }
}

/// Draws an odometry calibration constraint as a wheel-track arc.
#[derive(Debug, Default)]
pub struct DrawEdgeSe2OdomDifferentialCalib;

impl EntityAction for DrawEdgeSe2OdomDifferentialCalib {
    fn run(&self, entity: &dyn Entity) {
        if let Some(edge) = entity.downcast_ref::<EdgeSe2OdomDifferentialCalib>() {
            debug!(measurement = ?edge.measurement, "draw wheel-track arc");
        }
    }
}
