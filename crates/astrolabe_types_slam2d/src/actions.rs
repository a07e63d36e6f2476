//! Draw actions for slam2d types (requires the `viz` feature).
//!
//! These are the auxiliary behaviors the viewer asks the registry for when
//! rendering a loaded graph. They trace the primitives a renderer would
//! draw; actual rendering belongs to the viewer, not this crate.

use astrolabe_registry::{Entity, EntityAction};
use tracing::debug;

use crate::types::{EdgeSe2, VertexPointXy, VertexSe2};

/// Draws an SE(2) pose as an oriented triangle.
#[derive(Debug, Default)]
pub struct DrawVertexSe2;

impl EntityAction for DrawVertexSe2 {
    fn run(&self, entity: &dyn Entity) {
        if let Some(vertex) = entity.downcast_ref::<VertexSe2>() {
            debug!(pose = ?vertex.pose, "draw oriented triangle");
        }
    }
}

/// Draws a landmark as a point marker.
#[derive(Debug, Default)]
pub struct DrawVertexPointXy;

impl EntityAction for DrawVertexPointXy {
    fn run(&self, entity: &dyn Entity) {
        if let Some(vertex) = entity.downcast_ref::<VertexPointXy>() {
            debug!(point = ?vertex.point, "draw point marker");
        }
    }
}

/// Draws an odometry constraint as a line between pose estimates.
#[derive(Debug, Default)]
pub struct DrawEdgeSe2;

impl EntityAction for DrawEdgeSe2 {
    fn run(&self, entity: &dyn Entity) {
        if let Some(edge) = entity.downcast_ref::<EdgeSe2>() {
            debug!(measurement = ?edge.measurement, "draw constraint line");
        }
    }
}
