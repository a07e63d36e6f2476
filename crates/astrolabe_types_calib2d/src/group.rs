//! The `calib2d` registration group.

use astrolabe_groups::TypeGroup;
use astrolabe_registry::{EntityCategory, RegistryError, TypeRegistry, default_factory};

use crate::types::{EdgeSe2Calib, EdgeSe2OdomDifferentialCalib, VertexOdomDifferential};

/// Registers the sensor calibration type family under the group name
/// `"calib2d"`.
///
/// | Tag | Category | Type |
/// |-----|----------|------|
/// | `VERTEX_ODOM_DIFFERENTIAL` | Node | [`VertexOdomDifferential`] |
/// | `EDGE_SE2_CALIB` | Edge | [`EdgeSe2Calib`] |
/// | `EDGE_SE2_ODOM_DIFFERENTIAL_CALIB` | Edge | [`EdgeSe2OdomDifferentialCalib`] |
///
/// Serialized calibration graphs also contain slam2d vertices, so this
/// group uses `"slam2d"` — by name, with no compile-time dependency on the
/// crate providing it. With the `viz` feature, draw actions annotate both
/// edge tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calib2dGroup;

impl TypeGroup for Calib2dGroup {
    fn name(&self) -> &str {
        "calib2d"
    }

    fn uses(&self) -> Vec<&str> {
        vec!["slam2d"]
    }

    fn register(&self, registry: &mut TypeRegistry) -> Result<(), RegistryError> {
        registry.register(
            "VERTEX_ODOM_DIFFERENTIAL",
            EntityCategory::Node,
            default_factory::<VertexOdomDifferential>(),
        )?;
        registry.register(
            "EDGE_SE2_CALIB",
            EntityCategory::Edge,
            default_factory::<EdgeSe2Calib>(),
        )?;
        registry.register(
            "EDGE_SE2_ODOM_DIFFERENTIAL_CALIB",
            EntityCategory::Edge,
            default_factory::<EdgeSe2OdomDifferentialCalib>(),
        )?;

        #[cfg(feature = "viz")]
        {
            use crate::actions::{DrawEdgeSe2Calib, DrawEdgeSe2OdomDifferentialCalib};
            use std::sync::Arc;

            registry.register_action("EDGE_SE2_CALIB", Arc::new(|| Box::new(DrawEdgeSe2Calib)))?;
            registry.register_action(
                "EDGE_SE2_ODOM_DIFFERENTIAL_CALIB",
                Arc::new(|| Box::new(DrawEdgeSe2OdomDifferentialCalib)),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astrolabe_groups::{GroupError, GroupState, Registrar};
    use astrolabe_types_slam2d::Slam2dGroup;

    #[test]
    fn calib2d_pulls_slam2d_in_first() {
        let mut registrar = Registrar::new();
        registrar.add_group(Calib2dGroup).add_group(Slam2dGroup);

        registrar.ensure_registered("calib2d").unwrap();
        assert_eq!(registrar.group_state("slam2d"), Some(GroupState::Done));

        // slam2d's tags commit ahead of calib2d's despite insertion order.
        let edges: Vec<_> = registrar.registry().tags(EntityCategory::Edge).collect();
        assert_eq!(
            edges,
            vec![
                "EDGE_SE2",
                "EDGE_SE2_POINT_XY",
                "EDGE_SE2_CALIB",
                "EDGE_SE2_ODOM_DIFFERENTIAL_CALIB",
            ]
        );
    }

    #[test]
    fn calib2d_without_slam2d_is_a_wiring_error() {
        let mut registrar = Registrar::new();
        registrar.add_group(Calib2dGroup);

        let err = registrar.ensure_registered("calib2d").unwrap_err();
        assert!(matches!(
            err,
            GroupError::MissingDependency { dependent, dependency }
                if dependent == "calib2d" && dependency == "slam2d"
        ));
    }

    #[test]
    fn constructed_entities_downcast_to_concrete_types() {
        let mut registrar = Registrar::new();
        registrar.add_group(Slam2dGroup).add_group(Calib2dGroup);
        let registry = registrar.finish().unwrap();

        let vertex = registry
            .construct_as("VERTEX_ODOM_DIFFERENTIAL", EntityCategory::Node)
            .unwrap();
        assert!(vertex.downcast_ref::<VertexOdomDifferential>().is_some());

        let edge = registry.construct("EDGE_SE2_CALIB").unwrap();
        assert!(edge.downcast_ref::<EdgeSe2Calib>().is_some());
    }
}
