//! The `slam2d` registration group.

use astrolabe_groups::TypeGroup;
use astrolabe_registry::{EntityCategory, RegistryError, TypeRegistry, default_factory};

use crate::types::{EdgeSe2, EdgeSe2PointXy, ParamSe2Offset, VertexPointXy, VertexSe2};

/// Registers the 2D SLAM type family under the group name `"slam2d"`.
///
/// | Tag | Category | Type |
/// |-----|----------|------|
/// | `VERTEX_SE2` | Node | [`VertexSe2`] |
/// | `VERTEX_POINT_XY` | Node | [`VertexPointXy`] |
/// | `EDGE_SE2` | Edge | [`EdgeSe2`] |
/// | `EDGE_SE2_POINT_XY` | Edge | [`EdgeSe2PointXy`] |
/// | `PARAMS_SE2_OFFSET` | Parameter | [`ParamSe2Offset`] |
///
/// With the `viz` feature, draw actions annotate `VERTEX_SE2`,
/// `VERTEX_POINT_XY`, and `EDGE_SE2`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Slam2dGroup;

impl TypeGroup for Slam2dGroup {
    fn name(&self) -> &str {
        "slam2d"
    }

    fn register(&self, registry: &mut TypeRegistry) -> Result<(), RegistryError> {
        registry.register(
            "VERTEX_SE2",
            EntityCategory::Node,
            default_factory::<VertexSe2>(),
        )?;
        registry.register(
            "VERTEX_POINT_XY",
            EntityCategory::Node,
            default_factory::<VertexPointXy>(),
        )?;
        registry.register("EDGE_SE2", EntityCategory::Edge, default_factory::<EdgeSe2>())?;
        registry.register(
            "EDGE_SE2_POINT_XY",
            EntityCategory::Edge,
            default_factory::<EdgeSe2PointXy>(),
        )?;
        registry.register(
            "PARAMS_SE2_OFFSET",
            EntityCategory::Parameter,
            default_factory::<ParamSe2Offset>(),
        )?;

        #[cfg(feature = "viz")]
        {
            use crate::actions::{DrawEdgeSe2, DrawVertexPointXy, DrawVertexSe2};
            use std::sync::Arc;

            registry.register_action("VERTEX_SE2", Arc::new(|| Box::new(DrawVertexSe2)))?;
            registry.register_action("VERTEX_POINT_XY", Arc::new(|| Box::new(DrawVertexPointXy)))?;
            registry.register_action("EDGE_SE2", Arc::new(|| Box::new(DrawEdgeSe2)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astrolabe_groups::Registrar;

    fn registry() -> std::sync::Arc<TypeRegistry> {
        let mut registrar = Registrar::new();
        registrar.add_group(Slam2dGroup);
        registrar.finish().unwrap()
    }

    #[test]
    fn registers_the_slam2d_tag_set() {
        let registry = registry();

        let nodes: Vec<_> = registry.tags(EntityCategory::Node).collect();
        assert_eq!(nodes, vec!["VERTEX_SE2", "VERTEX_POINT_XY"]);

        let edges: Vec<_> = registry.tags(EntityCategory::Edge).collect();
        assert_eq!(edges, vec!["EDGE_SE2", "EDGE_SE2_POINT_XY"]);

        let params: Vec<_> = registry.tags(EntityCategory::Parameter).collect();
        assert_eq!(params, vec!["PARAMS_SE2_OFFSET"]);
    }

    #[test]
    fn constructed_entities_downcast_to_concrete_types() {
        let registry = registry();

        let vertex = registry.construct("VERTEX_SE2").unwrap();
        assert!(vertex.downcast_ref::<VertexSe2>().is_some());

        let edge = registry
            .construct_as("EDGE_SE2_POINT_XY", EntityCategory::Edge)
            .unwrap();
        assert!(edge.downcast_ref::<EdgeSe2PointXy>().is_some());
    }

    #[cfg(feature = "viz")]
    #[test]
    fn viz_annotates_draw_actions() {
        let registry = registry();
        assert!(registry.has_action("VERTEX_SE2"));
        assert!(registry.has_action("EDGE_SE2"));
        assert!(!registry.has_action("PARAMS_SE2_OFFSET"));

        let action = registry.action("VERTEX_SE2").unwrap();
        let vertex = registry.construct("VERTEX_SE2").unwrap();
        action.run(vertex.as_ref());
    }

    #[cfg(not(feature = "viz"))]
    #[test]
    fn without_viz_there_are_no_actions() {
        let registry = registry();
        assert!(registry.action("VERTEX_SE2").is_none());
        assert_eq!(registry.tags(EntityCategory::Action).count(), 0);
        // Core construction is unaffected by the missing capability.
        assert!(registry.construct("VERTEX_SE2").is_ok());
    }
}
