//! Entity traits, categories, and factory signatures.
//!
//! Entities are deliberately opaque: the registry moves them into existence
//! by tag and hands ownership to the caller, but never inspects their
//! contents. Consumers that need the concrete type downcast through
//! [`Entity`].

use core::fmt;
use std::sync::Arc;

use downcast_rs::{DowncastSync, impl_downcast};

// ─────────────────────────────────────────────────────────────────────────────
// EntityCategory
// ─────────────────────────────────────────────────────────────────────────────

/// The category a tag is registered under.
///
/// Fixed at registration time and never changes. The constructor table holds
/// [`Node`](EntityCategory::Node), [`Edge`](EntityCategory::Edge), and
/// [`Parameter`](EntityCategory::Parameter) slots; [`Action`](EntityCategory::Action)
/// entries live in a side-table keyed by the entity tag they annotate (see
/// [`TypeRegistry::register_action`](crate::registry::TypeRegistry::register_action)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    /// A graph vertex (e.g., a robot pose or a landmark).
    Node,
    /// A constraint between vertices.
    Edge,
    /// A parameter block referenced by edges (e.g., a sensor offset).
    Parameter,
    /// An auxiliary behavior attached to an entity tag (e.g., a draw hook).
    Action,
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityCategory::Node => "node",
            EntityCategory::Edge => "edge",
            EntityCategory::Parameter => "parameter",
            EntityCategory::Action => "action",
        };
        f.write_str(name)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entity
// ─────────────────────────────────────────────────────────────────────────────

/// A polymorphic graph element produced by a registered constructor.
///
/// The registry treats entities as opaque handles: it constructs them and
/// transfers ownership immediately. Downcasting is available for consumers
/// that know the concrete type:
///
/// ```
/// # use astrolabe_registry::Entity;
/// #[derive(Debug, Default)]
/// struct VertexSe2 {
///     pose: [f64; 3],
/// }
/// impl Entity for VertexSe2 {}
///
/// let boxed: Box<dyn Entity> = Box::new(VertexSe2::default());
/// let concrete = boxed.downcast_ref::<VertexSe2>().unwrap();
/// assert_eq!(concrete.pose, [0.0; 3]);
/// ```
pub trait Entity: DowncastSync + fmt::Debug {}
impl_downcast!(sync Entity);

/// An auxiliary behavior attached to an entity tag.
///
/// Actions are optional: most tags have none, and looking one up for a tag
/// without a registered action yields `None` rather than an error. Concrete
/// actions are typically capability-gated (e.g., behind a `viz` feature) and
/// their absence never affects entity construction.
pub trait EntityAction: Send + Sync {
    /// Applies the action to an entity instance.
    fn run(&self, entity: &dyn Entity);
}

// ─────────────────────────────────────────────────────────────────────────────
// Factories
// ─────────────────────────────────────────────────────────────────────────────

/// Zero-argument constructor for an entity.
///
/// Shared (`Arc`) so the registry can compare bindings by identity: a repeat
/// registration of the *same* factory under the same tag is an idempotent
/// no-op, while a different factory claiming the tag is a conflict.
pub type EntityFactory = Arc<dyn Fn() -> Box<dyn Entity> + Send + Sync>;

/// Zero-argument constructor for an entity action.
pub type ActionFactory = Arc<dyn Fn() -> Box<dyn EntityAction> + Send + Sync>;

/// Creates an [`EntityFactory`] from a `Default` entity type.
///
/// This is the common case for serialized-graph types: the loader constructs
/// a blank entity by tag and fills it in afterwards.
#[must_use]
pub fn default_factory<E: Entity + Default>() -> EntityFactory {
    Arc::new(|| Box::new(E::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Blank;
    impl Entity for Blank {}

    #[test]
    fn category_display_is_lowercase() {
        assert_eq!(EntityCategory::Node.to_string(), "node");
        assert_eq!(EntityCategory::Edge.to_string(), "edge");
        assert_eq!(EntityCategory::Parameter.to_string(), "parameter");
        assert_eq!(EntityCategory::Action.to_string(), "action");
    }

    #[test]
    fn default_factory_constructs_fresh_instances() {
        let factory = default_factory::<Blank>();
        let a = factory();
        let b = factory();
        assert!(a.downcast_ref::<Blank>().is_some());
        assert!(b.downcast_ref::<Blank>().is_some());
    }

    #[test]
    fn entity_downcast_to_wrong_type_fails() {
        #[derive(Debug, Default)]
        struct Other;
        impl Entity for Other {}

        let boxed: Box<dyn Entity> = Box::new(Blank);
        assert!(boxed.downcast_ref::<Other>().is_none());
    }
}
