//! The constructor registry and its slots.
//!
//! # Lifecycle
//!
//! The registry uses a two-phase initialization to allow type registration
//! while ensuring immutability at runtime:
//!
//! 1. **Registration phase**: extension modules (normally via
//!    `astrolabe_groups`) hold `&mut TypeRegistry` and call
//!    [`register`](TypeRegistry::register) /
//!    [`register_action`](TypeRegistry::register_action). This phase is
//!    single-threaded by construction.
//!
//! 2. **Lookup phase**: the registry is frozen behind an `Arc` and shared
//!    with graph-loading workers. [`lookup`](TypeRegistry::lookup),
//!    [`construct`](TypeRegistry::construct), and
//!    [`action`](TypeRegistry::action) are `&self` reads and safe to call
//!    concurrently without blocking.
//!
//! There is no unregister operation: slots, once inserted, persist for the
//! life of the registry.

use crate::entity::{ActionFactory, Entity, EntityAction, EntityCategory, EntityFactory};
use crate::error::RegistryError;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::trace;

// ─────────────────────────────────────────────────────────────────────────────
// ConstructorSlot
// ─────────────────────────────────────────────────────────────────────────────

/// One immutable tag→factory binding.
///
/// Owned exclusively by the registry once registered.
pub struct ConstructorSlot {
    /// Category the tag is bound under.
    category: EntityCategory,
    /// The zero-argument constructor.
    factory: EntityFactory,
}

impl ConstructorSlot {
    /// Returns the category this slot was registered under.
    #[must_use]
    pub fn category(&self) -> EntityCategory {
        self.category
    }

    /// Invokes the factory, producing a fresh entity.
    ///
    /// Ownership transfers to the caller; the registry retains only the
    /// constructor.
    #[must_use]
    pub fn construct(&self) -> Box<dyn Entity> {
        (self.factory)()
    }

    /// Whether this slot holds the identical binding.
    ///
    /// Factories compare by `Arc` identity: only a re-registration of the
    /// same factory value counts as identical.
    fn same_binding(&self, category: EntityCategory, factory: &EntityFactory) -> bool {
        self.category == category && Arc::ptr_eq(&self.factory, factory)
    }
}

impl core::fmt::Debug for ConstructorSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConstructorSlot")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TypeRegistry
// ─────────────────────────────────────────────────────────────────────────────

/// Registry of entity constructors, indexed by tag.
///
/// Tags are unique process-wide across *all* categories: a node tag and an
/// edge tag must not collide. Insertion order is preserved, so
/// [`tags`](Self::tags) enumerates deterministically — insertion order
/// within a registration group and dependency order across groups.
///
/// Actions are held in a side-table keyed by the same tag space; an absent
/// entry means "no action" and never affects entity construction.
#[derive(Default)]
pub struct TypeRegistry {
    /// Constructor slots for nodes, edges, and parameters.
    slots: IndexMap<String, ConstructorSlot>,
    /// Auxiliary action factories, keyed by the entity tag they annotate.
    actions: IndexMap<String, ActionFactory>,
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("tags", &self.slots.keys().collect::<Vec<_>>())
            .field("action_tags", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
            actions: IndexMap::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────────────────────

    /// Registers a constructor for `tag` under `category`.
    ///
    /// Re-registering the identical `(tag, category, factory)` binding is a
    /// no-op, tolerating repeated module initialization attempts.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateTag`] if the tag is already bound to a
    ///   different factory or category. The existing binding stays
    ///   authoritative.
    /// - [`RegistryError::ActionCategory`] if `category` is
    ///   [`EntityCategory::Action`]; actions go through
    ///   [`register_action`](Self::register_action).
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        category: EntityCategory,
        factory: EntityFactory,
    ) -> Result<(), RegistryError> {
        let tag = tag.into();
        if category == EntityCategory::Action {
            return Err(RegistryError::ActionCategory(tag));
        }
        if let Some(existing) = self.slots.get(&tag) {
            if existing.same_binding(category, &factory) {
                return Ok(());
            }
            return Err(RegistryError::DuplicateTag {
                tag,
                existing: existing.category(),
            });
        }
        trace!(tag = %tag, category = %category, "registered entity constructor");
        self.slots.insert(tag, ConstructorSlot { category, factory });
        Ok(())
    }

    /// Registers an auxiliary action for an entity tag.
    ///
    /// The action side-table shares the entity tag namespace without
    /// colliding with it: an action for `"VERTEX_SE2"` annotates the entity
    /// registered under that tag. Callers are expected to gate these
    /// registrations behind the capability that makes them meaningful (e.g.,
    /// a `viz` feature); core construction is unaffected either way.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateTag`] if a different action factory
    /// already annotates the tag. Re-registering the identical factory is a
    /// no-op.
    pub fn register_action(
        &mut self,
        tag: impl Into<String>,
        factory: ActionFactory,
    ) -> Result<(), RegistryError> {
        let tag = tag.into();
        if let Some(existing) = self.actions.get(&tag) {
            if Arc::ptr_eq(existing, &factory) {
                return Ok(());
            }
            return Err(RegistryError::DuplicateTag {
                tag,
                existing: EntityCategory::Action,
            });
        }
        trace!(tag = %tag, "registered entity action");
        self.actions.insert(tag, factory);
        Ok(())
    }

    /// Absorbs every binding from `other`, all-or-nothing.
    ///
    /// Either the entire contents of `other` merge cleanly (identical
    /// bindings deduplicate as no-ops) or nothing is committed and the first
    /// conflict is returned. Group machinery relies on this to guarantee
    /// that a failing registration group never publishes a partial tag set.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateTag`] for the first staged tag that
    /// conflicts with an existing binding; `self` is left unchanged.
    pub fn merge(&mut self, other: TypeRegistry) -> Result<(), RegistryError> {
        for (tag, slot) in &other.slots {
            if let Some(existing) = self.slots.get(tag) {
                if !existing.same_binding(slot.category, &slot.factory) {
                    return Err(RegistryError::DuplicateTag {
                        tag: tag.clone(),
                        existing: existing.category(),
                    });
                }
            }
        }
        for (tag, factory) in &other.actions {
            if let Some(existing) = self.actions.get(tag) {
                if !Arc::ptr_eq(existing, factory) {
                    return Err(RegistryError::DuplicateTag {
                        tag: tag.clone(),
                        existing: EntityCategory::Action,
                    });
                }
            }
        }
        for (tag, slot) in other.slots {
            self.slots.entry(tag).or_insert(slot);
        }
        for (tag, factory) in other.actions {
            self.actions.entry(tag).or_insert(factory);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookup & Construction
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the slot bound to `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownTag`] if the tag was never registered.
    pub fn lookup(&self, tag: &str) -> Result<&ConstructorSlot, RegistryError> {
        self.slots
            .get(tag)
            .ok_or_else(|| RegistryError::UnknownTag(tag.to_string()))
    }

    /// Constructs a fresh entity for `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownTag`] if the tag was never registered.
    pub fn construct(&self, tag: &str) -> Result<Box<dyn Entity>, RegistryError> {
        self.lookup(tag).map(|slot| slot.construct())
    }

    /// Constructs a fresh entity for `tag`, checking its category first.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnknownTag`] if the tag was never registered.
    /// - [`RegistryError::CategoryMismatch`] if the tag is bound under a
    ///   different category than `expected`.
    pub fn construct_as(
        &self,
        tag: &str,
        expected: EntityCategory,
    ) -> Result<Box<dyn Entity>, RegistryError> {
        let slot = self.lookup(tag)?;
        if slot.category() != expected {
            return Err(RegistryError::CategoryMismatch {
                tag: tag.to_string(),
                expected,
                found: slot.category(),
            });
        }
        Ok(slot.construct())
    }

    /// Instantiates the action annotating `tag`, if any.
    ///
    /// `None` means "no action" and is the normal case for most tags — it is
    /// not an error.
    #[must_use]
    pub fn action(&self, tag: &str) -> Option<Box<dyn EntityAction>> {
        self.actions.get(tag).map(|factory| factory())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Introspection
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns whether a constructor is bound to `tag`.
    #[must_use]
    pub fn has(&self, tag: &str) -> bool {
        self.slots.contains_key(tag)
    }

    /// Returns whether an action annotates `tag`.
    #[must_use]
    pub fn has_action(&self, tag: &str) -> bool {
        self.actions.contains_key(tag)
    }

    /// Returns the category `tag` is bound under, if any.
    #[must_use]
    pub fn category_of(&self, tag: &str) -> Option<EntityCategory> {
        self.slots.get(tag).map(ConstructorSlot::category)
    }

    /// Enumerates the tags bound under `category`.
    ///
    /// The iterator is lazy and restartable; call again for a fresh pass.
    /// Order is deterministic: insertion order within a registration group,
    /// dependency order across groups — not alphabetical.
    /// [`EntityCategory::Action`] enumerates the action side-table.
    pub fn tags(&self, category: EntityCategory) -> impl Iterator<Item = &str> + '_ {
        // The slot map never holds Action slots, and the action table only
        // contributes when actions were asked for, so exactly one of the two
        // halves yields items.
        self.slots
            .iter()
            .filter(move |(_, slot)| slot.category() == category)
            .map(|(tag, _)| tag.as_str())
            .chain(
                self.actions
                    .keys()
                    .filter(move |_| category == EntityCategory::Action)
                    .map(String::as_str),
            )
    }

    /// Returns the number of registered constructor slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no constructors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::default_factory;

    #[derive(Debug, Default)]
    struct TestVertex {
        pose: [f64; 3],
    }
    impl Entity for TestVertex {}

    #[derive(Debug, Default)]
    struct TestEdge;
    impl Entity for TestEdge {}

    struct TestAction;
    impl EntityAction for TestAction {
        fn run(&self, _entity: &dyn Entity) {}
    }

    fn action_factory() -> ActionFactory {
        Arc::new(|| Box::new(TestAction))
    }

    #[test]
    fn register_then_construct_round_trips() {
        let mut registry = TypeRegistry::new();
        registry
            .register("VERTEX_TEST", EntityCategory::Node, default_factory::<TestVertex>())
            .unwrap();

        let entity = registry.construct("VERTEX_TEST").unwrap();
        let vertex = entity.downcast_ref::<TestVertex>().unwrap();
        assert_eq!(vertex.pose, [0.0; 3]);
        assert_eq!(registry.category_of("VERTEX_TEST"), Some(EntityCategory::Node));
    }

    #[test]
    fn lookup_unknown_tag_fails() {
        let registry = TypeRegistry::new();
        let err = registry.construct("NEVER_REGISTERED").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownTag(tag) if tag == "NEVER_REGISTERED"));
    }

    #[test]
    fn duplicate_tag_with_different_factory_is_rejected() {
        let mut registry = TypeRegistry::new();
        registry
            .register("VERTEX_TEST", EntityCategory::Node, default_factory::<TestVertex>())
            .unwrap();

        let err = registry
            .register("VERTEX_TEST", EntityCategory::Node, default_factory::<TestVertex>())
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateTag { .. }));

        // First binding stays authoritative.
        let entity = registry.construct("VERTEX_TEST").unwrap();
        assert!(entity.downcast_ref::<TestVertex>().is_some());
    }

    #[test]
    fn reregistering_identical_binding_is_noop() {
        let mut registry = TypeRegistry::new();
        let factory = default_factory::<TestVertex>();
        registry
            .register("VERTEX_TEST", EntityCategory::Node, Arc::clone(&factory))
            .unwrap();
        registry
            .register("VERTEX_TEST", EntityCategory::Node, factory)
            .unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn same_tag_different_category_is_rejected() {
        let mut registry = TypeRegistry::new();
        let factory = default_factory::<TestVertex>();
        registry
            .register("AMBIGUOUS", EntityCategory::Node, Arc::clone(&factory))
            .unwrap();

        let err = registry
            .register("AMBIGUOUS", EntityCategory::Edge, factory)
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateTag { existing: EntityCategory::Node, .. }
        ));
    }

    #[test]
    fn register_with_action_category_is_rejected() {
        let mut registry = TypeRegistry::new();
        let err = registry
            .register("HOOK", EntityCategory::Action, default_factory::<TestVertex>())
            .unwrap_err();
        assert!(matches!(err, RegistryError::ActionCategory(tag) if tag == "HOOK"));
    }

    #[test]
    fn construct_as_checks_category() {
        let mut registry = TypeRegistry::new();
        registry
            .register("EDGE_TEST", EntityCategory::Edge, default_factory::<TestEdge>())
            .unwrap();

        assert!(registry.construct_as("EDGE_TEST", EntityCategory::Edge).is_ok());

        let err = registry
            .construct_as("EDGE_TEST", EntityCategory::Node)
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::CategoryMismatch {
                expected: EntityCategory::Node,
                found: EntityCategory::Edge,
                ..
            }
        ));
    }

    #[test]
    fn action_lookup_without_registration_is_none() {
        let mut registry = TypeRegistry::new();
        registry
            .register("VERTEX_TEST", EntityCategory::Node, default_factory::<TestVertex>())
            .unwrap();

        assert!(registry.action("VERTEX_TEST").is_none());
        assert!(!registry.has_action("VERTEX_TEST"));
    }

    #[test]
    fn registered_action_is_instantiated() {
        let mut registry = TypeRegistry::new();
        registry
            .register("VERTEX_TEST", EntityCategory::Node, default_factory::<TestVertex>())
            .unwrap();
        registry.register_action("VERTEX_TEST", action_factory()).unwrap();

        assert!(registry.has_action("VERTEX_TEST"));
        assert!(registry.action("VERTEX_TEST").is_some());
        // Entity construction is unaffected by the annotation.
        assert!(registry.construct("VERTEX_TEST").is_ok());
    }

    #[test]
    fn duplicate_action_with_different_factory_is_rejected() {
        let mut registry = TypeRegistry::new();
        registry.register_action("VERTEX_TEST", action_factory()).unwrap();
        let err = registry
            .register_action("VERTEX_TEST", action_factory())
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateTag { existing: EntityCategory::Action, .. }
        ));
    }

    #[test]
    fn tags_filters_by_category_in_insertion_order() {
        let mut registry = TypeRegistry::new();
        registry
            .register("VERTEX_B", EntityCategory::Node, default_factory::<TestVertex>())
            .unwrap();
        registry
            .register("EDGE_A", EntityCategory::Edge, default_factory::<TestEdge>())
            .unwrap();
        registry
            .register("VERTEX_A", EntityCategory::Node, default_factory::<TestVertex>())
            .unwrap();
        registry.register_action("VERTEX_B", action_factory()).unwrap();

        // Insertion order, not alphabetical.
        let nodes: Vec<_> = registry.tags(EntityCategory::Node).collect();
        assert_eq!(nodes, vec!["VERTEX_B", "VERTEX_A"]);

        let edges: Vec<_> = registry.tags(EntityCategory::Edge).collect();
        assert_eq!(edges, vec!["EDGE_A"]);

        let actions: Vec<_> = registry.tags(EntityCategory::Action).collect();
        assert_eq!(actions, vec!["VERTEX_B"]);

        // Restartable: a second pass yields the same sequence.
        let again: Vec<_> = registry.tags(EntityCategory::Node).collect();
        assert_eq!(again, nodes);
    }

    #[test]
    fn merge_commits_all_or_nothing() {
        let mut target = TypeRegistry::new();
        target
            .register("VERTEX_TEST", EntityCategory::Node, default_factory::<TestVertex>())
            .unwrap();

        // Staged registry conflicts on VERTEX_TEST but also carries EDGE_TEST.
        let mut staged = TypeRegistry::new();
        staged
            .register("EDGE_TEST", EntityCategory::Edge, default_factory::<TestEdge>())
            .unwrap();
        staged
            .register("VERTEX_TEST", EntityCategory::Node, default_factory::<TestVertex>())
            .unwrap();

        let err = target.merge(staged).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateTag { .. }));

        // Nothing from the staged registry was committed.
        assert_eq!(target.len(), 1);
        assert!(!target.has("EDGE_TEST"));
    }

    #[test]
    fn merge_deduplicates_identical_bindings() {
        let factory = default_factory::<TestVertex>();

        let mut target = TypeRegistry::new();
        target
            .register("VERTEX_TEST", EntityCategory::Node, Arc::clone(&factory))
            .unwrap();

        let mut staged = TypeRegistry::new();
        staged
            .register("VERTEX_TEST", EntityCategory::Node, factory)
            .unwrap();
        staged
            .register("EDGE_TEST", EntityCategory::Edge, default_factory::<TestEdge>())
            .unwrap();

        target.merge(staged).unwrap();
        assert_eq!(target.len(), 2);
    }
}
