//! The registrar: group bookkeeping, dependency resolution, freezing.
//!
//! The [`Registrar`] owns the [`TypeRegistry`] during the registration phase
//! and manages a strict group lifecycle:
//!
//! 1. **Assembly** - the process's composition root adds every group (and
//!    any external `declare_use` ordering constraints).
//! 2. **Resolution** - [`ensure_registered`](Registrar::ensure_registered)
//!    walks each group's dependencies depth-first, runs its body into a
//!    staging registry, and commits all-or-nothing.
//! 3. **Freeze** - [`finish`](Registrar::finish) registers everything still
//!    pending and hands back the registry as an immutable `Arc`, ready for
//!    concurrent lookups from graph-loading workers.
//!
//! Because `&mut self` is required for every mutation, the registration
//! phase is single-threaded by construction; re-entrancy shows up only as
//! the cycle case, never as a data race.

use crate::error::GroupError;
use crate::group::{GroupState, TypeGroup};
use astrolabe_registry::TypeRegistry;
use hashbrown::HashMap;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Internal entry for an added group.
struct GroupEntry {
    /// The group instance. Shared so the registrar can run the body while
    /// still mutating its own bookkeeping.
    group: Arc<dyn TypeGroup>,
    /// Where the group is in its lifecycle.
    state: GroupState,
}

/// Collects type groups, resolves their dependencies, and freezes the
/// resulting [`TypeRegistry`].
///
/// # Example
///
/// ```ignore
/// let mut registrar = Registrar::new();
/// registrar.add_group(Slam2dGroup).add_group(Calib2dGroup);
/// let registry = registrar.finish()?;
///
/// // registry is an Arc<TypeRegistry>: clone it into every loader thread.
/// let entity = registry.construct("VERTEX_SE2")?;
/// ```
#[derive(Default)]
pub struct Registrar {
    /// The registry being populated; frozen and returned by `finish`.
    registry: TypeRegistry,
    /// Added groups in insertion order, keyed by name.
    groups: IndexMap<String, GroupEntry>,
    /// External ordering constraints recorded via `declare_use`, in
    /// declaration order per dependent.
    declared_uses: HashMap<String, Vec<String>>,
}

impl core::fmt::Debug for Registrar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let states: Vec<(&str, GroupState)> = self
            .groups
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.state))
            .collect();
        f.debug_struct("Registrar")
            .field("groups", &states)
            .field("tags", &self.registry.len())
            .finish()
    }
}

impl Registrar {
    /// Creates a registrar with an empty registry and no groups.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: TypeRegistry::new(),
            groups: IndexMap::new(),
            declared_uses: HashMap::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Assembly
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a group to the registrar.
    ///
    /// The group's body does not run yet; it runs once, on the first
    /// [`ensure_registered`](Self::ensure_registered) (or during
    /// [`finish`](Self::finish)).
    ///
    /// # Panics
    ///
    /// Panics if a group with the same name was already added. Two modules
    /// claiming one group name is a wiring bug, not a runtime condition.
    pub fn add_group(&mut self, group: impl TypeGroup) -> &mut Self {
        let name = group.name().to_string();
        assert!(
            !self.groups.contains_key(&name),
            "Type group '{name}' was already added.\n\
             Each group name may be contributed by exactly one module.",
        );
        self.groups.insert(
            name,
            GroupEntry {
                group: Arc::new(group),
                state: GroupState::NotStarted,
            },
        );
        self
    }

    /// Records that `dependent`'s registration body must only run after
    /// `dependency` is done.
    ///
    /// This supplements the group's own [`TypeGroup::uses`] list and exists
    /// for the same reason: expressing "my constraint types reference entity
    /// types from another module" as a registration-time ordering
    /// constraint, not a compile- or link-time dependency. Either name may
    /// be declared before the corresponding group is added; the constraint
    /// is checked when `dependent` is registered.
    pub fn declare_use(&mut self, dependent: &str, dependency: &str) -> &mut Self {
        let uses = self.declared_uses.entry(dependent.to_string()).or_default();
        if !uses.iter().any(|d| d == dependency) {
            uses.push(dependency.to_string());
        }
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────────────────────

    /// Idempotent entry point: registers the named group and everything it
    /// uses, exactly once.
    ///
    /// Dependencies resolve depth-first in declaration order — the group's
    /// own [`TypeGroup::uses`] list first, then any
    /// [`declare_use`](Self::declare_use) constraints. Calling this any
    /// number of times, for any trigger order across groups, yields the same
    /// final registry contents.
    ///
    /// # Errors
    ///
    /// - [`GroupError::UnknownGroup`] if `name` was never added.
    /// - [`GroupError::MissingDependency`] if a used group was never added.
    /// - [`GroupError::CyclicDependency`] if the dependency chain loops. No
    ///   partial registration of any group on the cycle becomes visible.
    /// - [`GroupError::Registration`] if the group's body raised a registry
    ///   conflict; none of its tags were committed, and the group remains
    ///   `InProgress` (unusable).
    pub fn ensure_registered(&mut self, name: &str) -> Result<(), GroupError> {
        let mut path = Vec::new();
        self.ensure_inner(name, &mut path)
    }

    fn ensure_inner(&mut self, name: &str, path: &mut Vec<String>) -> Result<(), GroupError> {
        let Some(entry) = self.groups.get(name) else {
            return Err(match path.last() {
                Some(dependent) => GroupError::MissingDependency {
                    dependent: dependent.clone(),
                    dependency: name.to_string(),
                },
                None => GroupError::UnknownGroup(name.to_string()),
            });
        };

        match entry.state {
            GroupState::Done => return Ok(()),
            GroupState::InProgress => {
                let mut chain = path.clone();
                chain.push(name.to_string());
                return Err(GroupError::CyclicDependency { chain });
            }
            GroupState::NotStarted => {}
        }

        let group = Arc::clone(&entry.group);
        self.set_state(name, GroupState::InProgress);
        path.push(name.to_string());

        // The group's own declarations first, then external ones.
        let mut deps: Vec<String> = group.uses().into_iter().map(str::to_string).collect();
        if let Some(declared) = self.declared_uses.get(name) {
            for dep in declared {
                if !deps.iter().any(|d| d == dep) {
                    deps.push(dep.clone());
                }
            }
        }
        for dep in &deps {
            self.ensure_inner(dep, path)?;
        }

        // Run the body against a staging registry and commit all-or-nothing,
        // so a conflicting group never publishes a partial tag set.
        let mut staged = TypeRegistry::new();
        group
            .register(&mut staged)
            .map_err(|source| GroupError::Registration {
                group: name.to_string(),
                source,
            })?;
        let staged_tags = staged.len();
        self.registry
            .merge(staged)
            .map_err(|source| GroupError::Registration {
                group: name.to_string(),
                source,
            })?;

        path.pop();
        self.set_state(name, GroupState::Done);
        debug!(group = name, tags = staged_tags, "type group registered");
        Ok(())
    }

    /// Registers every added group, in insertion order.
    ///
    /// # Errors
    ///
    /// Propagates the first [`GroupError`] raised by
    /// [`ensure_registered`](Self::ensure_registered).
    pub fn register_all(&mut self) -> Result<(), GroupError> {
        let names: Vec<String> = self.groups.keys().cloned().collect();
        for name in names {
            self.ensure_registered(&name)?;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Freeze
    // ─────────────────────────────────────────────────────────────────────────

    /// Registers everything still pending and freezes the registry.
    ///
    /// The returned `Arc<TypeRegistry>` is read-only by construction: clone
    /// it into as many graph-loading workers as needed; lookups and
    /// constructions are non-blocking `&self` reads.
    ///
    /// # Errors
    ///
    /// Propagates the first [`GroupError`] raised while registering pending
    /// groups.
    pub fn finish(mut self) -> Result<Arc<TypeRegistry>, GroupError> {
        self.register_all()?;
        Ok(Arc::new(self.registry))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Introspection
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the registry as populated so far.
    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Returns whether a group with the given name has been added.
    #[must_use]
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Returns the lifecycle state of a group, if it was added.
    #[must_use]
    pub fn group_state(&self, name: &str) -> Option<GroupState> {
        self.groups.get(name).map(|entry| entry.state)
    }

    fn set_state(&mut self, name: &str, state: GroupState) {
        if let Some(entry) = self.groups.get_mut(name) {
            entry.state = state;
        }
    }
}
