//! The `TypeGroup` trait and group lifecycle states.

use astrolabe_registry::{RegistryError, TypeRegistry};

// ─────────────────────────────────────────────────────────────────────────────
// TypeGroup
// ─────────────────────────────────────────────────────────────────────────────

/// A named batch of type registrations contributed by one extension module.
///
/// Groups are the unit of distributed initialization: each module defines
/// one, hands it to a [`Registrar`](crate::registrar::Registrar), and the
/// registrar guarantees the body runs exactly once, after every group named
/// by [`uses`](Self::uses) has completed.
///
/// # Example
///
/// ```ignore
/// struct Calib2dGroup;
///
/// impl TypeGroup for Calib2dGroup {
///     fn name(&self) -> &str {
///         "calib2d"
///     }
///
///     // Calibration edges reference slam2d vertex types, by name only —
///     // there is no Cargo dependency on the crate providing them.
///     fn uses(&self) -> Vec<&str> {
///         vec!["slam2d"]
///     }
///
///     fn register(&self, registry: &mut TypeRegistry) -> Result<(), RegistryError> {
///         registry.register("EDGE_SE2_CALIB", EntityCategory::Edge, default_factory::<EdgeSe2Calib>())
///     }
/// }
/// ```
pub trait TypeGroup: Send + Sync + 'static {
    /// The group's unique name.
    fn name(&self) -> &str;

    /// Names of groups whose registration must complete before this group's
    /// body runs, in declaration order.
    ///
    /// This is an ordering constraint only: the named groups must be added
    /// to the same registrar by whoever assembles the process, but nothing
    /// here creates a compile- or link-time dependency on them.
    fn uses(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Registers this group's constructor slots.
    ///
    /// The body runs against a staging registry: if any registration fails,
    /// none of the group's tags become visible.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistryError`] raised by a registration call.
    fn register(&self, registry: &mut TypeRegistry) -> Result<(), RegistryError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// GroupState
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle state of a group within a registrar.
///
/// Each group transitions `NotStarted → InProgress → Done` exactly once.
/// Observing `InProgress` from a dependency chain is a cycle: the registrar
/// fails fast with [`GroupError::CyclicDependency`](crate::error::GroupError::CyclicDependency)
/// rather than deadlocking or silently truncating. A group left `InProgress`
/// after a failed registration is unusable; its staged tags were discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupState {
    /// Registration has not been requested yet.
    #[default]
    NotStarted,
    /// Dependencies are being resolved or the body is running.
    InProgress,
    /// The group's slots are committed to the registry.
    Done,
}
