//! Registration and construction errors.

use crate::entity::EntityCategory;

/// Error raised by [`TypeRegistry`](crate::registry::TypeRegistry) operations.
///
/// Registration failures (`DuplicateTag`, `ActionCategory`) indicate a
/// build/module conflict and are surfaced immediately, never swallowed.
/// Construction failures (`UnknownTag`, `CategoryMismatch`) are per-entity
/// and recoverable: a graph loader typically reports them for the offending
/// element without aborting the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two different bindings claim the same tag.
    ///
    /// The first registration stays authoritative; the conflicting one is
    /// rejected in full.
    #[error("tag '{tag}' is already registered as a {existing}")]
    DuplicateTag {
        /// The contested tag.
        tag: String,
        /// Category of the binding that already owns the tag.
        existing: EntityCategory,
    },

    /// Lookup or construction for a tag that was never registered.
    #[error("unknown tag: '{0}'")]
    UnknownTag(String),

    /// The tag exists, but under a different category than the caller expects.
    #[error("tag '{tag}' is registered as a {found}, expected a {expected}")]
    CategoryMismatch {
        /// The requested tag.
        tag: String,
        /// Category the caller asked for.
        expected: EntityCategory,
        /// Category the tag is actually bound under.
        found: EntityCategory,
    },

    /// `register` was called with [`EntityCategory::Action`].
    ///
    /// Actions annotate entity tags and live in a side-table; routing them
    /// through the constructor table would collide with the entity they
    /// annotate. Use
    /// [`register_action`](crate::registry::TypeRegistry::register_action).
    #[error("tag '{0}': actions are registered through register_action, not register")]
    ActionCategory(String),
}
