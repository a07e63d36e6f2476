//! Group registration errors.

use astrolabe_registry::RegistryError;

/// Error raised while resolving and running group registrations.
///
/// All of these indicate misconfigured extension modules and surface during
/// process startup; none are runtime conditions to recover from.
#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    /// A chain of `uses` declarations loops back on itself.
    ///
    /// The chain lists the groups along the cycle, outermost first, ending
    /// with the group that was already `InProgress`.
    #[error("cyclic group dependency: {}", .chain.join(" -> "))]
    CyclicDependency {
        /// Group names along the dependency chain.
        chain: Vec<String>,
    },

    /// `ensure_registered` was called for a name that was never added.
    #[error("unknown type group: '{0}'")]
    UnknownGroup(String),

    /// A group names a dependency that was never added to the registrar.
    #[error("group '{dependent}' uses unknown group '{dependency}'")]
    MissingDependency {
        /// The group whose dependency list could not be satisfied.
        dependent: String,
        /// The name that no added group carries.
        dependency: String,
    },

    /// A group's registration body failed; none of its tags were committed.
    #[error("registration of group '{group}' failed")]
    Registration {
        /// The failing group.
        group: String,
        /// The underlying registry conflict.
        #[source]
        source: RegistryError,
    },
}
