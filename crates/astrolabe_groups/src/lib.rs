//! Named registration groups and dependency resolution (Layer 2).
//!
//! Extension modules contribute their types to the registry in **groups**: a
//! named batch of tag registrations that runs exactly once, no matter how
//! many times or from how many places it is requested. A group can declare
//! "I use group X" purely by name, so a calibration module can rely on the
//! SLAM module's vertex types being registered first without any compile- or
//! link-time dependency between the two crates.
//!
//! # Philosophy
//!
//! **Everything is a group.** There is no built-in type set: the registrar
//! starts empty, and every tag — core or exotic — arrives through a
//! [`TypeGroup`]. Correctness never depends on module load order: each group
//! transitions `NotStarted → InProgress → Done` exactly once, dependencies
//! are resolved depth-first before a group's own body runs, and the final
//! registry contents are identical whichever group happens to be triggered
//! first.
//!
//! # Example
//!
//! ```
//! use astrolabe_groups::{Registrar, TypeGroup};
//! use astrolabe_registry::{default_factory, Entity, EntityCategory, RegistryError, TypeRegistry};
//!
//! #[derive(Debug, Default)]
//! struct VertexSe2;
//! impl Entity for VertexSe2 {}
//!
//! struct Slam2d;
//! impl TypeGroup for Slam2d {
//!     fn name(&self) -> &str {
//!         "slam2d"
//!     }
//!
//!     fn register(&self, registry: &mut TypeRegistry) -> Result<(), RegistryError> {
//!         registry.register("VERTEX_SE2", EntityCategory::Node, default_factory::<VertexSe2>())
//!     }
//! }
//!
//! let mut registrar = Registrar::new();
//! registrar.add_group(Slam2d);
//! let registry = registrar.finish().unwrap();
//! assert!(registry.construct("VERTEX_SE2").is_ok());
//! ```

/// The `TypeGroup` trait and group lifecycle states.
pub mod group;

/// Group registration errors.
pub mod error;

/// The registrar: group bookkeeping, dependency resolution, freezing.
pub mod registrar;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::error::GroupError;
    pub use crate::group::{GroupState, TypeGroup};
    pub use crate::registrar::Registrar;
}

pub use error::GroupError;
pub use group::{GroupState, TypeGroup};
pub use registrar::Registrar;
