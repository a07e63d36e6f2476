//! Tag-indexed constructor registry for pose-graph entities (Layer 1).
//!
//! `astrolabe_registry` is the core of Astrolabe: a process-wide table that
//! maps human-readable tag strings (the identifiers found in serialized
//! graphs) to zero-argument constructors for polymorphic graph entities —
//! vertices, edges, and parameter blocks. A graph loader that knows nothing
//! about concrete types at compile time asks the registry to turn a tag into
//! a live object.
//!
//! # Core Concepts
//!
//! - [`Entity`] - Opaque, downcastable handle produced by a constructor
//! - [`EntityCategory`] - Whether a tag names a node, edge, parameter, or action
//! - [`ConstructorSlot`] - One immutable tag→factory binding
//! - [`TypeRegistry`] - The tag→slot map plus the action side-table
//! - [`RegistryError`] - Registration and construction failures
//!
//! # Example
//!
//! ```
//! use astrolabe_registry::{default_factory, Entity, EntityCategory, TypeRegistry};
//!
//! #[derive(Debug, Default)]
//! struct VertexSe2 {
//!     pose: [f64; 3],
//! }
//! impl Entity for VertexSe2 {}
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register("VERTEX_SE2", EntityCategory::Node, default_factory::<VertexSe2>())
//!     .unwrap();
//!
//! let entity = registry.construct("VERTEX_SE2").unwrap();
//! assert!(entity.downcast_ref::<VertexSe2>().is_some());
//! ```
//!
//! # Architecture
//!
//! This crate is Layer 1 of the Astrolabe architecture:
//!
//! - **Layer 1** (`astrolabe_registry`): entity model and constructor table (this crate)
//! - **Layer 2** (`astrolabe_groups`): named registration groups and dependency resolution
//! - **Layer 3** (`astrolabe_types_*`): concrete type families contributed by extension modules
//!
//! Registration happens through `&mut TypeRegistry` during a single-threaded
//! startup phase (normally driven by `astrolabe_groups`). Afterwards the
//! registry is frozen behind an `Arc` and lookups from any number of worker
//! threads are plain `&self` reads.

/// Entity traits, categories, and factory signatures.
pub mod entity;

/// Registration and construction errors.
pub mod error;

/// The constructor registry and its slots.
pub mod registry;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::entity::{
        ActionFactory, Entity, EntityAction, EntityCategory, EntityFactory, default_factory,
    };
    pub use crate::error::RegistryError;
    pub use crate::registry::{ConstructorSlot, TypeRegistry};
}

pub use entity::{ActionFactory, Entity, EntityAction, EntityCategory, EntityFactory, default_factory};
pub use error::RegistryError;
pub use registry::{ConstructorSlot, TypeRegistry};
