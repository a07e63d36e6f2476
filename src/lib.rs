//! An extensible type registry for pose-graph optimization entities.

pub use astrolabe_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use astrolabe_internal::prelude::*;
}
