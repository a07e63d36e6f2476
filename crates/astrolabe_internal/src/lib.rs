//! # Astrolabe Internal Library
//!
//! Re-exports the core Astrolabe crates for convenience.

/// Layer 1: entity model and tag-indexed constructor registry.
pub use astrolabe_registry;

/// Layer 2: named registration groups and dependency resolution.
pub use astrolabe_groups;

/// Layer 3: 2D SLAM type family (`slam2d` group).
pub use astrolabe_types_slam2d;

/// Layer 3: sensor calibration type family (`calib2d` group).
pub use astrolabe_types_calib2d;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use astrolabe_groups::prelude::*;
    pub use astrolabe_registry::prelude::*;
    pub use astrolabe_types_calib2d::Calib2dGroup;
    pub use astrolabe_types_slam2d::Slam2dGroup;
}
