//! Sandbox error types

use fvector3d::{Cube, Vt};

use crate::config::ConfigError;

/// Errors raised by the sandbox simulations
#[derive(thiserror::Error, Debug)]
pub enum SandboxError {
    /// Configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Item position outside the octree root bounds
    #[error("Position {position} lies outside octree bounds {bounds}")]
    OutOfBounds {
        /// Rejected position
        position: Vt,
        /// Root bounds of the octree
        bounds: Cube,
    },

    /// Key does not name a live octree item
    #[error("Unknown octree item")]
    UnknownItem,
}
