//! # Sandbox App
//!
//! Host-side consumers of the `fvector3d` kernel: an octree spatial index
//! that subdivides by octant codes, and a turret that leads moving targets
//! with the intercept-time solver. File-backed configuration and logger
//! setup live here so the kernel itself stays free of I/O.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::float_cmp)]

pub mod config;
pub mod error;
pub mod logging;
pub mod octree;
pub mod turret;

pub use config::{Config, ConfigError, OctreeConfig, SandboxConfig, TurretConfig};
pub use error::SandboxError;
pub use octree::{ItemKey, Octree, OctreeItem, OctreeNode};
pub use turret::{aim, AimSolution, Shot, Target, Turret};

/// Common imports for sandbox binaries
pub mod prelude {
    pub use crate::{
        aim, AimSolution, Config, ConfigError, ItemKey, Octree, OctreeConfig, SandboxConfig,
        SandboxError, Shot, Target, Turret, TurretConfig,
    };
    pub use fvector3d::prelude::*;
}
