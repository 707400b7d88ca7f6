//! # fvector3d
//!
//! Double-precision 3D geometry kernel: a vector type ([`Vt`]) and an
//! axis-aligned box ([`Cube`]) with the queries a spatial index or a game
//! AI layer builds on.
//!
//! ## Features
//!
//! - **Vector algebra**: arithmetic operators, norms, dot/cross, reflection,
//!   arbitrary-axis rotation, projection, intercept-time solving
//! - **Boxes**: normalizing constructors, overlap and containment tests,
//!   point clamping with per-face reporting
//! - **Octants**: one shared bit convention for classifying a point
//!   ([`Vt::to_octant`]) and building the matching child box
//!   ([`Cube::octant_box`])
//!
//! All operations are pure value computations. Degenerate input follows
//! IEEE-754 (NaN and infinities propagate) except
//! [`Vt::calc_aim_ahead_dur`], which reports "no intercept" as
//! [`f64::INFINITY`]. Random sampling takes the generator as an argument.
//!
//! ```rust
//! use fvector3d::prelude::*;
//!
//! let world = Cube::new(Vt::new(-50.0, -50.0, -50.0), Vt::new(50.0, 50.0, 50.0));
//! let center = world.center();
//! let point = Vt::new(10.0, -20.0, 5.0);
//!
//! let octant = center.to_octant(point);
//! let child = world.octant_box(center, octant);
//! assert!(point.is_in(&child));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::float_cmp)]

pub mod cube;
pub mod error;
pub mod octant;
pub mod vector;

mod interop;

pub use cube::Cube;
pub use error::GeomError;
pub use octant::{ClampFaces, Octant};
pub use vector::Vt;

/// Common imports for kernel users
pub mod prelude {
    pub use crate::{ClampFaces, Cube, GeomError, Octant, Vt};
}
