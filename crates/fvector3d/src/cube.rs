//! Axis-aligned bounding box built on [`Vt`]
//!
//! Constructors always produce `min[i] <= max[i]` on every axis. Building
//! a [`Cube`] from its public fields skips that normalization on purpose.
//! Center, diagonal and size are derived from the corners on every call.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::octant::Octant;
use crate::vector::Vt;

/// Axis-aligned box given by its minimum and maximum corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cube {
    /// Minimum corner
    pub min: Vt,
    /// Maximum corner
    pub max: Vt,
}

impl Cube {
    /// Normalized box spanning two arbitrary corners
    pub fn new(v1: Vt, v2: Vt) -> Self {
        let mut rtn = Self::default();
        for axis in 0..3 {
            if v1[axis] > v2[axis] {
                rtn.max[axis] = v1[axis];
                rtn.min[axis] = v2[axis];
            } else {
                rtn.max[axis] = v2[axis];
                rtn.min[axis] = v1[axis];
            }
        }
        rtn
    }

    /// Cube of half-width `r` around `c` on all three axes
    pub fn from_center_radius(c: Vt, r: f64) -> Self {
        Self {
            min: Vt::new(c[0] - r, c[1] - r, c[2] - r),
            max: Vt::new(c[0] + r, c[1] + r, c[2] + r),
        }
    }

    /// Midpoint of the two corners
    pub fn center(&self) -> Vt {
        (self.min + self.max) / 2.0
    }

    /// Length of the space diagonal
    pub fn diag_len(&self) -> f64 {
        self.min.len_to(self.max)
    }

    /// Per-axis extents
    pub fn size_vector(&self) -> Vt {
        self.max - self.min
    }

    /// Whether a sphere at `c` with radius `r` may touch this box.
    ///
    /// The box is approximated by its circumscribed sphere, so this never
    /// misses a real contact but can report one near corners and edges.
    pub fn is_contact(&self, c: Vt, r: f64) -> bool {
        self.diag_len() / 2.0 + r >= self.center().len_to(c)
    }

    /// Closed-interval overlap on all three axes; touching faces overlap
    pub fn is_overlap(&self, other: &Self) -> bool {
        !(0..3).any(|axis| self.min[axis] > other.max[axis] || self.max[axis] < other.min[axis])
    }

    /// Whether this box lies entirely inside `other` (closed intervals)
    pub fn is_in(&self, other: &Self) -> bool {
        (0..3).all(|axis| self.min[axis] >= other.min[axis] && self.max[axis] <= other.max[axis])
    }

    /// Uniform random point inside the box, axis `i` drawn from `[min[i], max[i])`
    pub fn rand_vector<R: Rng + ?Sized>(&self, rng: &mut R) -> Vt {
        Vt::rand_vector(rng, self.min, self.max)
    }

    /// Copy of this box translated by `v`
    #[must_use]
    pub fn translated(&self, v: Vt) -> Self {
        Self {
            min: self.min + v,
            max: self.max + v,
        }
    }

    /// Copy of this box scaled by `factor` about its own center
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let hs = self.size_vector() * (factor / 2.0);
        let hc = self.center();
        Self {
            min: hc - hs,
            max: hc + hs,
        }
    }

    /// Child box for `octant` when this box is split at `center`.
    ///
    /// On axis `i` the child spans from `center[i]` to `min[i]` if the
    /// octant's bit `i` is set, otherwise to `max[i]`. The result is
    /// normalized, so a split point outside the box still yields a valid
    /// (if meaningless) box.
    pub fn octant_box(&self, center: Vt, octant: Octant) -> Self {
        if !center.is_in(self) {
            log::debug!("splitting {} at {center}, which lies outside the box", self);
        }
        let mut corner = Vt::ZERO;
        for axis in 0..3 {
            corner[axis] = if octant.is_min_side(axis) {
                self.min[axis]
            } else {
                self.max[axis]
            };
        }
        Self::new(center, corner)
    }

    /// All eight children of a split at `center`, indexed by octant code
    pub fn octants(&self, center: Vt) -> [Self; 8] {
        Octant::CODES.map(|octant| self.octant_box(center, octant))
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}
