//! Conversions to nalgebra types and tolerance comparisons via `approx`
//!
//! `PartialEq` on [`Vt`] stays exact; these impls let callers opt into
//! tolerance explicitly with the `approx` macros.

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Point3, Vector3};

use crate::vector::Vt;

impl From<Vector3<f64>> for Vt {
    fn from(value: Vector3<f64>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Vt> for Vector3<f64> {
    fn from(value: Vt) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Point3<f64>> for Vt {
    fn from(value: Point3<f64>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Vt> for Point3<f64> {
    fn from(value: Vt) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl AbsDiffEq for Vt {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vt {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
