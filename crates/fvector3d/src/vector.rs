//! Double-precision 3D vector
//!
//! [`Vt`] is a plain value type: three `f64` components, copied on every
//! use, compared exactly. Degenerate inputs follow IEEE-754 and are never
//! rejected; the few operations that guard against them say so explicitly.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cube::Cube;
use crate::octant::{ClampFaces, Octant};

/// 3D vector with `f64` components, indexed by axis (0 = x, 1 = y, 2 = z)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vt(pub [f64; 3]);

impl Vt {
    /// The zero vector
    pub const ZERO: Self = Self([0.0, 0.0, 0.0]);

    /// Unit vector along X
    pub const UNIT_X: Self = Self([1.0, 0.0, 0.0]);

    /// Unit vector along Y
    pub const UNIT_Y: Self = Self([0.0, 1.0, 0.0]);

    /// Unit vector along Z
    pub const UNIT_Z: Self = Self([0.0, 0.0, 1.0]);

    /// Create a vector from its components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    /// X component
    pub const fn x(self) -> f64 {
        self.0[0]
    }

    /// Y component
    pub const fn y(self) -> f64 {
        self.0[1]
    }

    /// Z component
    pub const fn z(self) -> f64 {
        self.0[2]
    }

    /// Exact comparison against [`Vt::ZERO`]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Euclidean norm
    pub fn abs(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared Euclidean distance to `other`
    pub fn sqd(self, other: Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(0.0, |sum, (p, q)| {
                let d = p - q;
                sum + d * d
            })
    }

    /// Euclidean distance to `other`
    pub fn len_to(self, other: Self) -> f64 {
        self.sqd(other).sqrt()
    }

    /// Scale this vector to unit length in place.
    ///
    /// A vector whose norm is not strictly positive (the zero vector, or one
    /// with NaN components) is left untouched.
    pub fn normalize(&mut self) {
        let d = self.abs();
        if d > 0.0 {
            *self /= d;
        }
    }

    /// Unit-length copy of this vector; the zero vector comes back unchanged
    #[must_use]
    pub fn normalized(self) -> Self {
        let d = self.abs();
        if d > 0.0 {
            self / d
        } else {
            self
        }
    }

    /// Copy of this vector scaled to length `l`.
    ///
    /// Returns the vector unchanged when its norm is zero.
    #[must_use]
    pub fn normalized_to(self, l: f64) -> Self {
        let d = self.abs() / l;
        if d == 0.0 {
            self
        } else {
            self / d
        }
    }

    /// Dot product
    pub fn dot(self, other: Self) -> f64 {
        self[0] * other[0] + self[1] * other[1] + self[2] * other[2]
    }

    /// Right-handed cross product
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self([
            self[1] * other[2] - self[2] * other[1],
            -self[0] * other[2] + self[2] * other[0],
            self[0] * other[1] - self[1] * other[0],
        ])
    }

    /// Reflect across the plane whose normal is `normal`.
    ///
    /// `normal` must already be unit length; it is not normalized here.
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        let d = 2.0 * self.dot(normal);
        Self([
            self[0] - d * normal[0],
            self[1] - d * normal[1],
            self[2] - d * normal[2],
        ])
    }

    /// Rotate by `theta` radians around `axis` (through the origin, right hand rule).
    ///
    /// Uses Glenn Murray's closed form for rotation about an arbitrary axis.
    /// The axis does not need to be unit length. A zero axis divides by zero
    /// and yields NaN components.
    #[must_use]
    pub fn rotate_around(self, axis: Self, theta: f64) -> Self {
        let [x, y, z] = self.0;
        let [u, v, w] = axis.0;

        let r2 = u * u + v * v + w * w;
        let r = r2.sqrt();
        let ct = theta.cos();
        let st = theta.sin() / r;
        let dt = (u * x + v * y + w * z) * (1.0 - ct) / r2;
        Self([
            u * dt + x * ct + (-w * y + v * z) * st,
            v * dt + y * ct + (w * x - u * z) * st,
            w * dt + z * ct + (-v * x + u * y) * st,
        ])
    }

    /// Unsigned angle to `other` in radians.
    ///
    /// NaN if either vector is zero. The cosine is not clamped, so rounding
    /// past +-1 also gives NaN.
    pub fn angle(self, other: Self) -> f64 {
        let l = self.abs() * other.abs();
        (self.dot(other) / l).acos()
    }

    /// Orthogonal projection onto `other`; projecting onto zero gives zero
    #[must_use]
    pub fn project(self, other: Self) -> Self {
        let n = other.normalized();
        n * self.dot(n)
    }

    /// Time until a projectile fired from `self` at `bullet_speed` meets a
    /// target at `dst_pos` moving with constant velocity `dst_vel`.
    ///
    /// Solves `a*t^2 + b*t + c = 0` with `a = |v|^2 - s^2`,
    /// `b = 2 v.(dst - src)`, `c = |dst - src|^2`. Of the roots `t1 = p - q`
    /// and `t2 = p + q`, `t2` wins only when `t1 > t2 && t2 > 0`; otherwise
    /// `t1` is taken. A negative or NaN pick returns [`f64::INFINITY`].
    pub fn calc_aim_ahead_dur(self, dst_pos: Self, dst_vel: Self, bullet_speed: f64) -> f64 {
        let to_target = dst_pos - self;
        let a = dst_vel.dot(dst_vel) - bullet_speed * bullet_speed;
        let b = 2.0 * dst_vel.dot(to_target);
        let c = to_target.dot(to_target);
        let p = -b / (2.0 * a);
        let q = (b * b - 4.0 * a * c).sqrt() / (2.0 * a);
        let t1 = p - q;
        let t2 = p + q;

        let rtn = if t1 > t2 && t2 > 0.0 { t2 } else { t1 };
        if rtn < 0.0 || rtn.is_nan() {
            log::trace!(
                "no intercept from {} to {dst_pos} moving {dst_vel} at speed {bullet_speed}",
                self
            );
            return f64::INFINITY;
        }
        rtn
    }

    /// Lossy integer form: each component truncated toward zero.
    ///
    /// Values outside the `i32` range saturate and NaN becomes 0.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_int32(self) -> [i32; 3] {
        [self[0] as i32, self[1] as i32, self[2] as i32]
    }

    /// Widen an integer triple back to a vector, no scale applied
    pub fn from_int32(s: [i32; 3]) -> Self {
        Self([f64::from(s[0]), f64::from(s[1]), f64::from(s[2])])
    }

    /// Random vector with every component drawn independently from `[lo, hi)`
    pub fn rand_vt<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> Self {
        Self::rand_vector(rng, Self([lo; 3]), Self([hi; 3]))
    }

    /// Random vector with component `i` drawn from `[lo[i], hi[i])`
    pub fn rand_vector<R: Rng + ?Sized>(rng: &mut R, lo: Self, hi: Self) -> Self {
        let mut rtn = Self::ZERO;
        for axis in 0..3 {
            rtn[axis] = rng.gen::<f64>() * (hi[axis] - lo[axis]) + lo[axis];
        }
        rtn
    }

    /// Octant of `other` relative to `self` taken as a split point.
    ///
    /// Bit `i` is set when `self[i] > other[i]` (strictly), which selects the
    /// `min` side of axis `i` in [`Cube::octant_box`].
    pub fn to_octant(self, other: Self) -> Octant {
        (0..3).fold(Octant::empty(), |code, axis| {
            if self[axis] > other[axis] {
                code | Octant::axis(axis)
            } else {
                code
            }
        })
    }

    /// Closed-interval point-in-box test
    pub fn is_in(self, cube: &Cube) -> bool {
        (0..3).all(|axis| cube.min[axis] <= self[axis] && self[axis] <= cube.max[axis])
    }

    /// Clamp this point into `cube` in place and report which faces clamped it
    pub fn make_in(&mut self, cube: &Cube) -> ClampFaces {
        let mut changed = ClampFaces::empty();
        for axis in 0..3 {
            if self[axis] > cube.max[axis] {
                self[axis] = cube.max[axis];
                changed |= ClampFaces::high(axis);
            }
            if self[axis] < cube.min[axis] {
                self[axis] = cube.min[axis];
                changed |= ClampFaces::low(axis);
            }
        }
        changed
    }
}

impl fmt::Display for Vt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:5.2},{:5.2},{:5.2}]", self[0], self[1], self[2])
    }
}

impl Index<usize> for Vt {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.0[axis]
    }
}

impl IndexMut<usize> for Vt {
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.0[axis]
    }
}

impl From<[f64; 3]> for Vt {
    fn from(value: [f64; 3]) -> Self {
        Self(value)
    }
}

impl From<Vt> for [f64; 3] {
    fn from(value: Vt) -> Self {
        value.0
    }
}

impl From<[i32; 3]> for Vt {
    fn from(value: [i32; 3]) -> Self {
        Self::from_int32(value)
    }
}

impl From<Vt> for [i32; 3] {
    fn from(value: Vt) -> Self {
        value.to_int32()
    }
}

impl Add for Vt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self([self[0] + rhs[0], self[1] + rhs[1], self[2] + rhs[2]])
    }
}

impl AddAssign for Vt {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self([self[0] - rhs[0], self[1] - rhs[1], self[2] - rhs[2]])
    }
}

impl SubAssign for Vt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Componentwise product
impl Mul for Vt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self([self[0] * rhs[0], self[1] * rhs[1], self[2] * rhs[2]])
    }
}

impl Mul<f64> for Vt {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self([self[0] * rhs, self[1] * rhs, self[2] * rhs])
    }
}

impl Mul<Vt> for f64 {
    type Output = Vt;

    fn mul(self, rhs: Vt) -> Vt {
        rhs * self
    }
}

impl MulAssign<f64> for Vt {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

/// Division by zero follows IEEE-754 (infinities or NaN)
impl Div<f64> for Vt {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self([self[0] / rhs, self[1] / rhs, self[2] / rhs])
    }
}

impl DivAssign<f64> for Vt {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Neg for Vt {
    type Output = Self;

    fn neg(self) -> Self {
        Self([-self[0], -self[1], -self[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_add_then_sub_is_exact() {
        let a = Vt::new(1.5, -2.25, 8.0);
        let b = Vt::new(0.5, 4.0, -3.75);
        assert_eq!(a + b - b, a);
        assert_eq!(-(-a), a);
        assert_eq!(a * Vt::new(2.0, 2.0, 2.0), a * 2.0);
        assert_eq!(a / 2.0, Vt::new(0.75, -1.125, 4.0));
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let v = Vt::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v[0], f64::INFINITY);
        assert_eq!(v[1], f64::NEG_INFINITY);
        assert!(v[2].is_nan());
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Vt::new(0.1 + 0.2, 0.0, 0.0);
        assert_ne!(a, Vt::new(0.3, 0.0, 0.0));
        assert!(Vt::ZERO.is_zero());
        assert!(Vt::new(-0.0, 0.0, 0.0).is_zero());
        assert!(!Vt::UNIT_Z.is_zero());
    }

    #[test]
    fn test_dot_and_cross_symmetry() {
        let a = Vt::new(1.3, -7.1, 2.9);
        let b = Vt::new(-0.4, 3.3, 5.7);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(Vt::UNIT_X.cross(Vt::UNIT_Y), Vt::UNIT_Z);
        assert_eq!(Vt::UNIT_Y.cross(Vt::UNIT_Z), Vt::UNIT_X);
        assert_eq!(Vt::UNIT_Z.cross(Vt::UNIT_X), Vt::UNIT_Y);
    }

    #[test]
    fn test_magnitudes() {
        let a = Vt::new(2.0, 3.0, 6.0);
        assert_eq!(a.abs(), 7.0);
        assert_eq!(a.abs(), a.dot(a).sqrt());
        assert_eq!(a.sqd(Vt::ZERO), 49.0);
        assert_eq!(Vt::new(1.0, 1.0, 1.0).len_to(Vt::new(3.0, 4.0, 7.0)), 7.0);
    }

    #[test]
    fn test_normalization_zero_guard() {
        let v = Vt::new(3.0, -4.0, 12.0);
        assert_relative_eq!(v.normalized().abs(), 1.0, epsilon = EPSILON);
        assert_eq!(Vt::ZERO.normalized(), Vt::ZERO);
        assert_eq!(Vt::ZERO.normalized_to(5.0), Vt::ZERO);

        let mut in_place = v;
        in_place.normalize();
        assert_eq!(in_place, v.normalized());

        let mut zero = Vt::ZERO;
        zero.normalize();
        assert_eq!(zero, Vt::ZERO);
    }

    #[test]
    fn test_normalized_to_length() {
        let v = Vt::new(0.0, 3.0, 4.0);
        assert_relative_eq!(v.normalized_to(10.0), Vt::new(0.0, 6.0, 8.0), epsilon = EPSILON);
        assert_relative_eq!(v.normalized_to(-5.0), -v, epsilon = EPSILON);
    }

    #[test]
    fn test_reflect_twice_is_identity() {
        let n = Vt::new(1.0, 2.0, 3.0).normalized();
        let v = Vt::new(-4.0, 0.5, 9.0);
        assert_relative_eq!(v.reflect(n).reflect(n), v, epsilon = EPSILON);
        assert_eq!(Vt::new(1.0, -1.0, 0.0).reflect(Vt::UNIT_Y), Vt::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotate_around() {
        let v = Vt::new(0.3, -1.2, 2.5);
        let axis = Vt::new(2.0, 1.0, -1.0);
        assert_eq!(v.rotate_around(axis, 0.0), v);
        assert_relative_eq!(
            v.rotate_around(axis, 0.7).rotate_around(axis, -0.7),
            v,
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Vt::UNIT_X.rotate_around(Vt::UNIT_Z, FRAC_PI_2),
            Vt::UNIT_Y,
            epsilon = EPSILON
        );
        // Unnormalized axis gives the same rotation
        assert_relative_eq!(
            v.rotate_around(axis * 7.5, 1.1),
            v.rotate_around(axis.normalized(), 1.1),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_rotate_around_zero_axis_propagates_nan() {
        let r = Vt::UNIT_X.rotate_around(Vt::ZERO, 1.0);
        assert!(r.0.iter().all(|c| c.is_nan()));
    }

    #[test]
    fn test_angle() {
        assert_relative_eq!(Vt::UNIT_X.angle(Vt::UNIT_Y), FRAC_PI_2, epsilon = EPSILON);
        assert_relative_eq!(Vt::UNIT_X.angle(-Vt::UNIT_X), PI, epsilon = EPSILON);
        assert!(Vt::ZERO.angle(Vt::UNIT_X).is_nan());
    }

    #[test]
    fn test_angle_cosine_is_not_clamped() {
        // dot / (|v| * |v|) rounds to 1.0000000000000002 for this vector
        let v = Vt::new(-7.312_715_117_751_976, 6.948_674_738_744_653_5, 5.275_492_379_532_281);
        assert!(v.dot(v) / (v.abs() * v.abs()) > 1.0);
        assert!(v.angle(v).is_nan());
    }

    #[test]
    fn test_project() {
        let v = Vt::new(3.0, 4.0, 5.0);
        assert_eq!(v.project(Vt::UNIT_X * 10.0), Vt::new(3.0, 0.0, 0.0));
        assert_eq!(v.project(Vt::ZERO), Vt::ZERO);
    }

    #[test]
    fn test_aim_ahead_stationary_target() {
        let t = Vt::ZERO.calc_aim_ahead_dur(Vt::new(10.0, 0.0, 0.0), Vt::ZERO, 2.0);
        assert_eq!(t, 5.0);
    }

    #[test]
    fn test_aim_ahead_fast_approaching_target_takes_first_root() {
        // Target outruns the bullet but closes in: both roots are positive
        let t = Vt::ZERO.calc_aim_ahead_dur(Vt::new(10.0, 0.0, 0.0), Vt::new(-3.0, 0.0, 0.0), 1.0);
        assert_eq!(t, 2.5);
    }

    #[test]
    fn test_aim_ahead_uses_shooter_position() {
        let src = Vt::new(5.0, 5.0, 5.0);
        let t = src.calc_aim_ahead_dur(Vt::new(5.0, 5.0, 11.0), Vt::ZERO, 3.0);
        assert_eq!(t, 2.0);
    }

    #[test]
    fn test_aim_ahead_sentinels() {
        // Negative discriminant: target crosses too fast
        let crossing = Vt::ZERO.calc_aim_ahead_dur(Vt::new(10.0, 0.0, 0.0), Vt::new(0.0, 5.0, 0.0), 1.0);
        assert_eq!(crossing, f64::INFINITY);

        // Both roots in the past: target running away faster than the bullet
        let fleeing = Vt::ZERO.calc_aim_ahead_dur(Vt::new(10.0, 0.0, 0.0), Vt::new(5.0, 0.0, 0.0), 1.0);
        assert_eq!(fleeing, f64::INFINITY);

        // a == 0: target speed equals bullet speed
        let matched = Vt::ZERO.calc_aim_ahead_dur(Vt::new(10.0, 0.0, 0.0), Vt::new(-1.0, 0.0, 0.0), 1.0);
        assert_eq!(matched, f64::INFINITY);
    }

    #[test]
    fn test_int32_round_trip() {
        let v = Vt::new(12.0, -7.0, 2_000_000.0);
        assert_eq!(Vt::from_int32(v.to_int32()), v);

        let lossy = Vt::new(1.9, -1.9, 0.0);
        assert_eq!(lossy.to_int32(), [1, -1, 0]);
        assert_eq!(Vt::from_int32(lossy.to_int32()), Vt::new(1.0, -1.0, 0.0));

        let wire: [i32; 3] = Vt::new(1e12, -1e12, f64::NAN).into();
        assert_eq!(wire, [i32::MAX, i32::MIN, 0]);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Vt::new(1.0, -2.5, 100.0).to_string(), "[ 1.00,-2.50,100.00]");
        assert_eq!(Vt::ZERO.to_string(), "[ 0.00, 0.00, 0.00]");
    }

    #[test]
    fn test_random_sampling_bounds_and_seeding() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let v = Vt::rand_vt(&mut rng, -3.0, 2.0);
            assert!(v.0.iter().all(|&c| (-3.0..2.0).contains(&c)));

            let lo = Vt::new(0.0, 10.0, -5.0);
            let hi = Vt::new(1.0, 20.0, -4.0);
            let w = Vt::rand_vector(&mut rng, lo, hi);
            for axis in 0..3 {
                assert!(lo[axis] <= w[axis] && w[axis] < hi[axis]);
            }
        }

        let a = Vt::rand_vt(&mut StdRng::seed_from_u64(42), 0.0, 1.0);
        let b = Vt::rand_vt(&mut StdRng::seed_from_u64(42), 0.0, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_to_octant_is_strict() {
        let center = Vt::new(1.0, 1.0, 1.0);
        assert_eq!(center.to_octant(center), Octant::empty());
        assert_eq!(center.to_octant(Vt::ZERO), Octant::all());
        assert_eq!(center.to_octant(Vt::new(0.0, 2.0, 1.0)), Octant::X);
        assert_eq!(center.to_octant(Vt::new(2.0, 0.0, 0.0)).bits(), 6);
    }

    #[test]
    fn test_make_in_reports_faces() {
        let cube = Cube::new(Vt::ZERO, Vt::new(1.0, 1.0, 1.0));
        let mut p = Vt::new(-1.0, 0.5, 2.0);
        let faces = p.make_in(&cube);
        assert_eq!(p, Vt::new(0.0, 0.5, 1.0));
        assert_eq!(faces, ClampFaces::X_LOW | ClampFaces::Z_HIGH);
        assert_eq!(faces.bits(), 0b10_0001);

        let mut inside = Vt::new(0.25, 0.5, 1.0);
        assert!(inside.make_in(&cube).is_empty());
        assert_eq!(inside, Vt::new(0.25, 0.5, 1.0));
    }

    #[test]
    fn test_make_in_inverted_box_checks_high_first() {
        let cube = Cube {
            min: Vt::new(1.0, 1.0, 1.0),
            max: Vt::ZERO,
        };
        let mut p = Vt::new(0.5, 0.5, 0.5);
        let faces = p.make_in(&cube);
        assert_eq!(faces, ClampFaces::all());
        assert_eq!(p, Vt::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_point_is_in_closed_interval() {
        let cube = Cube::new(Vt::ZERO, Vt::new(2.0, 2.0, 2.0));
        assert!(Vt::new(2.0, 0.0, 1.0).is_in(&cube));
        assert!(!Vt::new(2.0001, 0.0, 1.0).is_in(&cube));
        assert!(!Vt::new(1.0, f64::NAN, 1.0).is_in(&cube));
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Vt::new(1.25, -3.0, 1e-3);
        let text = ron::to_string(&v).expect("serialize");
        let back: Vt = ron::from_str(&text).expect("deserialize");
        assert_eq!(back, v);
    }
}
