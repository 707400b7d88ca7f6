//! Bit-coded octant and clamp-face masks
//!
//! Both masks share the same axis convention: axis `i` owns bit `i` in an
//! [`Octant`] and bits `2i`/`2i + 1` in a [`ClampFaces`] mask.

use bitflags::bitflags;

use crate::error::GeomError;

bitflags! {
    /// 3-bit octant code (0..=7) relative to a split point.
    ///
    /// A set bit for axis `i` means the octant lies on the `min` side of the
    /// split on that axis; a clear bit means the `max` side.
    ///
    /// Octant layout:
    /// 0: +X, +Y, +Z
    /// 1: -X, +Y, +Z
    /// 2: +X, -Y, +Z
    /// 3: -X, -Y, +Z
    /// 4: +X, +Y, -Z
    /// 5: -X, +Y, -Z
    /// 6: +X, -Y, -Z
    /// 7: -X, -Y, -Z
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Octant: u8 {
        /// Min side of the X axis
        const X = 1 << 0;
        /// Min side of the Y axis
        const Y = 1 << 1;
        /// Min side of the Z axis
        const Z = 1 << 2;
    }
}

impl Octant {
    /// Every octant code in ascending order
    pub const CODES: [Self; 8] = [
        Self::from_bits_retain(0),
        Self::from_bits_retain(1),
        Self::from_bits_retain(2),
        Self::from_bits_retain(3),
        Self::from_bits_retain(4),
        Self::from_bits_retain(5),
        Self::from_bits_retain(6),
        Self::from_bits_retain(7),
    ];

    /// The flag owned by `axis` (0, 1 or 2)
    pub const fn axis(axis: usize) -> Self {
        Self::from_bits_retain(1 << axis)
    }

    /// Whether this octant lies on the `min` side of `axis`
    pub const fn is_min_side(self, axis: usize) -> bool {
        self.contains(Self::axis(axis))
    }

    /// The code as an array index (0..=7)
    pub const fn index(self) -> usize {
        self.bits() as usize
    }
}

impl TryFrom<u8> for Octant {
    type Error = GeomError;

    fn try_from(code: u8) -> Result<Self, GeomError> {
        Self::from_bits(code).ok_or(GeomError::InvalidOctant(code))
    }
}

impl From<Octant> for u8 {
    fn from(value: Octant) -> Self {
        value.bits()
    }
}

bitflags! {
    /// Faces of a box that clamped a point in [`Vt::make_in`](crate::Vt::make_in).
    ///
    /// For axis `i`, bit `2i` means the point was below `min[i]` and bit
    /// `2i + 1` means it was above `max[i]`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClampFaces: u8 {
        /// Raised to `min.x`
        const X_LOW = 1 << 0;
        /// Lowered to `max.x`
        const X_HIGH = 1 << 1;
        /// Raised to `min.y`
        const Y_LOW = 1 << 2;
        /// Lowered to `max.y`
        const Y_HIGH = 1 << 3;
        /// Raised to `min.z`
        const Z_LOW = 1 << 4;
        /// Lowered to `max.z`
        const Z_HIGH = 1 << 5;
    }
}

impl ClampFaces {
    /// Low-face flag of `axis`
    pub const fn low(axis: usize) -> Self {
        Self::from_bits_retain(1 << (axis * 2))
    }

    /// High-face flag of `axis`
    pub const fn high(axis: usize) -> Self {
        Self::from_bits_retain(1 << (axis * 2 + 1))
    }

    /// Whether any face of `axis` clamped the point
    pub const fn touches_axis(self, axis: usize) -> bool {
        self.intersects(Self::low(axis).union(Self::high(axis)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octant_codes_cover_all_bits() {
        for (code, octant) in Octant::CODES.iter().enumerate() {
            assert_eq!(octant.index(), code);
        }
        assert_eq!(Octant::CODES[7], Octant::all());
        assert_eq!(Octant::axis(0), Octant::X);
        assert_eq!(Octant::axis(2), Octant::Z);
        assert!(Octant::CODES[5].is_min_side(0));
        assert!(!Octant::CODES[5].is_min_side(1));
        assert!(Octant::CODES[5].is_min_side(2));
    }

    #[test]
    fn test_octant_try_from() {
        assert_eq!(Octant::try_from(3_u8), Ok(Octant::X | Octant::Y));
        assert_eq!(Octant::try_from(8_u8), Err(GeomError::InvalidOctant(8)));
        assert_eq!(Octant::from_bits_truncate(0b1111_1010), Octant::Y);
        assert_eq!(u8::from(Octant::Z), 4);
    }

    #[test]
    fn test_clamp_face_layout() {
        assert_eq!(ClampFaces::low(0), ClampFaces::X_LOW);
        assert_eq!(ClampFaces::high(0), ClampFaces::X_HIGH);
        assert_eq!(ClampFaces::low(1), ClampFaces::Y_LOW);
        assert_eq!(ClampFaces::high(2).bits(), 32);
        assert_eq!(ClampFaces::all().bits(), 0b11_1111);

        let faces = ClampFaces::X_LOW | ClampFaces::Z_HIGH;
        assert!(faces.touches_axis(0));
        assert!(!faces.touches_axis(1));
        assert!(faces.touches_axis(2));
    }
}
