//! Geometry kernel errors

/// Errors raised by the fallible kernel conversions
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// Octant codes only use the low three bits
    #[error("Invalid octant code: {0} (expected 0..=7)")]
    InvalidOctant(u8),
}
