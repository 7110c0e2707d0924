//! Control points of a thread-tooth outline.

use crate::float_types::Real;
use nalgebra::Point2;

/// One control point of a tooth outline.
///
/// A point lives in the radius–axial plane of a single thread turn:
/// `radius` is the reference distance from the helix axis, `horz_offset`
/// a radial displacement from that reference and `vert_offset` an axial
/// displacement from the mid-plane of the turn. Keeping the reference
/// radius separate from the displacement lets a sweep collaborator taper
/// the offsets while holding the radius fixed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HelixLocation {
    pub radius: Real,
    pub horz_offset: Real,
    pub vert_offset: Real,
}

impl HelixLocation {
    pub const fn new(radius: Real, horz_offset: Real, vert_offset: Real) -> Self {
        HelixLocation {
            radius,
            horz_offset,
            vert_offset,
        }
    }

    /// The resolved 2D vertex `(radius + horz_offset, vert_offset)`.
    pub fn point2(&self) -> Point2<Real> {
        Point2::new(self.radius + self.horz_offset, self.vert_offset)
    }
}

/// One tooth outline, walking from the flank below the mid-plane, across
/// the tip (or its flat), to the flank above.
///
/// The variant records whether the side opposite the helix radius ends in
/// a point or a flat, so consumers pattern-match instead of branching on a
/// point count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThreadProfile {
    /// Pointed tooth: no flat survives on the far side.
    Triangular([HelixLocation; 3]),
    /// Truncated tooth: the far side carries a flat of nonzero width.
    Trapezoidal([HelixLocation; 4]),
}

impl ThreadProfile {
    /// The outline vertices in walk order.
    pub fn points(&self) -> &[HelixLocation] {
        match self {
            ThreadProfile::Triangular(pts) => pts,
            ThreadProfile::Trapezoidal(pts) => pts,
        }
    }

    /// 3 for [`Triangular`](ThreadProfile::Triangular), 4 for
    /// [`Trapezoidal`](ThreadProfile::Trapezoidal).
    pub const fn len(&self) -> usize {
        match self {
            ThreadProfile::Triangular(_) => 3,
            ThreadProfile::Trapezoidal(_) => 4,
        }
    }

    /// A profile always carries 3 or 4 points.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn is_trapezoidal(&self) -> bool {
        matches!(self, ThreadProfile::Trapezoidal(_))
    }
}

impl std::ops::Index<usize> for ThreadProfile {
    type Output = HelixLocation;

    fn index(&self, index: usize) -> &HelixLocation {
        &self.points()[index]
    }
}

impl<'a> IntoIterator for &'a ThreadProfile {
    type Item = &'a HelixLocation;
    type IntoIter = std::slice::Iter<'a, HelixLocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.points().iter()
    }
}
