//! Axis-aligned bounding boxes for tree nodes.
//!
//! Leaf nodes compute exact boxes from their own geometry; transform and
//! composite nodes approximate from descendants. Hull and Minkowski blocks
//! use the same child-envelope approximation, since real geometric
//! computation belongs to the external modeling engine.

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::vector::Vector3;

/// An axis-aligned box spanned by a minimum and maximum corner.
///
/// # Examples
/// ```
/// use scadgen_ast::{Bounds, Vector3};
///
/// let b = Bounds::new(Vector3::ZERO, Vector3::new(1.0, 2.0, 3.0));
/// assert_eq!(b.size(), Vector3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min: Vector3,
    max: Vector3,
}

impl Bounds {
    /// Builds a box from two corners, normalizing so `min` holds the
    /// component-wise minimum.
    pub fn new(a: Vector3, b: Vector3) -> Self {
        Self {
            min: Vector3::new(a.x().min(b.x()), a.y().min(b.y()), a.z().min(b.z())),
            max: Vector3::new(a.x().max(b.x()), a.y().max(b.y()), a.z().max(b.z())),
        }
    }

    /// The degenerate box at the origin.
    pub fn empty() -> Self {
        Self {
            min: Vector3::ZERO,
            max: Vector3::ZERO,
        }
    }

    /// Returns the minimum corner.
    #[inline]
    pub fn min(&self) -> Vector3 {
        self.min
    }

    /// Returns the maximum corner.
    #[inline]
    pub fn max(&self) -> Vector3 {
        self.max
    }

    /// Edge lengths along each axis.
    #[inline]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Geometric center of the box.
    #[inline]
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) / 2.0
    }

    /// Smallest box containing both operands.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: Vector3::new(
                self.min.x().min(other.min.x()),
                self.min.y().min(other.min.y()),
                self.min.z().min(other.min.z()),
            ),
            max: Vector3::new(
                self.max.x().max(other.max.x()),
                self.max.y().max(other.max.y()),
                self.max.z().max(other.max.z()),
            ),
        }
    }

    /// Box spanned by all eight corners pushed through an affine matrix.
    pub fn transformed(&self, matrix: &Matrix) -> Bounds {
        let corners = [
            Vector3::new(self.min.x(), self.min.y(), self.min.z()),
            Vector3::new(self.max.x(), self.min.y(), self.min.z()),
            Vector3::new(self.min.x(), self.max.y(), self.min.z()),
            Vector3::new(self.max.x(), self.max.y(), self.min.z()),
            Vector3::new(self.min.x(), self.min.y(), self.max.z()),
            Vector3::new(self.max.x(), self.min.y(), self.max.z()),
            Vector3::new(self.min.x(), self.max.y(), self.max.z()),
            Vector3::new(self.max.x(), self.max.y(), self.max.z()),
        ];
        let mut moved = corners.iter().map(|c| matrix.apply_point(*c));
        let first = match moved.next() {
            Some(corner) => corner,
            None => return Bounds::empty(),
        };
        let mut out = Bounds::new(first, first);
        for corner in moved {
            out = out.union(&Bounds::new(corner, corner));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_corners() {
        let b = Bounds::new(Vector3::new(1.0, -1.0, 5.0), Vector3::new(0.0, 2.0, 3.0));
        assert_eq!(b.min(), Vector3::new(0.0, -1.0, 3.0));
        assert_eq!(b.max(), Vector3::new(1.0, 2.0, 5.0));
    }

    #[test]
    fn test_union_spans_both() {
        let a = Bounds::new(Vector3::ZERO, Vector3::new(1.0, 1.0, 1.0));
        let b = Bounds::new(Vector3::new(2.0, -1.0, 0.0), Vector3::new(3.0, 0.0, 4.0));
        let joined = a.union(&b);
        assert_eq!(joined.min(), Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(joined.max(), Vector3::new(3.0, 1.0, 4.0));
    }

    #[test]
    fn test_center_and_size() {
        let b = Bounds::new(Vector3::new(-1.0, -2.0, -3.0), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(b.center(), Vector3::ZERO);
        assert_eq!(b.size(), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_transformed_translation() {
        let b = Bounds::new(Vector3::ZERO, Vector3::new(1.0, 1.0, 1.0));
        let t = Matrix::translation(Vector3::new(5.0, 0.0, 0.0));
        let moved = b.transformed(&t);
        assert_eq!(moved.min(), Vector3::new(5.0, 0.0, 0.0));
        assert_eq!(moved.max(), Vector3::new(6.0, 1.0, 1.0));
    }

    #[test]
    fn test_transformed_rotation_reorders_corners() {
        let b = Bounds::new(Vector3::ZERO, Vector3::new(2.0, 1.0, 1.0));
        let r = Matrix::rotation_z(90.0);
        let turned = b.transformed(&r);
        // The long X edge now spans Y; X spans the rotated -1..0 range.
        assert_eq!(turned.min(), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(turned.max(), Vector3::new(0.0, 2.0, 1.0));
    }
}
