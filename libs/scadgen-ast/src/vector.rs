//! # Spatial Vectors
//!
//! Immutable 2D/3D vector values used for coordinate storage and transform
//! computation. Components are stored in `glam` vectors; this module layers
//! the display and equality semantics the script generator depends on:
//!
//! - `Display` renders components with a fixed two-decimal precision and a
//!   locale-invariant `.` separator (Rust's formatting machinery never
//!   consults the host locale).
//! - `PartialEq` compares the *rendered* strings, so values that differ only
//!   beyond two decimal places compare equal. This is a deliberate
//!   precision-truncating equality, not exact value equality.
//! - `normalized` divides by the sum of absolute components (L1), not by the
//!   Euclidean length.

use config::constants::VECTOR_DISPLAY_PRECISION;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::matrix::Matrix;

/// A 3D vector with fixed-precision display semantics.
///
/// # Examples
/// ```
/// use scadgen_ast::Vector3;
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// assert_eq!(v.to_string(), "[1.00, 2.00, 3.00]");
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vector3(DVec3);

impl Vector3 {
    /// The origin.
    pub const ZERO: Self = Self(DVec3::ZERO);

    /// Creates a vector from its components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Creates a vector with all components set to `value`.
    #[inline]
    pub fn splat(value: f64) -> Self {
        Self(DVec3::splat(value))
    }

    /// Returns the X component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Returns the Y component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Returns the Z component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Dot product.
    ///
    /// # Examples
    /// ```
    /// use scadgen_ast::Vector3;
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// let b = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(b), 32.0);
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.0.dot(other.0)
    }

    /// Component-wise mean over a set of vectors.
    ///
    /// Returns `None` for an empty slice; a single element averages to
    /// itself.
    ///
    /// # Examples
    /// ```
    /// use scadgen_ast::Vector3;
    /// let mean = Vector3::average(&[
    ///     Vector3::new(0.0, 0.0, 0.0),
    ///     Vector3::new(2.0, 4.0, 6.0),
    /// ]);
    /// assert_eq!(mean, Some(Vector3::new(1.0, 2.0, 3.0)));
    /// assert_eq!(Vector3::average(&[]), None);
    /// ```
    pub fn average(values: &[Self]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sum = values.iter().fold(DVec3::ZERO, |acc, v| acc + v.0);
        Some(Self(sum / values.len() as f64))
    }

    /// Normalizes by the sum of absolute component values (L1).
    ///
    /// The zero vector is its own normalization. The L1 semantic is
    /// load-bearing for generated output; Euclidean normalization must not
    /// be substituted.
    ///
    /// # Examples
    /// ```
    /// use scadgen_ast::Vector3;
    /// let n = Vector3::new(3.0, 4.0, 0.0).normalized();
    /// assert!((n.x() - 3.0 / 7.0).abs() < 1e-12);
    /// assert!((n.y() - 4.0 / 7.0).abs() < 1e-12);
    /// ```
    pub fn normalized(self) -> Self {
        let sum = self.0.x.abs() + self.0.y.abs() + self.0.z.abs();
        if sum == 0.0 {
            return self;
        }
        Self(self.0 / sum)
    }

    /// Converts to a 4×1 homogeneous column matrix for transform
    /// composition.
    pub fn to_column_matrix(self) -> Matrix {
        let mut column = Matrix::new(4, 1);
        column.set(0, 0, self.0.x);
        column.set(1, 0, self.0.y);
        column.set(2, 0, self.0.z);
        column.set(3, 0, 1.0);
        column
    }
}

impl From<DVec3> for Vector3 {
    #[inline]
    fn from(value: DVec3) -> Self {
        Self(value)
    }
}

impl From<Vector3> for DVec3 {
    #[inline]
    fn from(value: Vector3) -> Self {
        value.0
    }
}

impl Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3(self * rhs.0)
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl Div<Vector3> for f64 {
    type Output = Vector3;
    #[inline]
    fn div(self, rhs: Vector3) -> Vector3 {
        Vector3(DVec3::splat(self) / rhs.0)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.p$}, {:.p$}, {:.p$}]",
            self.0.x,
            self.0.y,
            self.0.z,
            p = VECTOR_DISPLAY_PRECISION
        )
    }
}

/// Equality is defined over the rendered representation, so two vectors are
/// equal iff their two-decimal display strings match.
impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

/// A 2D vector with the same display and equality semantics as [`Vector3`].
///
/// # Examples
/// ```
/// use scadgen_ast::Vector2;
///
/// let v = Vector2::new(0.5, 1.5);
/// assert_eq!(v.to_string(), "[0.50, 1.50]");
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vector2(DVec2);

impl Vector2 {
    /// The origin.
    pub const ZERO: Self = Self(DVec2::ZERO);

    /// Creates a vector from its components.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Returns the X component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Returns the Y component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.0.dot(other.0)
    }

    /// Component-wise mean over a set of vectors; `None` for an empty slice.
    pub fn average(values: &[Self]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sum = values.iter().fold(DVec2::ZERO, |acc, v| acc + v.0);
        Some(Self(sum / values.len() as f64))
    }

    /// Normalizes by the sum of absolute component values (L1). The zero
    /// vector is returned unchanged.
    pub fn normalized(self) -> Self {
        let sum = self.0.x.abs() + self.0.y.abs();
        if sum == 0.0 {
            return self;
        }
        Self(self.0 / sum)
    }
}

impl From<DVec2> for Vector2 {
    #[inline]
    fn from(value: DVec2) -> Self {
        Self(value)
    }
}

impl From<Vector2> for DVec2 {
    #[inline]
    fn from(value: Vector2) -> Self {
        value.0
    }
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2(self * rhs.0)
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl Div<Vector2> for f64 {
    type Output = Vector2;
    #[inline]
    fn div(self, rhs: Vector2) -> Vector2 {
        Vector2(DVec2::splat(self) / rhs.0)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.p$}, {:.p$}]",
            self.0.x,
            self.0.y,
            p = VECTOR_DISPLAY_PRECISION
        )
    }
}

/// Equality over the rendered two-decimal representation.
impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_component_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vector3::new(4.0, 2.5, 2.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_scalar_operand_orders() {
        let v = Vector3::new(1.0, 2.0, 4.0);
        assert_eq!(v * 2.0, Vector3::new(2.0, 4.0, 8.0));
        assert_eq!(2.0 * v, Vector3::new(2.0, 4.0, 8.0));
        assert_eq!(v / 2.0, Vector3::new(0.5, 1.0, 2.0));
        assert_eq!(8.0 / v, Vector3::new(8.0, 4.0, 2.0));
    }

    #[test]
    fn test_normalization_is_l1() {
        // (3, 4) sums to 7, so components divide by 7 rather than by the
        // Euclidean length 5.
        let n = Vector2::new(3.0, 4.0).normalized();
        assert_relative_eq!(n.x(), 3.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(n.y(), 4.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalization_zero_vector_unchanged() {
        assert_eq!(Vector2::new(0.0, 0.0).normalized(), Vector2::ZERO);
        assert_eq!(Vector3::ZERO.normalized(), Vector3::ZERO);
    }

    #[test]
    fn test_normalization_negative_components() {
        let n = Vector3::new(-1.0, 1.0, 2.0).normalized();
        assert_relative_eq!(n.x(), -0.25, epsilon = 1e-12);
        assert_relative_eq!(n.y(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(n.z(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_average_empty_is_none() {
        assert_eq!(Vector3::average(&[]), None);
        assert_eq!(Vector2::average(&[]), None);
    }

    #[test]
    fn test_average_single_is_identity() {
        let v = Vector3::new(1.5, -2.0, 0.25);
        assert_eq!(Vector3::average(&[v]), Some(v));
    }

    #[test]
    fn test_average_multiple() {
        let mean = Vector2::average(&[Vector2::new(0.0, 2.0), Vector2::new(4.0, 2.0)]);
        assert_eq!(mean, Some(Vector2::new(2.0, 2.0)));
    }

    #[test]
    fn test_display_fixed_two_decimals() {
        assert_eq!(Vector3::new(1.0, 2.5, 3.125).to_string(), "[1.00, 2.50, 3.13]");
        assert_eq!(Vector2::new(0.0, -1.5).to_string(), "[0.00, -1.50]");
    }

    #[test]
    fn test_equality_truncates_beyond_two_decimals() {
        // Both round to 1.00 at display precision.
        assert_eq!(Vector2::new(1.004, 0.0), Vector2::new(1.001, 0.0));
        // 1.00 vs 1.01 differ at display precision.
        assert_ne!(Vector2::new(1.0, 0.0), Vector2::new(1.01, 0.0));
    }

    #[test]
    fn test_dot_product() {
        assert_eq!(Vector2::new(1.0, 2.0).dot(Vector2::new(3.0, 4.0)), 11.0);
    }

    #[test]
    fn test_column_matrix_is_homogeneous() {
        let column = Vector3::new(1.0, 2.0, 3.0).to_column_matrix();
        assert_eq!(column.rows(), 4);
        assert_eq!(column.cols(), 1);
        assert_eq!(column.get(0, 0), 1.0);
        assert_eq!(column.get(3, 0), 1.0);
    }
}
