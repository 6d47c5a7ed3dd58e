//! # Matrix
//!
//! A row-major 2D numeric grid used by transform nodes for affine position
//! and bounding-box computation. Row and column counts are supplied at
//! construction; the affine constructors below produce the 4×4 matrices the
//! transform nodes compose with homogeneous column vectors.
//!
//! This algebra is a computational collaborator of the node tree; it never
//! participates in the rendering contract.

use thiserror::Error;

use crate::vector::Vector3;

/// Errors raised when matrix algebra is misused.
#[derive(Debug, Error, PartialEq)]
pub enum MatrixError {
    /// Multiplication requires the left column count to match the right row
    /// count.
    #[error("cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}")]
    DimensionMismatch {
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },
}

/// A row-major numeric grid.
///
/// # Examples
/// ```
/// use scadgen_ast::Matrix;
///
/// let mut m = Matrix::new(2, 2);
/// m.set(0, 1, 5.0);
/// assert_eq!(m.get(0, 1), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a zero-filled matrix with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates an `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Returns the row count.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the column count.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Reads the cell at `(row, col)`. Out-of-range cells read as zero.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row >= self.rows || col >= self.cols {
            return 0.0;
        }
        self.data[row * self.cols + col]
    }

    /// Writes the cell at `(row, col)`. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
        }
    }

    /// Matrix product `self × rhs`.
    ///
    /// # Examples
    /// ```
    /// use scadgen_ast::{Matrix, Vector3};
    ///
    /// let t = Matrix::translation(Vector3::new(1.0, 0.0, 0.0));
    /// let column = Vector3::ZERO.to_column_matrix();
    /// let moved = t.mul(&column).unwrap();
    /// assert_eq!(moved.get(0, 0), 1.0);
    /// ```
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: rhs.rows,
                right_cols: rhs.cols,
            });
        }
        let mut out = Matrix::new(self.rows, rhs.cols);
        for r in 0..self.rows {
            for c in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(r, k) * rhs.get(k, c);
                }
                out.set(r, c, sum);
            }
        }
        Ok(out)
    }

    /// Interprets a column matrix as a 3D point (first three rows).
    pub fn to_vector3(&self) -> Vector3 {
        Vector3::new(self.get(0, 0), self.get(1, 0), self.get(2, 0))
    }

    /// Applies a 4×4 affine matrix to a point without the intermediate
    /// column allocation.
    pub fn apply_point(&self, point: Vector3) -> Vector3 {
        let p = [point.x(), point.y(), point.z(), 1.0];
        let mut out = [0.0; 3];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|col| self.get(row, col) * p[col]).sum();
        }
        Vector3::new(out[0], out[1], out[2])
    }

    /// 4×4 translation matrix.
    pub fn translation(offset: Vector3) -> Self {
        let mut m = Self::identity(4);
        m.set(0, 3, offset.x());
        m.set(1, 3, offset.y());
        m.set(2, 3, offset.z());
        m
    }

    /// 4×4 non-uniform scaling matrix.
    pub fn scaling(factors: Vector3) -> Self {
        let mut m = Self::identity(4);
        m.set(0, 0, factors.x());
        m.set(1, 1, factors.y());
        m.set(2, 2, factors.z());
        m
    }

    /// 4×4 rotation about the X axis, in degrees.
    pub fn rotation_x(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let mut m = Self::identity(4);
        m.set(1, 1, cos);
        m.set(1, 2, -sin);
        m.set(2, 1, sin);
        m.set(2, 2, cos);
        m
    }

    /// 4×4 rotation about the Y axis, in degrees.
    pub fn rotation_y(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let mut m = Self::identity(4);
        m.set(0, 0, cos);
        m.set(0, 2, sin);
        m.set(2, 0, -sin);
        m.set(2, 2, cos);
        m
    }

    /// 4×4 rotation about the Z axis, in degrees.
    pub fn rotation_z(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let mut m = Self::identity(4);
        m.set(0, 0, cos);
        m.set(0, 1, -sin);
        m.set(1, 0, sin);
        m.set(1, 1, cos);
        m
    }

    /// Combined XYZ euler rotation (degrees), applied as Z·Y·X like the
    /// target language's `rotate([x, y, z])`.
    pub fn rotation(angles: Vector3) -> Self {
        let zy = match Self::rotation_z(angles.z()).mul(&Self::rotation_y(angles.y())) {
            Ok(m) => m,
            Err(_) => Self::identity(4),
        };
        match zy.mul(&Self::rotation_x(angles.x())) {
            Ok(m) => m,
            Err(_) => Self::identity(4),
        }
    }

    /// 4×4 reflection across the plane through the origin with the given
    /// normal. A zero normal yields the identity.
    pub fn mirror(normal: Vector3) -> Self {
        let len_sq = normal.dot(normal);
        if len_sq == 0.0 {
            return Self::identity(4);
        }
        let n = [normal.x(), normal.y(), normal.z()];
        let mut m = Self::identity(4);
        for r in 0..3 {
            for c in 0..3 {
                let householder = if r == c { 1.0 } else { 0.0 } - 2.0 * n[r] * n[c] / len_sq;
                m.set(r, c, householder);
            }
        }
        m
    }
}
