//! Transform wrapper construction, rendering, and spatial math.
//!
//! Every fluent method returns a NEW single-child wrapper around the
//! receiver; the receiver's own structure is untouched (its parent link
//! moves to the wrapper, recording the most recent attachment point).
//! Rendered transform calls use the two-decimal vector display and apply to
//! the statement that follows them, so nesting transforms produces valid
//! sequential prefix calls.

use config::constants::DEFAULT_RESOLUTION;

use crate::bounds::Bounds;
use crate::matrix::Matrix;
use crate::render::{fmt_float_fixed, fmt_float_full};
use crate::vector::Vector3;

use super::{ObjectKind, ScadObject};

impl ScadObject {
    /// Wraps the receiver in a translation.
    pub fn translate(&self, offset: Vector3) -> ScadObject {
        self.wrap(ObjectKind::Translate { offset })
    }

    /// Wraps the receiver in an euler rotation (degrees).
    pub fn rotate(&self, angles: Vector3) -> ScadObject {
        self.wrap(ObjectKind::Rotate { angles })
    }

    /// Rotation about the Z axis only, the common planar case.
    pub fn rotate_z(&self, angle: f64) -> ScadObject {
        self.rotate(Vector3::new(0.0, 0.0, angle))
    }

    /// Wraps the receiver in a non-uniform scale.
    pub fn scale(&self, factors: Vector3) -> ScadObject {
        self.wrap(ObjectKind::Scale { factors })
    }

    /// Uniform scale across all axes.
    pub fn scale_uniform(&self, factor: f64) -> ScadObject {
        self.scale(Vector3::splat(factor))
    }

    /// Wraps the receiver in a reflection across the plane with the given
    /// normal.
    pub fn mirror(&self, normal: Vector3) -> ScadObject {
        self.wrap(ObjectKind::Mirror { normal })
    }

    /// Wraps the receiver in a resize to the given extents.
    pub fn resize(&self, size: Vector3) -> ScadObject {
        self.wrap(ObjectKind::Resize { size })
    }

    /// Wraps the receiver in a color modifier. `opacity` is clamped to the
    /// renderable `0.0..=1.0` range by the target language, not here.
    pub fn color(&self, name: impl Into<String>, opacity: f64) -> ScadObject {
        self.wrap(ObjectKind::Color {
            color: name.into(),
            opacity,
        })
    }

    /// Linear extrusion with the default resolution and no direction vector.
    pub fn linear_extrude(&self, height: f64) -> ScadObject {
        self.linear_extrude_with(height, None, DEFAULT_RESOLUTION)
    }

    /// Linear extrusion with an optional direction vector and explicit
    /// resolution.
    pub fn linear_extrude_with(
        &self,
        height: f64,
        direction: Option<Vector3>,
        resolution: u32,
    ) -> ScadObject {
        self.wrap(ObjectKind::LinearExtrude {
            height,
            direction,
            resolution,
        })
    }

    /// Rotational extrusion through `angle` degrees with the default
    /// resolution.
    pub fn rotate_extrude(&self, angle: f64) -> ScadObject {
        self.rotate_extrude_with(angle, DEFAULT_RESOLUTION)
    }

    /// Rotational extrusion with explicit resolution.
    pub fn rotate_extrude_with(&self, angle: f64, resolution: u32) -> ScadObject {
        self.wrap(ObjectKind::RotateExtrude { angle, resolution })
    }
}

/// Call text for a transform statement, without the trailing child.
pub(super) fn call_text(kind: &ObjectKind) -> String {
    match kind {
        ObjectKind::Translate { offset } => format!("translate(v = {offset})"),
        ObjectKind::Rotate { angles } => format!("rotate(a = {angles})"),
        ObjectKind::Scale { factors } => format!("scale(v = {factors})"),
        ObjectKind::Mirror { normal } => format!("mirror(v = {normal})"),
        ObjectKind::Resize { size } => format!("resize(newsize = {size})"),
        ObjectKind::Color { color, opacity } => {
            format!("color(\"{color}\", {})", fmt_float_fixed(*opacity))
        }
        ObjectKind::LinearExtrude {
            height,
            direction,
            resolution,
        } => match direction {
            Some(v) => format!(
                "linear_extrude(height = {}, v = {v}, $fn = {resolution})",
                fmt_float_full(*height)
            ),
            None => format!(
                "linear_extrude(height = {}, $fn = {resolution})",
                fmt_float_full(*height)
            ),
        },
        ObjectKind::RotateExtrude { angle, resolution } => format!(
            "rotate_extrude(angle = {}, $fn = {resolution})",
            fmt_float_full(*angle)
        ),
        other => {
            debug_assert!(false, "not a transform kind: {other:?}");
            String::new()
        }
    }
}

/// The affine matrix of a spatial transform, `None` for pass-through or
/// child-dependent kinds.
fn affine(kind: &ObjectKind) -> Option<Matrix> {
    match kind {
        ObjectKind::Translate { offset } => Some(Matrix::translation(*offset)),
        ObjectKind::Rotate { angles } => Some(Matrix::rotation(*angles)),
        ObjectKind::Scale { factors } => Some(Matrix::scaling(*factors)),
        ObjectKind::Mirror { normal } => Some(Matrix::mirror(*normal)),
        _ => None,
    }
}

/// Scale factors that stretch `child` bounds onto the resize target. Axes
/// with zero extent (or a zero target, meaning "keep") stay at factor 1.
fn resize_factors(target: Vector3, child: &Bounds) -> Vector3 {
    let current = child.size();
    let factor = |cur: f64, want: f64| {
        if cur == 0.0 || want == 0.0 {
            1.0
        } else {
            want / cur
        }
    };
    Vector3::new(
        factor(current.x(), target.x()),
        factor(current.y(), target.y()),
        factor(current.z(), target.z()),
    )
}

/// Nominal position of a transform node: the child's position pushed
/// through this transform's math.
pub(super) fn position(kind: &ObjectKind, child: Option<&ScadObject>) -> Vector3 {
    let child_position = child.map(ScadObject::position).unwrap_or(Vector3::ZERO);
    if let Some(matrix) = affine(kind) {
        return matrix.apply_point(child_position);
    }
    match kind {
        ObjectKind::Resize { size } => {
            let child_bounds = child.map(ScadObject::bounds).unwrap_or_else(Bounds::empty);
            Matrix::scaling(resize_factors(*size, &child_bounds)).apply_point(child_position)
        }
        ObjectKind::LinearExtrude { height, .. } => {
            Vector3::new(child_position.x(), child_position.y(), height / 2.0)
        }
        // Color and rotational extrusion keep the child's nominal location.
        _ => child_position,
    }
}

/// Bounding box of a transform node.
pub(super) fn bounds(kind: &ObjectKind, child: Option<&ScadObject>) -> Bounds {
    let child_bounds = child.map(ScadObject::bounds).unwrap_or_else(Bounds::empty);
    if let Some(matrix) = affine(kind) {
        return child_bounds.transformed(&matrix);
    }
    match kind {
        ObjectKind::Resize { size } => {
            child_bounds.transformed(&Matrix::scaling(resize_factors(*size, &child_bounds)))
        }
        ObjectKind::LinearExtrude { height, .. } => Bounds::new(
            Vector3::new(child_bounds.min().x(), child_bounds.min().y(), 0.0),
            Vector3::new(child_bounds.max().x(), child_bounds.max().y(), *height),
        ),
        ObjectKind::RotateExtrude { .. } => {
            // Revolving around Z: the X extent becomes the radius, the 2D Y
            // extent becomes the Z span.
            let radius = child_bounds.max().x().abs().max(child_bounds.min().x().abs());
            Bounds::new(
                Vector3::new(-radius, -radius, child_bounds.min().y()),
                Vector3::new(radius, radius, child_bounds.max().y()),
            )
        }
        _ => child_bounds,
    }
}
