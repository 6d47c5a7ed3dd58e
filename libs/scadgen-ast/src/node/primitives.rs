//! Leaf primitive constructors and their statement rendering.
//!
//! Leaf geometric data renders at full numeric precision. The two-decimal
//! vector display used by transform parameters does not apply here; the two
//! formatting paths are deliberately separate.

use std::rc::Rc;

use crate::bounds::Bounds;
use crate::render::fmt_float_full;
use crate::vector::{Vector2, Vector3};

use super::{ObjectKind, ScadObject};

impl ScadObject {
    /// Creates a polygon over an ordered list of 2D points.
    ///
    /// The point order is preserved verbatim in the rendered statement; no
    /// geometric validation (such as self-intersection checks) is applied.
    ///
    /// # Examples
    /// ```
    /// use scadgen_ast::{ScadObject, Vector2};
    ///
    /// let square = ScadObject::polygon(vec![
    ///     Vector2::new(0.0, 0.0),
    ///     Vector2::new(1.0, 0.0),
    ///     Vector2::new(1.0, 1.0),
    ///     Vector2::new(0.0, 1.0),
    /// ]);
    /// assert_eq!(
    ///     square.render(),
    ///     "polygon(points = [[0, 0], [1, 0], [1, 1], [0, 1]]);\n"
    /// );
    /// ```
    pub fn polygon(points: Vec<Vector2>) -> Self {
        Self::leaf(ObjectKind::Polygon {
            points: Rc::from(points),
        })
    }

    /// Creates a cuboid with per-axis edge lengths.
    pub fn cube(size: Vector3, center: bool) -> Self {
        Self::leaf(ObjectKind::Cube { size, center })
    }

    /// Creates a cube with equal edges.
    pub fn cube_uniform(side: f64, center: bool) -> Self {
        Self::cube(Vector3::splat(side), center)
    }

    /// Creates a sphere; `resolution` overrides `$fn` when given.
    pub fn sphere(radius: f64, resolution: Option<u32>) -> Self {
        Self::leaf(ObjectKind::Sphere { radius, resolution })
    }

    /// Creates a straight cylinder.
    pub fn cylinder(height: f64, radius: f64, center: bool) -> Self {
        Self::cylinder_tapered(height, radius, radius, center, None)
    }

    /// Creates a cylinder with independent bottom/top radii.
    pub fn cylinder_tapered(
        height: f64,
        radius1: f64,
        radius2: f64,
        center: bool,
        resolution: Option<u32>,
    ) -> Self {
        Self::leaf(ObjectKind::Cylinder {
            height,
            radius1,
            radius2,
            center,
            resolution,
        })
    }

    /// Creates a 2D rectangle.
    pub fn square(size: Vector2, center: bool) -> Self {
        Self::leaf(ObjectKind::Square { size, center })
    }

    /// Creates a 2D circle; `resolution` overrides `$fn` when given.
    pub fn circle(radius: f64, resolution: Option<u32>) -> Self {
        Self::leaf(ObjectKind::Circle { radius, resolution })
    }
}

fn points_text(points: &[Vector2]) -> String {
    let cells: Vec<String> = points
        .iter()
        .map(|p| format!("[{}, {}]", fmt_float_full(p.x()), fmt_float_full(p.y())))
        .collect();
    format!("[{}]", cells.join(", "))
}

fn resolution_suffix(resolution: Option<u32>) -> String {
    match resolution {
        Some(n) => format!(", $fn = {n}"),
        None => String::new(),
    }
}

fn center_suffix(center: bool) -> &'static str {
    if center {
        ", center = true"
    } else {
        ""
    }
}

/// Call text for a leaf statement, without terminator.
pub(super) fn call_text(kind: &ObjectKind) -> String {
    match kind {
        ObjectKind::Polygon { points } => {
            format!("polygon(points = {})", points_text(points))
        }
        ObjectKind::Cube { size, center } => {
            format!("cube(size = {size}{})", center_suffix(*center))
        }
        ObjectKind::Sphere { radius, resolution } => {
            format!(
                "sphere(r = {}{})",
                fmt_float_full(*radius),
                resolution_suffix(*resolution)
            )
        }
        ObjectKind::Cylinder {
            height,
            radius1,
            radius2,
            center,
            resolution,
        } => format!(
            "cylinder(h = {}, r1 = {}, r2 = {}{}{})",
            fmt_float_full(*height),
            fmt_float_full(*radius1),
            fmt_float_full(*radius2),
            center_suffix(*center),
            resolution_suffix(*resolution)
        ),
        ObjectKind::Square { size, center } => {
            format!("square(size = {size}{})", center_suffix(*center))
        }
        ObjectKind::Circle { radius, resolution } => {
            format!(
                "circle(r = {}{})",
                fmt_float_full(*radius),
                resolution_suffix(*resolution)
            )
        }
        other => {
            debug_assert!(false, "not a leaf kind: {other:?}");
            String::new()
        }
    }
}

/// Nominal position of a leaf node.
pub(super) fn position(kind: &ObjectKind) -> Vector3 {
    match kind {
        ObjectKind::Cube { size, center } => {
            if *center {
                Vector3::ZERO
            } else {
                *size / 2.0
            }
        }
        ObjectKind::Cylinder { height, center, .. } => {
            if *center {
                Vector3::ZERO
            } else {
                Vector3::new(0.0, 0.0, height / 2.0)
            }
        }
        ObjectKind::Square { size, center } => {
            if *center {
                Vector3::ZERO
            } else {
                Vector3::new(size.x() / 2.0, size.y() / 2.0, 0.0)
            }
        }
        // Polygon tracks no centroid; sphere and circle sit on the origin.
        _ => Vector3::ZERO,
    }
}

/// Bounding box of a leaf node, from its own geometry.
pub(super) fn bounds(kind: &ObjectKind) -> Bounds {
    match kind {
        ObjectKind::Polygon { points } => {
            let mut iter = points.iter();
            let first = match iter.next() {
                Some(p) => p,
                None => return Bounds::empty(),
            };
            let (mut min_x, mut max_x) = (first.x(), first.x());
            let (mut min_y, mut max_y) = (first.y(), first.y());
            for p in iter {
                min_x = min_x.min(p.x());
                max_x = max_x.max(p.x());
                min_y = min_y.min(p.y());
                max_y = max_y.max(p.y());
            }
            Bounds::new(
                Vector3::new(min_x, min_y, 0.0),
                Vector3::new(max_x, max_y, 0.0),
            )
        }
        ObjectKind::Cube { size, center } => {
            if *center {
                Bounds::new(*size / -2.0, *size / 2.0)
            } else {
                Bounds::new(Vector3::ZERO, *size)
            }
        }
        ObjectKind::Sphere { radius, .. } => {
            Bounds::new(Vector3::splat(-radius), Vector3::splat(*radius))
        }
        ObjectKind::Cylinder {
            height,
            radius1,
            radius2,
            center,
            ..
        } => {
            let r = radius1.max(*radius2);
            let (z_min, z_max) = if *center {
                (-height / 2.0, height / 2.0)
            } else {
                (0.0, *height)
            };
            Bounds::new(Vector3::new(-r, -r, z_min), Vector3::new(r, r, z_max))
        }
        ObjectKind::Square { size, center } => {
            if *center {
                Bounds::new(
                    Vector3::new(-size.x() / 2.0, -size.y() / 2.0, 0.0),
                    Vector3::new(size.x() / 2.0, size.y() / 2.0, 0.0),
                )
            } else {
                Bounds::new(Vector3::ZERO, Vector3::new(size.x(), size.y(), 0.0))
            }
        }
        ObjectKind::Circle { radius, .. } => Bounds::new(
            Vector3::new(-radius, -radius, 0.0),
            Vector3::new(*radius, *radius, 0.0),
        ),
        other => {
            debug_assert!(false, "not a leaf kind: {other:?}");
            Bounds::empty()
        }
    }
}
