//! Position and bounding-box contracts across the node kinds.

use approx::assert_relative_eq;
use scadgen_ast::{ScadObject, Vector2, Vector3};

#[test]
fn cube_position_depends_on_centering() {
    assert_eq!(
        ScadObject::cube(Vector3::new(2.0, 4.0, 6.0), false).position(),
        Vector3::new(1.0, 2.0, 3.0)
    );
    assert_eq!(
        ScadObject::cube(Vector3::new(2.0, 4.0, 6.0), true).position(),
        Vector3::ZERO
    );
}

#[test]
fn translate_shifts_position_and_bounds() {
    let moved = ScadObject::cube_uniform(2.0, true).translate(Vector3::new(5.0, 0.0, 0.0));
    assert_eq!(moved.position(), Vector3::new(5.0, 0.0, 0.0));
    let bounds = moved.bounds();
    assert_eq!(bounds.min(), Vector3::new(4.0, -1.0, -1.0));
    assert_eq!(bounds.max(), Vector3::new(6.0, 1.0, 1.0));
}

#[test]
fn scale_stretches_bounds() {
    let grown = ScadObject::cube_uniform(1.0, false).scale(Vector3::new(2.0, 3.0, 4.0));
    let bounds = grown.bounds();
    assert_eq!(bounds.min(), Vector3::ZERO);
    assert_eq!(bounds.max(), Vector3::new(2.0, 3.0, 4.0));
}

#[test]
fn rotate_spins_bounds_around_origin() {
    let turned = ScadObject::cube(Vector3::new(2.0, 1.0, 1.0), false).rotate_z(90.0);
    let bounds = turned.bounds();
    assert_relative_eq!(bounds.min().x(), -1.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.max().y(), 2.0, epsilon = 1e-9);
}

#[test]
fn mirror_reflects_position() {
    let flipped = ScadObject::cube_uniform(2.0, false).mirror(Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(flipped.position(), Vector3::new(-1.0, 1.0, 1.0));
}

#[test]
fn resize_rescales_child_extents() {
    let resized = ScadObject::cube_uniform(1.0, false).resize(Vector3::new(4.0, 2.0, 1.0));
    let bounds = resized.bounds();
    assert_eq!(bounds.min(), Vector3::ZERO);
    assert_eq!(bounds.max(), Vector3::new(4.0, 2.0, 1.0));
}

#[test]
fn color_passes_geometry_through() {
    let tinted = ScadObject::sphere(3.0, None).color("green", 0.25);
    assert_eq!(tinted.position(), Vector3::ZERO);
    assert_eq!(tinted.bounds().size(), Vector3::new(6.0, 6.0, 6.0));
}

#[test]
fn linear_extrude_raises_planar_bounds() {
    let column = ScadObject::square(Vector2::new(2.0, 2.0), true).linear_extrude(10.0);
    let bounds = column.bounds();
    assert_eq!(bounds.min(), Vector3::new(-1.0, -1.0, 0.0));
    assert_eq!(bounds.max(), Vector3::new(1.0, 1.0, 10.0));
    assert_eq!(column.position(), Vector3::new(0.0, 0.0, 5.0));
}

#[test]
fn rotate_extrude_revolves_profile_extents() {
    let profile = ScadObject::square(Vector2::new(3.0, 2.0), false);
    let ring = profile.rotate_extrude(360.0);
    let bounds = ring.bounds();
    assert_eq!(bounds.min(), Vector3::new(-3.0, -3.0, 0.0));
    assert_eq!(bounds.max(), Vector3::new(3.0, 3.0, 2.0));
}

#[test]
fn composite_position_averages_children() {
    let left = ScadObject::cube_uniform(2.0, true).translate(Vector3::new(-4.0, 0.0, 0.0));
    let right = ScadObject::cube_uniform(2.0, true).translate(Vector3::new(4.0, 0.0, 0.0));
    let joined = left + right;
    assert_eq!(joined.position(), Vector3::ZERO);
}

#[test]
fn composite_bounds_envelope_children() {
    let left = ScadObject::sphere(1.0, None).translate(Vector3::new(-5.0, 0.0, 0.0));
    let right = ScadObject::sphere(2.0, None).translate(Vector3::new(5.0, 0.0, 0.0));
    let hull = left.hull_with(&[right]).unwrap();
    let bounds = hull.bounds();
    assert_eq!(bounds.min(), Vector3::new(-6.0, -2.0, -2.0));
    assert_eq!(bounds.max(), Vector3::new(7.0, 2.0, 2.0));
}
