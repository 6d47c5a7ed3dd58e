//! End-to-end rendering scenarios: statement text, indentation, numeric
//! formatting paths, and structural equality by render.

use scadgen_ast::{ScadObject, Vector2, Vector3};

fn unit_square_polygon() -> ScadObject {
    ScadObject::polygon(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ])
}

#[test]
fn polygon_round_trip_scenario() {
    let polygon = unit_square_polygon();

    let bounds = polygon.bounds();
    assert_eq!(bounds.min(), Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(bounds.max(), Vector3::new(1.0, 1.0, 0.0));

    let text = polygon.render();
    assert_eq!(text, "polygon(points = [[0, 0], [1, 0], [1, 1], [0, 1]]);\n");
    // A single statement: one terminator, one line break.
    assert_eq!(text.matches(';').count(), 1);
    assert_eq!(text.matches('\n').count(), 1);
}

#[test]
fn polygon_points_render_at_full_precision() {
    let polygon = ScadObject::polygon(vec![
        Vector2::new(0.123456789, 0.0),
        Vector2::new(1.0, 2.000001),
        Vector2::new(-0.5, 1.0),
    ]);
    assert_eq!(
        polygon.render(),
        "polygon(points = [[0.123456789, 0], [1, 2.000001], [-0.5, 1]]);\n"
    );
}

#[test]
fn transform_parameters_render_at_display_precision() {
    // The same value that a polygon would keep verbatim is truncated in the
    // vector-display path.
    let moved = unit_square_polygon().translate(Vector3::new(0.123456789, 0.0, 0.0));
    assert!(moved
        .render()
        .starts_with("translate(v = [0.12, 0.00, 0.00])\n"));
}

#[test]
fn nested_blocks_compound_indentation() {
    let inner = ScadObject::cube_uniform(1.0, false)
        .union_with(&[ScadObject::sphere(1.0, None)])
        .unwrap();
    let outer = inner
        .difference_with(&[ScadObject::circle(2.0, None)])
        .unwrap();

    assert_eq!(
        outer.render(),
        "difference() {\n\
         \x20   union() {\n\
         \x20       cube(size = [1.00, 1.00, 1.00]);\n\
         \x20       sphere(r = 1);\n\
         \x20   }\n\
         \x20   circle(r = 2);\n\
         }\n"
    );
}

#[test]
fn transforms_inside_blocks_keep_their_own_lines() {
    let part = ScadObject::cube_uniform(1.0, false)
        .translate(Vector3::new(2.0, 0.0, 0.0))
        .union_with(&[ScadObject::sphere(1.0, None)])
        .unwrap();
    assert_eq!(
        part.render(),
        "union() {\n\
         \x20   translate(v = [2.00, 0.00, 0.00])\n\
         \x20   cube(size = [1.00, 1.00, 1.00]);\n\
         \x20   sphere(r = 1);\n\
         }\n"
    );
}

#[test]
fn rendering_is_deterministic_and_dot_separated() {
    // Rust's formatter never consults the host locale; generated scripts are
    // byte-identical across environments. The decimal separator is always a
    // dot and never a comma-decimal.
    let node = ScadObject::cube(Vector3::new(1.5, 2.25, 3.125), false)
        .translate(Vector3::new(0.5, 0.0, 0.0));
    let first = node.render();
    let second = node.render();
    assert_eq!(first, second);
    assert!(first.contains("1.50"));
    assert!(!first.contains("1,50"));
}

#[test]
fn render_equality_detects_any_textual_difference() {
    let a = ScadObject::cube_uniform(1.0, false);
    let b = ScadObject::cube_uniform(1.0, false);
    let c = ScadObject::cube_uniform(1.001, false);
    let d = ScadObject::cube_uniform(1.01, false);

    // Distinct instances, identical text.
    assert!(a.is_same_as(&b));
    // 1.001 still displays as 1.00 at vector precision.
    assert!(a.is_same_as(&c));
    // 1.01 does not.
    assert!(!a.is_same_as(&d));
}

#[test]
fn named_nodes_render_the_same_as_unnamed() {
    // Names are metadata for callers; they never appear in script text.
    let plain = ScadObject::sphere(3.0, None);
    let named = ScadObject::sphere(3.0, None).named("dome");
    assert!(plain.is_same_as(&named));
}

#[test]
fn full_model_renders_valid_script() {
    let body = ScadObject::cylinder(20.0, 5.0, false);
    let bore = ScadObject::cylinder(22.0, 2.0, false).translate(Vector3::new(0.0, 0.0, -1.0));
    let flange = ScadObject::circle(8.0, Some(48)).linear_extrude(2.0);

    let part = (body - bore) + flange.rotate(Vector3::new(0.0, 0.0, 15.0));
    let text = part.render();

    assert!(text.starts_with("union() {\n"));
    assert!(text.contains("    difference() {\n"));
    assert!(text.contains("        cylinder(h = 20, r1 = 5, r2 = 5);\n"));
    assert!(text.contains("    rotate(a = [0.00, 0.00, 15.00])\n"));
    assert!(text.ends_with("}\n"));
}
