//! # Render Primitives
//!
//! The formatting layer every node render goes through: statement
//! termination, block braces with one indent level per nesting depth, and
//! the two numeric styles the generated script mixes.
//!
//! Two numeric paths coexist and stay distinct:
//!
//! 1. [`fmt_float_fixed`]: fixed two-decimal output used wherever a vector
//!    is displayed (transform parameters, vector `Display`).
//! 2. [`fmt_float_full`]: full-precision output used when a leaf serializes
//!    its raw coordinate data; no rounding is applied.
//!
//! All output uses `.` as the decimal separator regardless of host locale:
//! Rust's formatting machinery is locale-independent by construction, which
//! keeps generated files byte-identical across environments.

use config::constants::{INDENT_WIDTH, VECTOR_DISPLAY_PRECISION};

/// Formats a float at full precision (shortest round-trip form).
///
/// # Examples
/// ```
/// use scadgen_ast::render::fmt_float_full;
/// assert_eq!(fmt_float_full(1.0), "1");
/// assert_eq!(fmt_float_full(0.125), "0.125");
/// ```
pub fn fmt_float_full(value: f64) -> String {
    format!("{value}")
}

/// Formats a float with the fixed vector-display precision.
///
/// # Examples
/// ```
/// use scadgen_ast::render::fmt_float_fixed;
/// assert_eq!(fmt_float_fixed(1.0), "1.00");
/// assert_eq!(fmt_float_fixed(0.125), "0.13");
/// ```
pub fn fmt_float_fixed(value: f64) -> String {
    format!("{value:.prec$}", prec = VECTOR_DISPLAY_PRECISION)
}

/// Terminates a statement with `;` and a line break.
pub fn statement(text: &str) -> String {
    format!("{text};\n")
}

/// Shifts every non-empty line of `text` one indent level to the right.
///
/// Children rendered inside a block already carry any deeper indentation
/// their own subtrees need, so a single per-level shift is sufficient and
/// nesting compounds naturally.
pub fn indent(text: &str) -> String {
    let pad = " ".repeat(INDENT_WIDTH);
    let mut out = String::with_capacity(text.len() + INDENT_WIDTH * 4);
    for line in text.lines() {
        if !line.is_empty() {
            out.push_str(&pad);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Wraps an already-rendered body in a block statement.
///
/// # Examples
/// ```
/// use scadgen_ast::render::block;
/// let text = block("union()", "cube(size = [1.00, 1.00, 1.00]);\n");
/// assert_eq!(text, "union() {\n    cube(size = [1.00, 1.00, 1.00]);\n}\n");
/// ```
pub fn block(call: &str, body: &str) -> String {
    format!("{call} {{\n{}}}\n", indent(body))
}

/// Wraps an arbitrary rendered body as a single named callable module.
///
/// Used by the script-writing path, but available as a formatting primitive
/// in its own right.
///
/// # Examples
/// ```
/// use scadgen_ast::render::named_module;
/// let text = named_module("model", "sphere(r = 1);\n");
/// assert_eq!(text, "module model() {\n    sphere(r = 1);\n}\n");
/// ```
pub fn named_module(name: &str, body: &str) -> String {
    format!("module {name}() {{\n{}}}\n", indent(body))
}

/// Renders an invocation statement for a named module.
pub fn module_invocation(name: &str) -> String {
    statement(&format!("{name}()"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_precision_keeps_all_digits() {
        assert_eq!(fmt_float_full(0.1234567890123), "0.1234567890123");
        assert_eq!(fmt_float_full(-2.5), "-2.5");
    }

    #[test]
    fn test_fixed_rounds_to_two_decimals() {
        assert_eq!(fmt_float_fixed(1.004), "1.00");
        assert_eq!(fmt_float_fixed(1.005), "1.00");
        assert_eq!(fmt_float_fixed(1.006), "1.01");
        assert_eq!(fmt_float_fixed(-0.5), "-0.50");
    }

    #[test]
    fn test_statement_terminator() {
        assert_eq!(statement("cube(1)"), "cube(1);\n");
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a;\n\nb;\n"), "    a;\n\n    b;\n");
    }

    #[test]
    fn test_nested_blocks_compound_indentation() {
        let inner = block("union()", "circle(r = 1);\n");
        let outer = block("difference()", &inner);
        assert_eq!(
            outer,
            "difference() {\n    union() {\n        circle(r = 1);\n    }\n}\n"
        );
    }

    #[test]
    fn test_named_module_and_invocation() {
        assert_eq!(module_invocation("model"), "model();\n");
        let text = named_module("part", "cube(size = [1.00, 1.00, 1.00]);\n");
        assert!(text.starts_with("module part() {"));
        assert!(text.ends_with("}\n"));
    }
}
