//! # Error Types
//!
//! Error types for tree construction. All errors are explicit and surface
//! immediately at the call that triggered them.
//!
//! ## Error Policy
//!
//! - Construction-time violations fail fast; no partial node is built
//! - Rendering never validates geometric sanity (faithful output only)
//! - Nothing is retried or recovered internally

use thiserror::Error;

/// Errors raised while combining nodes into composite statements.
///
/// ## Example
///
/// ```rust
/// use scadgen_ast::{ScadObject, TreeError};
///
/// let cube = ScadObject::cube_uniform(1.0, false);
/// match cube.union_with(&[]) {
///     Err(TreeError::EmptyComposition { operation }) => assert_eq!(operation, "union"),
///     other => panic!("expected empty-composition error, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug, PartialEq)]
pub enum TreeError {
    /// A block factory was invoked without any operand beyond the receiver.
    #[error("'{operation}' requires at least one operand beyond the receiver")]
    EmptyComposition {
        /// Name of the block operation (union, difference, ...).
        operation: &'static str,
    },
}

/// Result type alias for tree construction.
pub type TreeResult<T> = Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_operation() {
        let err = TreeError::EmptyComposition { operation: "hull" };
        assert!(err.to_string().contains("hull"));
    }

    /// Error types stay Send + Sync so callers can box them freely.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TreeError>();
    }
}
