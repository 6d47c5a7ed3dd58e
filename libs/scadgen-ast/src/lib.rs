//! # Scadgen AST Crate
//!
//! Builds an in-memory tree of geometric-modeling operations and renders it
//! deterministically into OpenSCAD script text. Callers compose geometry
//! programmatically (primitives, fluent transforms, boolean blocks) and
//! ask any node for the exact script of its subtree.
//!
//! ## Architecture
//!
//! ```text
//! ScadObject (node handles: leaf / transform / composite)
//!       ↓
//! render primitives (statements, blocks, indentation, numeric styles)
//!       ↓
//! Script text (locale-invariant, consumable by any OpenSCAD interpreter)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use scadgen_ast::{ScadObject, Vector2, Vector3};
//!
//! let plate = ScadObject::polygon(vec![
//!     Vector2::new(0.0, 0.0),
//!     Vector2::new(20.0, 0.0),
//!     Vector2::new(20.0, 10.0),
//!     Vector2::new(0.0, 10.0),
//! ])
//! .linear_extrude(2.0);
//!
//! let hole = ScadObject::cylinder(4.0, 2.0, false)
//!     .translate(Vector3::new(10.0, 5.0, -1.0));
//!
//! let part = plate - hole;
//! assert!(part.render().starts_with("difference() {"));
//! ```
//!
//! ## Design Principles
//!
//! - **Closed node set**: leaf, transform, and composite variants behind one
//!   handle type; new primitives extend the variant set
//! - **Deterministic rendering**: byte-identical output across host locales
//! - **No geometry kernel**: hull, minkowski, and booleans are emitted as
//!   script for the external modeling engine, never computed here
//! - **Single-threaded tree**: handles are `Rc`-based; only the identity
//!   counter is process-global (atomic)

pub mod bounds;
pub mod error;
pub mod matrix;
pub mod node;
pub mod render;
pub mod vector;

// Re-exports for convenience
pub use bounds::Bounds;
pub use error::{TreeError, TreeResult};
pub use matrix::{Matrix, MatrixError};
pub use node::{ObjectKind, ScadObject};
pub use vector::{Vector2, Vector3};
