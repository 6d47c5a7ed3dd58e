//! Composite (block) statements: union, difference, intersection, hull,
//! and minkowski, plus the flattening algebra for the `+` and `-` operators.
//!
//! ## Aliasing
//!
//! The operators flatten by appending to an *existing* composite's child
//! list in place and returning that same handle. A node handle reused
//! elsewhere is therefore observably altered, and the returned value may
//! alias one of the inputs. This is the contract, not an accident; use
//! [`ScadObject::duplicate`] first when isolation is needed.

use std::ops::{Add, Sub};

use crate::error::{TreeError, TreeResult};

use super::{ObjectKind, ScadObject};

impl ScadObject {
    fn compose(
        &self,
        kind: ObjectKind,
        operation: &'static str,
        others: &[ScadObject],
    ) -> TreeResult<ScadObject> {
        if others.is_empty() {
            return Err(TreeError::EmptyComposition { operation });
        }
        let mut children = Vec::with_capacity(others.len() + 1);
        children.push(self.clone());
        children.extend(others.iter().cloned());
        Ok(ScadObject::with_children(kind, children, None))
    }

    /// Union block over the receiver and at least one further operand.
    ///
    /// The child list starts with the receiver, then the operands in given
    /// order. An empty operand slice is an error and constructs nothing.
    ///
    /// # Examples
    /// ```
    /// use scadgen_ast::ScadObject;
    ///
    /// let a = ScadObject::cube_uniform(1.0, false);
    /// let b = ScadObject::sphere(1.0, None);
    /// let joined = a.union_with(&[b]).unwrap();
    /// assert_eq!(joined.children().len(), 2);
    /// ```
    pub fn union_with(&self, others: &[ScadObject]) -> TreeResult<ScadObject> {
        self.compose(ObjectKind::Union, "union", others)
    }

    /// Difference block: the receiver minus every operand, in order.
    pub fn difference_with(&self, others: &[ScadObject]) -> TreeResult<ScadObject> {
        self.compose(ObjectKind::Difference, "difference", others)
    }

    /// Intersection block over the receiver and the operands.
    pub fn intersection_with(&self, others: &[ScadObject]) -> TreeResult<ScadObject> {
        self.compose(ObjectKind::Intersection, "intersection", others)
    }

    /// Convex-hull block. The hull itself is computed by the external
    /// modeling engine; only the block statement is emitted here.
    pub fn hull_with(&self, others: &[ScadObject]) -> TreeResult<ScadObject> {
        self.compose(ObjectKind::Hull, "hull", others)
    }

    /// Minkowski-sum block, likewise emitted for the external engine.
    pub fn minkowski_with(&self, others: &[ScadObject]) -> TreeResult<ScadObject> {
        self.compose(ObjectKind::Minkowski, "minkowski", others)
    }
}

/// Call text for a block statement, without braces.
pub(super) fn call_text(kind: &ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Union => "union()",
        ObjectKind::Difference => "difference()",
        ObjectKind::Intersection => "intersection()",
        ObjectKind::Hull => "hull()",
        ObjectKind::Minkowski => "minkowski()",
        other => {
            debug_assert!(false, "not a composite kind: {other:?}");
            ""
        }
    }
}

fn is_union(kind: &ObjectKind) -> bool {
    matches!(kind, ObjectKind::Union)
}

fn is_difference(kind: &ObjectKind) -> bool {
    matches!(kind, ObjectKind::Difference)
}

/// Chained `a + b + c` collapses into one n-ary union with children in
/// left-to-right order rather than nested binary unions.
impl Add for ScadObject {
    type Output = ScadObject;

    fn add(self, rhs: ScadObject) -> ScadObject {
        if self.kind_matches(is_union) {
            self.append_child(rhs);
            return self;
        }
        if rhs.kind_matches(is_union) {
            rhs.append_child(self);
            return rhs;
        }
        ScadObject::with_children(ObjectKind::Union, vec![self, rhs], None)
    }
}

impl Add for &ScadObject {
    type Output = ScadObject;

    fn add(self, rhs: &ScadObject) -> ScadObject {
        self.clone() + rhs.clone()
    }
}

/// The symmetric rule against difference nodes. Order is preserved because
/// subtraction is order-sensitive: the first child minus all subsequent
/// children.
impl Sub for ScadObject {
    type Output = ScadObject;

    fn sub(self, rhs: ScadObject) -> ScadObject {
        if self.kind_matches(is_difference) {
            self.append_child(rhs);
            return self;
        }
        if rhs.kind_matches(is_difference) {
            rhs.append_child(self);
            return rhs;
        }
        ScadObject::with_children(ObjectKind::Difference, vec![self, rhs], None)
    }
}

impl Sub for &ScadObject {
    type Output = ScadObject;

    fn sub(self, rhs: &ScadObject) -> ScadObject {
        self.clone() - rhs.clone()
    }
}
