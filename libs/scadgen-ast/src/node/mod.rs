//! # Node Model
//!
//! The polymorphic tree of modeling operations: leaf primitives, transform
//! wrappers, and composite (block) statements behind one handle type.
//!
//! [`ScadObject`] is a cheap reference handle (`Rc`-backed). Cloning the
//! handle aliases the same node, which is what the `+`/`-` flattening
//! algebra relies on; [`ScadObject::duplicate`] produces a structurally
//! independent copy of the whole subtree.
//!
//! The tree is single-threaded by design: handles are deliberately `!Send`,
//! and the only process-wide state is the identity counter, which uses an
//! atomic increment so identities stay unique even under unforeseen
//! multi-threaded construction.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::bounds::Bounds;
use crate::render;
use crate::vector::{Vector2, Vector3};

mod composites;
mod primitives;
mod transforms;


/// Process-wide identity source. Monotonically increasing, never reused or
/// reset; assigned exactly once per constructed node.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// The closed set of node variants. Each carries only its own parameters;
/// child nodes live in the shared node data so traversal is uniform across
/// kinds.
#[derive(Debug, Clone)]
pub enum ObjectKind {
    /// 2D polygon over an ordered point list. Points render at full
    /// precision, never through the two-decimal vector display.
    Polygon {
        /// Ordered vertices; shared by reference across duplicates.
        points: Rc<[Vector2]>,
    },
    /// Axis-aligned cuboid.
    Cube {
        /// Edge lengths.
        size: Vector3,
        /// Centered at the origin instead of spanning from it.
        center: bool,
    },
    /// Sphere around the origin.
    Sphere {
        /// Radius.
        radius: f64,
        /// Optional `$fn` override.
        resolution: Option<u32>,
    },
    /// Cylinder or cone along Z.
    Cylinder {
        /// Height.
        height: f64,
        /// Bottom radius.
        radius1: f64,
        /// Top radius.
        radius2: f64,
        /// Centered on the origin along Z.
        center: bool,
        /// Optional `$fn` override.
        resolution: Option<u32>,
    },
    /// 2D rectangle.
    Square {
        /// Edge lengths.
        size: Vector2,
        /// Centered at the origin.
        center: bool,
    },
    /// 2D circle.
    Circle {
        /// Radius.
        radius: f64,
        /// Optional `$fn` override.
        resolution: Option<u32>,
    },
    /// Translation wrapper.
    Translate {
        /// Offset applied to the child.
        offset: Vector3,
    },
    /// Euler rotation wrapper (degrees, applied X then Y then Z).
    Rotate {
        /// Rotation angles.
        angles: Vector3,
    },
    /// Non-uniform scale wrapper.
    Scale {
        /// Scale factors.
        factors: Vector3,
    },
    /// Reflection wrapper.
    Mirror {
        /// Normal of the mirror plane.
        normal: Vector3,
    },
    /// Resize-to-extent wrapper.
    Resize {
        /// Target extents.
        size: Vector3,
    },
    /// Color wrapper. Purely cosmetic; geometry passes through.
    Color {
        /// Color name understood by the target language.
        color: String,
        /// Opacity in `0.0..=1.0`.
        opacity: f64,
    },
    /// Linear extrusion of a 2D child.
    LinearExtrude {
        /// Extrusion height.
        height: f64,
        /// Optional extrusion direction.
        direction: Option<Vector3>,
        /// Angular resolution (`$fn`).
        resolution: u32,
    },
    /// Rotational extrusion of a 2D child.
    RotateExtrude {
        /// Sweep angle in degrees.
        angle: f64,
        /// Angular resolution (`$fn`).
        resolution: u32,
    },
    /// N-ary union block.
    Union,
    /// N-ary difference block (first child minus all subsequent).
    Difference,
    /// N-ary intersection block.
    Intersection,
    /// Convex hull block.
    Hull,
    /// Minkowski sum block.
    Minkowski,
}

/// Broad structural category of a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Leaf,
    Transform,
    Composite,
}

impl ObjectKind {
    fn category(&self) -> Category {
        match self {
            ObjectKind::Polygon { .. }
            | ObjectKind::Cube { .. }
            | ObjectKind::Sphere { .. }
            | ObjectKind::Cylinder { .. }
            | ObjectKind::Square { .. }
            | ObjectKind::Circle { .. } => Category::Leaf,
            ObjectKind::Translate { .. }
            | ObjectKind::Rotate { .. }
            | ObjectKind::Scale { .. }
            | ObjectKind::Mirror { .. }
            | ObjectKind::Resize { .. }
            | ObjectKind::Color { .. }
            | ObjectKind::LinearExtrude { .. }
            | ObjectKind::RotateExtrude { .. } => Category::Transform,
            ObjectKind::Union
            | ObjectKind::Difference
            | ObjectKind::Intersection
            | ObjectKind::Hull
            | ObjectKind::Minkowski => Category::Composite,
        }
    }
}

#[derive(Debug)]
struct NodeData {
    id: u64,
    name: Option<String>,
    parent: Weak<RefCell<NodeData>>,
    children: Vec<ScadObject>,
    kind: ObjectKind,
}

/// Handle to a node in the modeling-operation tree.
///
/// Cloning a `ScadObject` clones the *handle*: both values refer to the same
/// node, and mutation through one (such as the `+` operator appending to an
/// existing union) is visible through the other. Use
/// [`duplicate`](Self::duplicate) for an independent copy.
///
/// # Examples
/// ```
/// use scadgen_ast::{ScadObject, Vector3};
///
/// let part = ScadObject::cube_uniform(2.0, true)
///     .translate(Vector3::new(5.0, 0.0, 0.0));
/// assert!(part.render().starts_with("translate(v = [5.00, 0.00, 0.00])"));
/// ```
#[derive(Debug, Clone)]
pub struct ScadObject {
    inner: Rc<RefCell<NodeData>>,
}

impl ScadObject {
    /// Builds a node over an already-ordered child list, wiring each child's
    /// parent back-reference to the new node.
    pub(crate) fn with_children(
        kind: ObjectKind,
        children: Vec<ScadObject>,
        name: Option<String>,
    ) -> Self {
        let node = Self {
            inner: Rc::new(RefCell::new(NodeData {
                id: next_id(),
                name,
                parent: Weak::new(),
                children: Vec::with_capacity(children.len()),
                kind,
            })),
        };
        for child in children {
            node.append_child(child);
        }
        node
    }

    pub(crate) fn leaf(kind: ObjectKind) -> Self {
        Self::with_children(kind, Vec::new(), None)
    }

    /// Wraps the receiver in a single-child transform node.
    pub(crate) fn wrap(&self, kind: ObjectKind) -> Self {
        Self::with_children(kind, vec![self.clone()], None)
    }

    /// Appends `child` to this node's ordered child list and re-points the
    /// child's parent reference here. The parent link is "most recent
    /// attachment point": reusing a handle across trees re-parents it.
    pub(crate) fn append_child(&self, child: ScadObject) {
        child.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().children.push(child);
    }

    pub(crate) fn kind_matches(&self, probe: fn(&ObjectKind) -> bool) -> bool {
        probe(&self.inner.borrow().kind)
    }

    /// Process-unique identity, assigned at construction and immutable.
    pub fn id(&self) -> u64 {
        self.inner.borrow().id
    }

    /// Optional human-readable name.
    pub fn name(&self) -> Option<String> {
        self.inner.borrow().name.clone()
    }

    /// Builder-style name assignment.
    ///
    /// # Examples
    /// ```
    /// use scadgen_ast::ScadObject;
    /// let wheel = ScadObject::circle(4.0, None).named("wheel");
    /// assert_eq!(wheel.name().as_deref(), Some("wheel"));
    /// ```
    pub fn named(self, name: impl Into<String>) -> Self {
        self.inner.borrow_mut().name = Some(name.into());
        self
    }

    /// The node this one was most recently attached under, if any is still
    /// alive. Non-owning: the link never extends a parent's lifetime.
    pub fn parent(&self) -> Option<ScadObject> {
        self.inner
            .borrow()
            .parent
            .upgrade()
            .map(|inner| ScadObject { inner })
    }

    /// Returns the node's variant data.
    pub fn kind(&self) -> ObjectKind {
        self.inner.borrow().kind.clone()
    }

    /// Decoupled shallow copy of the immediate child list. The container is
    /// fresh; the elements are shared handles.
    pub fn children(&self) -> Vec<ScadObject> {
        self.inner.borrow().children.to_vec()
    }

    /// Pre-order, left-to-right, depth-first flattening of all descendants,
    /// excluding the receiver itself.
    ///
    /// Uses an explicit stack; children are pushed in reverse so the first
    /// child is processed first and source order is preserved.
    pub fn descendants(&self) -> Vec<ScadObject> {
        let mut out = Vec::new();
        let mut stack: Vec<ScadObject> = Vec::new();
        for child in self.inner.borrow().children.iter().rev() {
            stack.push(child.clone());
        }
        while let Some(node) = stack.pop() {
            for child in node.inner.borrow().children.iter().rev() {
                stack.push(child.clone());
            }
            out.push(node);
        }
        out
    }

    /// Recursive traversal filtered by a caller-supplied predicate.
    ///
    /// # Examples
    /// ```
    /// use scadgen_ast::{ObjectKind, ScadObject};
    ///
    /// let tree = ScadObject::sphere(1.0, None).scale_uniform(2.0);
    /// let spheres = tree.descendants_where(|n| matches!(n.kind(), ObjectKind::Sphere { .. }));
    /// assert_eq!(spheres.len(), 1);
    /// ```
    pub fn descendants_where(&self, predicate: impl Fn(&ScadObject) -> bool) -> Vec<ScadObject> {
        self.descendants()
            .into_iter()
            .filter(|node| predicate(node))
            .collect()
    }

    /// Structurally independent copy of this node and its whole subtree.
    ///
    /// Child nodes are copied transitively and every copy receives a fresh
    /// identity; immutable value payloads (such as polygon point buffers)
    /// stay shared by reference.
    pub fn duplicate(&self) -> ScadObject {
        let data = self.inner.borrow();
        let children = data.children.iter().map(ScadObject::duplicate).collect();
        ScadObject::with_children(data.kind.clone(), children, data.name.clone())
    }

    /// Render-equality: true iff both subtrees produce character-identical
    /// script text.
    ///
    /// This recomputes both renders on every call, i.e. O(size of both
    /// subtrees), with no caching. It is a structural convenience, not a
    /// cheap identity check; callers comparing repeatedly should cache the
    /// rendered text themselves.
    pub fn is_same_as(&self, other: &ScadObject) -> bool {
        self.render() == other.render()
    }

    /// Nominal location of this node.
    ///
    /// Aggregate nodes average their children's positions; primitives
    /// without a natural center report the origin.
    pub fn position(&self) -> Vector3 {
        let data = self.inner.borrow();
        match data.kind.category() {
            Category::Leaf => primitives::position(&data.kind),
            Category::Transform => transforms::position(&data.kind, data.children.first()),
            Category::Composite => {
                let positions: Vec<Vector3> =
                    data.children.iter().map(ScadObject::position).collect();
                Vector3::average(&positions).unwrap_or(Vector3::ZERO)
            }
        }
    }

    /// Axis-aligned bounding box.
    ///
    /// Leaf kinds compute from their own geometry; transform kinds push the
    /// child's box through the transform; composite kinds take the envelope
    /// of their children's boxes (hull and minkowski included, since real
    /// geometry belongs to the external engine).
    pub fn bounds(&self) -> Bounds {
        let data = self.inner.borrow();
        match data.kind.category() {
            Category::Leaf => primitives::bounds(&data.kind),
            Category::Transform => transforms::bounds(&data.kind, data.children.first()),
            Category::Composite => data
                .children
                .iter()
                .map(ScadObject::bounds)
                .reduce(|a, b| a.union(&b))
                .unwrap_or_else(Bounds::empty),
        }
    }

    /// Renders the exact script text for this node and its subtree.
    ///
    /// Simple statements terminate with `;` and a line break; block
    /// statements wrap their children in braces, indenting one level per
    /// nesting depth. Output is locale-invariant.
    pub fn render(&self) -> String {
        let data = self.inner.borrow();
        match data.kind.category() {
            Category::Leaf => render::statement(&primitives::call_text(&data.kind)),
            Category::Transform => {
                let child = data
                    .children
                    .first()
                    .map(ScadObject::render)
                    .unwrap_or_default();
                format!("{}\n{child}", transforms::call_text(&data.kind))
            }
            Category::Composite => {
                let body: String = data.children.iter().map(ScadObject::render).collect();
                render::block(composites::call_text(&data.kind), &body)
            }
        }
    }
}

impl fmt::Display for ScadObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
