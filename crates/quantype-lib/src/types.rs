//! Type node definitions.
//!
//! Types live in a [`TypeContext`](crate::TypeContext) and are referred to by
//! [`TypeId`]. Nodes are hash-consed, so two ids are equal iff the types are
//! structurally equal. Bound variables are the exception: a [`VarId`] is an
//! identity, and two variables with the same name and bounds are different
//! variables.

use quantype_core::Symbol;

/// Interned type identifier.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeId(pub(crate) u32);

/// Universal top type, every type is a subtype of it.
pub const TYPE_ANY: TypeId = TypeId(0);
/// Empty type, `Union{}`.
pub const TYPE_BOTTOM: TypeId = TypeId(1);

impl TypeId {
    pub fn is_builtin(self) -> bool {
        self.0 <= TYPE_BOTTOM.0
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a bound variable. Compared by identity, never by name.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct VarId(pub(crate) u32);

impl VarId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A bound variable record: `lower <: name <: upper`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoundVar {
    pub name: Symbol,
    pub lower: TypeId,
    pub upper: TypeId,
}

impl BoundVar {
    /// A variable with the default bounds `Bottom <: name <: Any`.
    pub fn unbounded(name: Symbol) -> Self {
        Self {
            name,
            lower: TYPE_BOTTOM,
            upper: TYPE_ANY,
        }
    }

    pub fn has_default_bounds(&self) -> bool {
        self.lower == TYPE_BOTTOM && self.upper == TYPE_ANY
    }
}

/// Repetition count of a variadic tail.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CountRef {
    /// A concrete number of repetitions.
    Fixed(u64),
    /// Instantiated by an enclosing quantifier.
    Var(VarId),
}

/// The trailing "repeat zero or more times" component of a tuple.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct VariadicTail {
    /// Absent means any element type.
    pub element: Option<TypeId>,
    /// Absent means any length.
    pub count: Option<CountRef>,
}

impl VariadicTail {
    pub fn new(element: Option<TypeId>, count: Option<CountRef>) -> Self {
        Self { element, count }
    }

    /// `Vararg{element}`: any number of `element`.
    pub fn of(element: TypeId) -> Self {
        Self {
            element: Some(element),
            count: None,
        }
    }

    /// The variable the count refers to, if any.
    pub fn count_var(&self) -> Option<VarId> {
        match self.count {
            Some(CountRef::Var(var)) => Some(var),
            _ => None,
        }
    }

    /// Same element type, count cleared.
    ///
    /// The element type is kept verbatim, including any reference it makes
    /// to the variable that used to bind the count.
    pub fn unconstrained(self) -> Self {
        Self {
            count: None,
            ..self
        }
    }
}

/// The shape of a type node.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    /// Top of the lattice.
    Any,
    /// `Union{}`.
    Bottom,
    /// Instantiation of a named template: `Array{T}`, `Int`.
    Concrete { name: Symbol, params: Vec<TypeId> },
    /// Fixed-arity composite. Only the last field may be a `Vararg`.
    Tuple(Vec<TypeId>),
    /// Trailing variadic component of a tuple.
    Vararg(VariadicTail),
    /// A literal count used as a type argument: the `3` in `Foo{3}`.
    Count(u64),
    /// Reference to a bound variable.
    Var(VarId),
    /// One quantifier scoping `var` over `body`.
    Quantified { var: VarId, body: TypeId },
    /// Two or more alternatives, sorted by id and deduplicated.
    Union(Vec<TypeId>),
}

impl TypeKind {
    pub fn is_quantified(&self) -> bool {
        matches!(self, TypeKind::Quantified { .. })
    }

    pub fn is_vararg(&self) -> bool {
        matches!(self, TypeKind::Vararg(_))
    }

    pub fn is_union(&self) -> bool {
        matches!(self, TypeKind::Union(_))
    }

    pub fn as_vararg(&self) -> Option<&VariadicTail> {
        match self {
            TypeKind::Vararg(tail) => Some(tail),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[TypeId]> {
        match self {
            TypeKind::Tuple(fields) => Some(fields),
            _ => None,
        }
    }

    /// Short name of the node shape, for messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            TypeKind::Any => "Any",
            TypeKind::Bottom => "Bottom",
            TypeKind::Concrete { .. } => "concrete type",
            TypeKind::Tuple(_) => "tuple",
            TypeKind::Vararg(_) => "variadic tail",
            TypeKind::Count(_) => "count literal",
            TypeKind::Var(_) => "type variable",
            TypeKind::Quantified { .. } => "quantified type",
            TypeKind::Union(_) => "union",
        }
    }
}
