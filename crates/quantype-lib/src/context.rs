//! TypeContext: the arena that owns every type node and bound variable.
//!
//! Type nodes are hash-consed so equal types share one `TypeId`. Bound
//! variables are never deduplicated: `new_var` always mints a new identity.
//! Nothing is ever removed or mutated, which keeps every `TypeId` valid for
//! the lifetime of the context and the node graph acyclic (a node can only
//! point at ids that existed before it).

use std::collections::HashMap;

use quantype_core::{Interner, Symbol};

use crate::types::{BoundVar, TYPE_ANY, TYPE_BOTTOM, TypeId, TypeKind, VarId, VariadicTail};

/// Name shared by every tuple type.
pub const TUPLE_NAME: &str = "Tuple";

/// Name of the universal top type.
pub const ANY_NAME: &str = "Any";

/// Central registry for type nodes, bound variables and names.
#[derive(Debug, Clone)]
pub struct TypeContext {
    /// Template and variable names
    interner: Interner,
    /// Interned types by ID
    types: Vec<TypeKind>,
    /// Deduplication map for type interning
    type_map: HashMap<TypeKind, TypeId>,
    /// Bound variables by ID
    vars: Vec<BoundVar>,
    tuple_name: Symbol,
    any_name: Symbol,
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeContext {
    pub fn new() -> Self {
        let mut interner = Interner::new();
        let tuple_name = interner.intern(TUPLE_NAME);
        let any_name = interner.intern(ANY_NAME);

        let mut ctx = Self {
            interner,
            types: Vec::new(),
            type_map: HashMap::new(),
            vars: Vec::new(),
            tuple_name,
            any_name,
        };

        let any = ctx.intern_type(TypeKind::Any);
        debug_assert_eq!(any, TYPE_ANY);

        let bottom = ctx.intern_type(TypeKind::Bottom);
        debug_assert_eq!(bottom, TYPE_BOTTOM);

        ctx
    }

    // ========== Names ==========

    #[inline]
    pub fn intern(&mut self, name: &str) -> Symbol {
        self.interner.intern(name)
    }

    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        self.interner.resolve(sym)
    }

    #[inline]
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// The template identity of tuples.
    #[inline]
    pub fn tuple_name(&self) -> Symbol {
        self.tuple_name
    }

    /// The template identity of `Any`.
    #[inline]
    pub fn any_name(&self) -> Symbol {
        self.any_name
    }

    // ========== Bound variables ==========

    /// Mint a new bound variable. Never deduplicates.
    pub fn new_var(&mut self, name: Symbol, lower: TypeId, upper: TypeId) -> VarId {
        self.ensure_type(lower);
        self.ensure_type(upper);

        let var = VarId(self.vars.len() as u32);
        self.vars.push(BoundVar { name, lower, upper });
        var
    }

    /// Mint `Bottom <: name <: Any`.
    pub fn new_unbounded_var(&mut self, name: &str) -> VarId {
        let name = self.intern(name);
        self.new_var(name, TYPE_BOTTOM, TYPE_ANY)
    }

    /// # Panics
    /// Panics if the variable was not minted by this context.
    pub fn var_info(&self, var: VarId) -> &BoundVar {
        self.ensure_var(var)
    }

    pub fn try_var_info(&self, var: VarId) -> Option<&BoundVar> {
        self.vars.get(var.index())
    }

    pub fn var_name(&self, var: VarId) -> &str {
        self.resolve(self.var_info(var).name)
    }

    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    // ========== Type interning ==========

    /// Intern a node as is. Constructors below normalize before calling this.
    fn intern_type(&mut self, kind: TypeKind) -> TypeId {
        if let Some(&id) = self.type_map.get(&kind) {
            return id;
        }

        let id = TypeId(self.types.len() as u32);
        self.types.push(kind.clone());
        self.type_map.insert(kind, id);
        id
    }

    /// # Panics
    /// Panics if the id was not minted by this context.
    pub fn get_type(&self, id: TypeId) -> &TypeKind {
        self.ensure_type(id)
    }

    pub fn try_get_type(&self, id: TypeId) -> Option<&TypeKind> {
        self.types.get(id.index())
    }

    // ========== Constructors ==========

    pub fn any(&self) -> TypeId {
        TYPE_ANY
    }

    pub fn bottom(&self) -> TypeId {
        TYPE_BOTTOM
    }

    pub fn concrete(&mut self, name: Symbol, params: Vec<TypeId>) -> TypeId {
        for &p in &params {
            self.ensure_type(p);
        }
        self.intern_type(TypeKind::Concrete { name, params })
    }

    /// Convenience for `concrete(intern(name), params)`.
    pub fn named(&mut self, name: &str, params: Vec<TypeId>) -> TypeId {
        let name = self.intern(name);
        self.concrete(name, params)
    }

    /// # Panics
    /// Panics if a variadic tail appears before the last field.
    pub fn tuple(&mut self, fields: Vec<TypeId>) -> TypeId {
        self.ensure_tail_last(&fields);
        self.intern_type(TypeKind::Tuple(fields))
    }

    pub fn vararg(&mut self, tail: VariadicTail) -> TypeId {
        if let Some(element) = tail.element {
            self.ensure_type(element);
        }
        if let Some(var) = tail.count_var() {
            self.ensure_var(var);
        }
        self.intern_type(TypeKind::Vararg(tail))
    }

    pub fn count(&mut self, n: u64) -> TypeId {
        self.intern_type(TypeKind::Count(n))
    }

    pub fn var(&mut self, var: VarId) -> TypeId {
        self.ensure_var(var);
        self.intern_type(TypeKind::Var(var))
    }

    pub fn quantified(&mut self, var: VarId, body: TypeId) -> TypeId {
        self.ensure_var(var);
        self.ensure_type(body);
        self.intern_type(TypeKind::Quantified { var, body })
    }

    /// Build a union.
    ///
    /// Nested unions are flattened, `Bottom` alternatives dropped, duplicates
    /// removed and the rest sorted by id. No alternatives left gives `Bottom`,
    /// one gives that alternative.
    pub fn union(&mut self, alternatives: Vec<TypeId>) -> TypeId {
        let mut flat = Vec::with_capacity(alternatives.len());
        for alt in alternatives {
            match self.ensure_type(alt) {
                TypeKind::Union(inner) => flat.extend(inner.iter().copied()),
                TypeKind::Bottom => {}
                _ => flat.push(alt),
            }
        }
        flat.sort_unstable();
        flat.dedup();

        match flat.len() {
            0 => TYPE_BOTTOM,
            1 => flat[0],
            _ => self.intern_type(TypeKind::Union(flat)),
        }
    }

    // ========== Queries ==========

    /// Template name and parameters, if `id` is a concrete type.
    pub fn concrete_params(&self, id: TypeId) -> Option<(Symbol, &[TypeId])> {
        match self.get_type(id) {
            TypeKind::Concrete { name, params } => Some((*name, params)),
            _ => None,
        }
    }

    /// Iterate over all interned types.
    pub fn iter_types(&self) -> impl Iterator<Item = (TypeId, &TypeKind)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, k)| (TypeId(i as u32), k))
    }

    /// Number of interned types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}
