//! Capture-avoiding substitution and free-variable queries.

use indexmap::IndexSet;

use crate::context::TypeContext;
use crate::types::{CountRef, TypeId, TypeKind, VarId, VariadicTail};

/// Replace free references to `var` in `ty` with `replacement`.
///
/// A quantifier that binds `var` itself shadows it, and a quantifier whose
/// variable occurs free in `replacement` is renamed first so the replacement
/// is not captured. A quantifier whose bounds mention `var` gets a new
/// variable carrying the substituted bounds. Subtrees without a free `var`
/// come back with their original id, and so does a tuple that would end up
/// with a variadic tail before its last field.
pub fn substitute(ctx: &mut TypeContext, ty: TypeId, var: VarId, replacement: TypeId) -> TypeId {
    log::trace!(
        "substitute var {} := type {} in type {}",
        var.as_u32(),
        replacement.as_u32(),
        ty.as_u32()
    );
    Substitution {
        var,
        replacement,
        replacement_free: free_vars(ctx, replacement),
    }
    .apply(ctx, ty)
}

struct Substitution {
    var: VarId,
    replacement: TypeId,
    replacement_free: Vec<VarId>,
}

impl Substitution {
    fn apply(&self, ctx: &mut TypeContext, ty: TypeId) -> TypeId {
        match ctx.get_type(ty).clone() {
            TypeKind::Any | TypeKind::Bottom | TypeKind::Count(_) => ty,

            TypeKind::Var(v) if v == self.var => self.replacement,
            TypeKind::Var(_) => ty,

            TypeKind::Concrete { name, params } => match self.apply_all(ctx, &params) {
                Some(params) => ctx.concrete(name, params),
                None => ty,
            },

            TypeKind::Tuple(fields) => match self.apply_all(ctx, &fields) {
                Some(mapped) if misplaced_tail(ctx, &mapped) => {
                    log::debug!(
                        "variadic tail would land inside tuple {}, keeping it unsubstituted",
                        ty.as_u32()
                    );
                    ty
                }
                Some(fields) => ctx.tuple(fields),
                None => ty,
            },

            TypeKind::Union(alternatives) => match self.apply_all(ctx, &alternatives) {
                Some(alternatives) => ctx.union(alternatives),
                None => ty,
            },

            TypeKind::Vararg(tail) => {
                let element = tail.element.map(|e| self.apply(ctx, e));
                let count = self.apply_count(ctx, tail.count);
                let new_tail = VariadicTail::new(element, count);
                if new_tail == tail {
                    ty
                } else {
                    ctx.vararg(new_tail)
                }
            }

            TypeKind::Quantified { var: bound, body } => self.apply_binder(ctx, ty, bound, body),
        }
    }

    fn apply_all(&self, ctx: &mut TypeContext, ids: &[TypeId]) -> Option<Vec<TypeId>> {
        let mapped: Vec<TypeId> = ids.iter().map(|&id| self.apply(ctx, id)).collect();
        if mapped.as_slice() == ids {
            return None;
        }
        Some(mapped)
    }

    fn apply_count(&self, ctx: &TypeContext, count: Option<CountRef>) -> Option<CountRef> {
        match count {
            Some(CountRef::Var(v)) if v == self.var => match ctx.get_type(self.replacement) {
                TypeKind::Var(w) => Some(CountRef::Var(*w)),
                TypeKind::Count(n) => Some(CountRef::Fixed(*n)),
                other => {
                    log::debug!(
                        "count variable {} instantiated with {}, dropping the length",
                        v.as_u32(),
                        other.shape_name()
                    );
                    None
                }
            },
            other => other,
        }
    }

    fn apply_binder(
        &self,
        ctx: &mut TypeContext,
        ty: TypeId,
        bound: VarId,
        body: TypeId,
    ) -> TypeId {
        let info = *ctx.var_info(bound);
        let lower = self.apply(ctx, info.lower);
        let upper = self.apply(ctx, info.upper);
        let bounds_changed = lower != info.lower || upper != info.upper;
        let shadowed = bound == self.var;
        let captures = !shadowed && self.replacement_free.contains(&bound);

        if shadowed && !bounds_changed {
            return ty;
        }

        let (binder, body) = if bounds_changed || captures {
            let fresh = ctx.new_var(info.name, lower, upper);
            let fresh_ref = ctx.var(fresh);
            (fresh, substitute(ctx, body, bound, fresh_ref))
        } else {
            (bound, body)
        };

        let new_body = if shadowed { body } else { self.apply(ctx, body) };
        if binder == bound && new_body == body {
            return ty;
        }
        ctx.quantified(binder, new_body)
    }
}

// A tail is only valid as the last tuple field.
fn misplaced_tail(ctx: &TypeContext, fields: &[TypeId]) -> bool {
    let Some((_, init)) = fields.split_last() else {
        return false;
    };
    init.iter().any(|&f| ctx.get_type(f).is_vararg())
}

/// Variables referenced in `ty` but not bound inside it, in order of first
/// occurrence. Bounds of inner quantifiers and variadic counts count as
/// references.
pub fn free_vars(ctx: &TypeContext, ty: TypeId) -> Vec<VarId> {
    let mut found = IndexSet::new();
    let mut bound = Vec::new();
    collect_free(ctx, ty, &mut bound, &mut found);
    found.into_iter().collect()
}

pub fn has_free_vars(ctx: &TypeContext, ty: TypeId) -> bool {
    !free_vars(ctx, ty).is_empty()
}

/// Whether `var` occurs free in `ty`.
pub fn occurs_free(ctx: &TypeContext, ty: TypeId, var: VarId) -> bool {
    free_vars(ctx, ty).contains(&var)
}

fn collect_free(
    ctx: &TypeContext,
    ty: TypeId,
    bound: &mut Vec<VarId>,
    found: &mut IndexSet<VarId>,
) {
    match ctx.get_type(ty) {
        TypeKind::Any | TypeKind::Bottom | TypeKind::Count(_) => {}
        TypeKind::Var(v) => note(*v, bound, found),
        TypeKind::Concrete { params: ids, .. }
        | TypeKind::Tuple(ids)
        | TypeKind::Union(ids) => {
            for &id in ids {
                collect_free(ctx, id, bound, found);
            }
        }
        TypeKind::Vararg(tail) => {
            if let Some(element) = tail.element {
                collect_free(ctx, element, bound, found);
            }
            if let Some(v) = tail.count_var() {
                note(v, bound, found);
            }
        }
        TypeKind::Quantified { var, body } => {
            let info = ctx.var_info(*var);
            collect_free(ctx, info.lower, bound, found);
            collect_free(ctx, info.upper, bound, found);
            bound.push(*var);
            collect_free(ctx, *body, bound, found);
            bound.pop();
        }
    }
}

fn note(var: VarId, bound: &[VarId], found: &mut IndexSet<VarId>) {
    if !bound.contains(&var) {
        found.insert(var);
    }
}
