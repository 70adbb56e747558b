//! Variadic tail queries and length normalization.

use crate::context::TypeContext;
use crate::types::{CountRef, TYPE_ANY, TypeId, TypeKind, VariadicTail};

use super::quantifier::{rewrap, unwrap};

pub fn is_variadic_tail(ctx: &TypeContext, ty: TypeId) -> bool {
    ctx.get_type(ty).is_vararg()
}

/// Whether `ty`, once unwrapped, is a tuple whose last field is a variadic tail.
pub fn is_variadic_tuple(ctx: &TypeContext, ty: TypeId) -> bool {
    tuple_tail(ctx, ty).is_some()
}

/// The variadic tail closing the unwrapped tuple `ty`, if any.
pub fn tuple_tail(ctx: &TypeContext, ty: TypeId) -> Option<TypeId> {
    let fields = ctx.get_type(unwrap(ctx, ty)).as_tuple()?;
    let &last = fields.last()?;
    is_variadic_tail(ctx, last).then_some(last)
}

/// Element type of a variadic tail (`Any` when it has none); any other type
/// is returned unchanged.
pub fn tail_element_type(ctx: &TypeContext, ty: TypeId) -> TypeId {
    match ctx.get_type(ty) {
        TypeKind::Vararg(tail) => tail.element.unwrap_or(TYPE_ANY),
        _ => ty,
    }
}

/// Count of a variadic tail; `None` for other types and for unbounded tails.
pub fn tail_count(ctx: &TypeContext, ty: TypeId) -> Option<CountRef> {
    ctx.get_type(ty).as_vararg().and_then(|tail| tail.count)
}

/// Same element type, count cleared. Idempotent.
pub fn unconstrain_tail_length(tail: &VariadicTail) -> VariadicTail {
    tail.unconstrained()
}

/// Clear the count of the variadic tail in `ty`.
///
/// Accepts either a tail node or a (possibly quantified) variadic tuple. The
/// quantifier chain of a tuple is kept, including a quantifier that now only
/// bound the dropped count. Anything else comes back unchanged.
pub fn unconstrain_tuple_tail(ctx: &mut TypeContext, ty: TypeId) -> TypeId {
    if let Some(&tail) = ctx.get_type(ty).as_vararg() {
        return ctx.vararg(unconstrain_tail_length(&tail));
    }

    let Some(tail_id) = tuple_tail(ctx, ty) else {
        return ty;
    };
    let body = unwrap(ctx, ty);
    let mut fields = match ctx.get_type(body).as_tuple() {
        Some(fields) => fields.to_vec(),
        None => return ty,
    };

    let Some(&tail) = ctx.get_type(tail_id).as_vararg() else {
        return ty;
    };
    let new_tail = ctx.vararg(unconstrain_tail_length(&tail));
    if let Some(last) = fields.last_mut() {
        *last = new_tail;
    }

    let new_body = ctx.tuple(fields);
    rewrap(ctx, new_body, ty)
}
