//! Quantifier chain operations: unwrap, rewrap, rename.

use crate::context::TypeContext;
use crate::types::{TypeId, TypeKind, VarId, VariadicTail};

use super::substitute::substitute;

/// Strip every quantifier and return the first unquantified body.
///
/// Total and idempotent; an unquantified type comes back unchanged.
pub fn unwrap(ctx: &TypeContext, ty: TypeId) -> TypeId {
    let mut current = ty;
    while let TypeKind::Quantified { body, .. } = ctx.get_type(current) {
        current = *body;
    }
    current
}

/// The quantifier chain of `ty`, outer to inner.
pub fn bound_vars(ctx: &TypeContext, ty: TypeId) -> Vec<VarId> {
    let mut vars = Vec::new();
    let mut current = ty;
    while let TypeKind::Quantified { var, body } = ctx.get_type(current) {
        vars.push(*var);
        current = *body;
    }
    vars
}

pub fn quantifier_depth(ctx: &TypeContext, ty: TypeId) -> usize {
    let mut depth = 0;
    let mut current = ty;
    while let TypeKind::Quantified { body, .. } = ctx.get_type(current) {
        depth += 1;
        current = *body;
    }
    depth
}

/// Re-apply the quantifier chain of `original` around `body`.
///
/// The same variables are reused, so references inside `body` that point at
/// `original`'s variables stay bound. A variadic tail body only gets its
/// element type rewrapped.
pub fn rewrap(ctx: &mut TypeContext, body: TypeId, original: TypeId) -> TypeId {
    if let Some(&tail) = ctx.get_type(body).as_vararg() {
        return rewrap_tail(ctx, body, tail, original);
    }
    let chain = bound_vars(ctx, original);
    rewrap_chain(ctx, body, &chain)
}

fn rewrap_chain(ctx: &mut TypeContext, body: TypeId, chain: &[VarId]) -> TypeId {
    log::trace!(
        "rewrap type {} under {} quantifier(s)",
        body.as_u32(),
        chain.len()
    );
    chain
        .iter()
        .rev()
        .fold(body, |acc, &var| ctx.quantified(var, acc))
}

/// Rewrap for a variadic tail.
///
/// The chain of `original` is walked outer to inner and applied to the
/// tail's element type. The walk stops at the quantifier that binds the
/// tail's own count: that variable has to stay free in the tail, and the
/// quantifiers inside it may depend on it. A count bound outside `original`
/// (or a fixed one) stops nothing. The count itself is never touched.
fn rewrap_tail(
    ctx: &mut TypeContext,
    body: TypeId,
    tail: VariadicTail,
    original: TypeId,
) -> TypeId {
    let Some(element) = tail.element else {
        return body;
    };

    let chain = bound_vars(ctx, original);
    if chain.is_empty() {
        return body;
    }

    let kept = match tail.count_var() {
        Some(count_var) => chain
            .iter()
            .take_while(|&&var| var != count_var)
            .copied()
            .collect(),
        None => chain,
    };

    let element = rewrap_chain(ctx, element, &kept);
    ctx.vararg(VariadicTail { element: Some(element), ..tail })
}

/// Alpha-rename every quantifier of `ty` to a fresh variable.
///
/// Fresh variables keep the name and bounds of the ones they replace. An
/// unquantified type is returned as is (same id).
pub fn rename(ctx: &mut TypeContext, ty: TypeId) -> TypeId {
    let TypeKind::Quantified { var, body } = *ctx.get_type(ty) else {
        return ty;
    };

    let renamed_body = rename(ctx, body);

    let info = *ctx.var_info(var);
    let fresh = ctx.new_var(info.name, info.lower, info.upper);
    log::trace!(
        "rename `{}`: var {} -> var {}",
        ctx.resolve(info.name),
        var.as_u32(),
        fresh.as_u32()
    );

    let fresh_ref = ctx.var(fresh);
    let new_body = substitute(ctx, renamed_body, var, fresh_ref);
    ctx.quantified(fresh, new_body)
}

/// Apply the outermost quantifier of `ty` to `arg`.
///
/// An unquantified type is returned unchanged.
pub fn instantiate(ctx: &mut TypeContext, ty: TypeId, arg: TypeId) -> TypeId {
    let TypeKind::Quantified { var, body } = *ctx.get_type(ty) else {
        return ty;
    };
    substitute(ctx, body, var, arg)
}
