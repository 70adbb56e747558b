use crate::context::TypeContext;
use crate::engine::{bound_vars, free_vars, has_free_vars, occurs_free, substitute, unwrap};
use crate::types::{TYPE_ANY, TypeId, TypeKind};

#[test]
fn substitute_free_occurrences() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall T. Pair{T, Array{T}}");
    let [t] = bound_vars(&ctx, ty)[..] else {
        panic!("expected one quantifier");
    };
    let body = unwrap(&ctx, ty);
    let int = ctx.named("Int", vec![]);

    let res = substitute(&mut ctx, body, t, int);

    insta::assert_snapshot!(ctx.show(res), @"Pair{Int, Array{Int}}");
}

#[test]
fn substitute_without_occurrence_keeps_id() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("Tuple{Int, Vararg{String, 2}}");
    let v = ctx.new_unbounded_var("V");

    assert_eq!(substitute(&mut ctx, ty, v, TYPE_ANY), ty);
}

#[test]
fn substitute_respects_shadowing() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall T. Pair{T, forall U. U}");
    let [t] = bound_vars(&ctx, ty)[..] else {
        panic!("expected one quantifier");
    };
    let int = ctx.named("Int", vec![]);

    // `ty` binds `t` itself, so nothing inside is free.
    assert_eq!(substitute(&mut ctx, ty, t, int), ty);
}

#[test]
fn substitute_renames_capturing_binder() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall X. forall Y. Pair{X, Y}");
    let [x, y] = bound_vars(&ctx, ty)[..] else {
        panic!("expected two quantifiers");
    };
    let inner = unwrap_one(&ctx, ty);
    let y_ref = ctx.var(y);

    let res = substitute(&mut ctx, inner, x, y_ref);

    let [binder] = bound_vars(&ctx, res)[..] else {
        panic!("expected one quantifier");
    };
    assert_ne!(binder, y);
    assert_eq!(ctx.var_name(binder), "Y");
    assert_eq!(free_vars(&ctx, res), [y]);
    insta::assert_snapshot!(ctx.show_ids(res), @"forall Y#2. Pair{Y#1, Y#2}");
}

#[test]
fn substitute_into_bounds_mints_new_binder() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall T. forall S <: Array{T}. Pair{T, S}");
    let [t, s] = bound_vars(&ctx, ty)[..] else {
        panic!("expected two quantifiers");
    };
    let inner = unwrap_one(&ctx, ty);
    let int = ctx.named("Int", vec![]);

    let res = substitute(&mut ctx, inner, t, int);

    insta::assert_snapshot!(ctx.show(res), @"forall S <: Array{Int}. Pair{Int, S}");
    let [binder] = bound_vars(&ctx, res)[..] else {
        panic!("expected one quantifier");
    };
    assert_ne!(binder, s);
    // The original variable keeps its bounds.
    insta::assert_snapshot!(ctx.show(ctx.var_info(s).upper), @"Array{T}");
}

#[test]
fn substitute_count_with_variable() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall N. Tuple{Vararg{Int, N}}");
    let [n] = bound_vars(&ctx, ty)[..] else {
        panic!("expected one quantifier");
    };
    let body = unwrap(&ctx, ty);
    let m = ctx.new_unbounded_var("M");
    let m_ref = ctx.var(m);

    let res = substitute(&mut ctx, body, n, m_ref);

    insta::assert_snapshot!(ctx.show(res), @"Tuple{Vararg{Int, M}}");
}

#[test]
fn substitute_count_with_non_count_drops_length() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall N. Tuple{Vararg{Int, N}}");
    let [n] = bound_vars(&ctx, ty)[..] else {
        panic!("expected one quantifier");
    };
    let body = unwrap(&ctx, ty);
    let string = ctx.named("String", vec![]);

    let res = substitute(&mut ctx, body, n, string);

    insta::assert_snapshot!(ctx.show(res), @"Tuple{Vararg{Int}}");
}

#[test]
fn substitute_into_union_normalizes() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall T. Union{T, Int}");
    let [t] = bound_vars(&ctx, ty)[..] else {
        panic!("expected one quantifier");
    };
    let body = unwrap(&ctx, ty);
    let int = ctx.named("Int", vec![]);

    assert_eq!(substitute(&mut ctx, body, t, int), int);
}

#[test]
fn substitute_tail_into_last_tuple_field() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall T. Tuple{Int, T}");
    let [t] = bound_vars(&ctx, ty)[..] else {
        panic!("expected one quantifier");
    };
    let body = unwrap(&ctx, ty);
    let tail = ctx.expect_parse("Vararg{Int}");

    let res = substitute(&mut ctx, body, t, tail);

    insta::assert_snapshot!(ctx.show(res), @"Tuple{Int, Vararg{Int}}");
}

#[test]
fn substitute_tail_into_inner_tuple_field_keeps_tuple() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall T. Pair{Tuple{T, Int}, T}");
    let [t] = bound_vars(&ctx, ty)[..] else {
        panic!("expected one quantifier");
    };
    let body = unwrap(&ctx, ty);
    let tail = ctx.expect_parse("Vararg{Int}");

    let res = substitute(&mut ctx, body, t, tail);

    insta::assert_snapshot!(ctx.show(res), @"Pair{Tuple{T, Int}, Vararg{Int}}");
}

// ========== Free variables ==========

#[test]
fn free_vars_in_first_occurrence_order() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall A. forall B. Foo{B, A, B}");
    let [a, b] = bound_vars(&ctx, ty)[..] else {
        panic!("expected two quantifiers");
    };
    let body = unwrap(&ctx, ty);

    assert_eq!(free_vars(&ctx, body), [b, a]);
    assert!(free_vars(&ctx, ty).is_empty());
    assert!(has_free_vars(&ctx, body));
    assert!(!has_free_vars(&ctx, ty));
}

#[test]
fn free_vars_include_counts_and_bounds() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall T. forall N. forall S <: Array{T}. Tuple{S, Vararg{Int, N}}");
    let [t, n, _] = bound_vars(&ctx, ty)[..] else {
        panic!("expected three quantifiers");
    };
    let inner = unwrap_one(&ctx, unwrap_one(&ctx, ty));

    assert_eq!(free_vars(&ctx, inner), [t, n]);
    assert!(occurs_free(&ctx, inner, n));
    assert!(!occurs_free(&ctx, ty, n));
}

fn unwrap_one(ctx: &TypeContext, ty: TypeId) -> TypeId {
    match ctx.get_type(ty) {
        TypeKind::Quantified { body, .. } => *body,
        _ => panic!("expected a quantified type"),
    }
}
