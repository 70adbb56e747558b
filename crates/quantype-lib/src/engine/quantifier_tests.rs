use crate::context::TypeContext;
use crate::engine::{
    bound_vars, free_vars, instantiate, quantifier_depth, rename, rewrap, substitute, unwrap,
};
use crate::types::TYPE_ANY;

const SAMPLES: &[&str] = &[
    "Int",
    "Array{Int}",
    "Tuple{Int, Vararg{String}}",
    "forall T. Array{T}",
    "forall X. forall Y. Pair{X, Y}",
    "forall T <: Number. Tuple{T, Vararg{T}}",
    "forall N. Tuple{Vararg{Int, N}}",
    "forall T. forall N. Tuple{Array{T}, Vararg{T, N}}",
    "Union{Int, String}",
];

// ========== unwrap ==========

#[test]
fn unwrap_unquantified_is_identity() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("Array{Int}");

    assert_eq!(unwrap(&ctx, ty), ty);
}

#[test]
fn unwrap_strips_every_quantifier() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall X. forall Y. Pair{X, Y}");

    let body = unwrap(&ctx, ty);

    insta::assert_snapshot!(ctx.show_ids(body), @"Pair{X#0, Y#1}");
    assert!(!ctx.get_type(body).is_quantified());
}

#[test]
fn unwrap_is_idempotent() {
    let mut ctx = TypeContext::new();
    for source in SAMPLES {
        let ty = ctx.expect_parse(source);
        let once = unwrap(&ctx, ty);
        assert_eq!(unwrap(&ctx, once), once, "{source}");
    }
}

#[test]
fn bound_vars_outer_to_inner() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall X. forall Y. forall Z. Foo{X, Y, Z}");

    let names: Vec<_> = bound_vars(&ctx, ty)
        .into_iter()
        .map(|v| ctx.var_name(v).to_owned())
        .collect();

    assert_eq!(names, ["X", "Y", "Z"]);
    assert_eq!(quantifier_depth(&ctx, ty), 3);
}

#[test]
fn quantifier_depth_stops_at_first_unquantified_body() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall X. Foo{forall Y. Bar{Y}, X}");

    assert_eq!(quantifier_depth(&ctx, ty), 1);
}

// ========== rewrap ==========

#[test]
fn rewrap_unquantified_original_returns_body() {
    let mut ctx = TypeContext::new();
    let original = ctx.expect_parse("Int");
    let body = ctx.expect_parse("Array{String}");

    assert_eq!(rewrap(&mut ctx, body, original), body);
}

#[test]
fn rewrap_reuses_original_variables() {
    let mut ctx = TypeContext::new();
    let original = ctx.expect_parse("forall X. forall Y. Pair{X, Y}");
    let [x, y] = bound_vars(&ctx, original)[..] else {
        panic!("expected two quantifiers");
    };
    let x_ref = ctx.var(x);
    let y_ref = ctx.var(y);
    let swapped = ctx.named("Pair", vec![y_ref, x_ref]);

    let res = rewrap(&mut ctx, swapped, original);

    assert_eq!(bound_vars(&ctx, res), [x, y]);
    assert_eq!(unwrap(&ctx, res), swapped);
    insta::assert_snapshot!(ctx.show_ids(res), @"forall X#0. forall Y#1. Pair{Y#1, X#0}");
}

#[test]
fn rewrap_keeps_depth_and_identities() {
    let mut ctx = TypeContext::new();
    let body = ctx.named("Whatever", vec![TYPE_ANY]);
    for source in SAMPLES {
        let original = ctx.expect_parse(source);
        let res = rewrap(&mut ctx, body, original);
        assert_eq!(bound_vars(&ctx, res), bound_vars(&ctx, original), "{source}");
        assert_eq!(unwrap(&ctx, res), body, "{source}");
    }
}

#[test]
fn rewrap_of_unwrap_round_trips() {
    let mut ctx = TypeContext::new();
    for source in SAMPLES {
        let ty = ctx.expect_parse(source);
        let body = unwrap(&ctx, ty);
        assert_eq!(rewrap(&mut ctx, body, ty), ty, "{source}");
    }
}

#[test]
fn rewrap_preserves_bounds() {
    let mut ctx = TypeContext::new();
    let original = ctx.expect_parse("forall T <: Number >: Int. Array{T}");
    let body = unwrap(&ctx, original);
    let doubled = ctx.named("Pair", vec![body, body]);

    let res = rewrap(&mut ctx, doubled, original);

    insta::assert_snapshot!(ctx.show(res), @"forall T <: Number >: Int. Pair{Array{T}, Array{T}}");
}

// ========== rename ==========

#[test]
fn rename_unquantified_is_fixed_point() {
    let mut ctx = TypeContext::new();
    for source in ["Int", "Array{Int}", "Tuple{Int, Vararg}", "Union{Int, String}"] {
        let ty = ctx.expect_parse(source);
        let vars_before = ctx.var_count();
        assert_eq!(rename(&mut ctx, ty), ty, "{source}");
        assert_eq!(ctx.var_count(), vars_before, "{source}");
    }
}

#[test]
fn rename_mints_fresh_variable() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall X. Array{X}");

    let renamed = rename(&mut ctx, ty);

    assert_ne!(renamed, ty);
    let [old] = bound_vars(&ctx, ty)[..] else {
        panic!("expected one quantifier");
    };
    let [new] = bound_vars(&ctx, renamed)[..] else {
        panic!("expected one quantifier");
    };
    assert_ne!(old, new);
    assert_eq!(ctx.var_info(old).name, ctx.var_info(new).name);
    assert_eq!(ctx.var_info(old).lower, ctx.var_info(new).lower);
    assert_eq!(ctx.var_info(old).upper, ctx.var_info(new).upper);
    insta::assert_snapshot!(ctx.show_ids(renamed), @"forall X#1. Array{X#1}");
}

#[test]
fn rename_body_is_isomorphic() {
    let mut ctx = TypeContext::new();
    for source in SAMPLES {
        let ty = ctx.expect_parse(source);
        let renamed = rename(&mut ctx, ty);

        assert_eq!(quantifier_depth(&ctx, renamed), quantifier_depth(&ctx, ty));
        assert_eq!(ctx.show(renamed), ctx.show(ty), "{source}");

        // Substituting the new variables back gives the original body.
        let mut body = unwrap(&ctx, renamed);
        for (old, new) in bound_vars(&ctx, ty).into_iter().zip(bound_vars(&ctx, renamed)) {
            let old_ref = ctx.var(old);
            body = substitute(&mut ctx, body, new, old_ref);
        }
        assert_eq!(body, unwrap(&ctx, ty), "{source}");
    }
}

#[test]
fn rename_leaves_no_reference_to_old_variables() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall T. forall N. Tuple{Array{T}, Vararg{T, N}}");
    let old = bound_vars(&ctx, ty);

    let renamed = rename(&mut ctx, ty);
    let body = unwrap(&ctx, renamed);

    let free = free_vars(&ctx, body);
    assert_eq!(free, bound_vars(&ctx, renamed));
    assert!(free.iter().all(|v| !old.contains(v)));
}

#[test]
fn rename_updates_dependent_bounds() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall T. forall S <: Array{T}. Pair{T, S}");

    let renamed = rename(&mut ctx, ty);

    insta::assert_snapshot!(ctx.show(renamed), @"forall T. forall S <: Array{T}. Pair{T, S}");
    let [t, s] = bound_vars(&ctx, renamed)[..] else {
        panic!("expected two quantifiers");
    };
    let upper = ctx.var_info(s).upper;
    assert_eq!(free_vars(&ctx, upper), [t]);
}

// ========== instantiate ==========

#[test]
fn instantiate_outermost_quantifier() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall X. forall Y. Pair{X, Y}");
    let int = ctx.named("Int", vec![]);

    let res = instantiate(&mut ctx, ty, int);

    insta::assert_snapshot!(ctx.show(res), @"forall Y. Pair{Int, Y}");
}

#[test]
fn instantiate_count_with_literal() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall N. Tuple{Int, Vararg{String, N}}");
    let three = ctx.count(3);

    let res = instantiate(&mut ctx, ty, three);

    insta::assert_snapshot!(ctx.show(res), @"Tuple{Int, Vararg{String, 3}}");
}

#[test]
fn instantiate_unquantified_is_identity() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("Array{Int}");

    assert_eq!(instantiate(&mut ctx, ty, TYPE_ANY), ty);
}

#[test]
fn instantiate_renames_binder_that_would_capture() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall X. forall Y. Pair{X, Y}");
    let [_, y] = bound_vars(&ctx, ty)[..] else {
        panic!("expected two quantifiers");
    };
    let escaped = ctx.var(y);

    let res = instantiate(&mut ctx, ty, escaped);

    insta::assert_snapshot!(ctx.show_ids(res), @"forall Y#2. Pair{Y#1, Y#2}");
    assert_eq!(free_vars(&ctx, res), [y]);
}

#[test]
fn instantiate_with_tail_before_last_field_is_total() {
    let mut ctx = TypeContext::new();
    let ty = ctx.expect_parse("forall T. Tuple{T, Int}");
    let tail = ctx.expect_parse("Vararg{Int}");

    let res = instantiate(&mut ctx, ty, tail);

    assert_eq!(res, unwrap(&ctx, ty));
    insta::assert_snapshot!(ctx.show(res), @"Tuple{T, Int}");
}
