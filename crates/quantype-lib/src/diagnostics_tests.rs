use indoc::indoc;

use crate::context::TypeContext;
use crate::syntax::parse_type;

fn parse_error(source: &str) -> crate::syntax::ParseError {
    let mut ctx = TypeContext::new();
    parse_type(&mut ctx, source).expect_err("expected a parse error")
}

#[test]
fn printer_points_at_span() {
    let source = "Pair{Int, }";
    let err = parse_error(source);

    let res = err.printer(source).render();

    insta::assert_snapshot!(res, @r"
    error: expected a type, found `}`
      |
    1 | Pair{Int, }
      |           ^ expected a type, found `}`
    ");
}

#[test]
fn printer_with_path() {
    let source = "Pair{Int, }";
    let err = parse_error(source);

    let res = err.printer(source).path("pair.qt").render();

    insta::assert_snapshot!(res, @r"
    error: expected a type, found `}`
     --> pair.qt:1:11
      |
    1 | Pair{Int, }
      |           ^ expected a type, found `}`
    ");
}

#[test]
fn printer_reports_line_of_error() {
    let source = indoc! {"
        forall T.
          Tuple{T, Vararg{T, N}}
    "};
    let err = parse_error(source);

    let res = err.printer(source).render();

    insta::assert_snapshot!(res, @r"
    error: count `N` is not a bound variable
      |
    2 |   Tuple{T, Vararg{T, N}}
      |                      ^ count `N` is not a bound variable
    ");
}

#[test]
fn library_error_wraps_parse_error() {
    let err = crate::Error::from(parse_error("Array{Int"));

    insta::assert_snapshot!(err, @"parse error: expected `,` or `}`, found end of input");
}
