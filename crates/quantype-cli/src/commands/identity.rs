use quantype::{Symbol, TypeContext, template_identity};

use super::TypeArgs;
use super::output::{format_json, print_line};
use super::type_loader::{
    LoadedType, exit_with, load_source_or_exit, parse_loaded, render_error,
};

pub fn run(args: TypeArgs) {
    let mut ctx = TypeContext::new();
    let loaded = load_source_or_exit(&args.input);

    let sym = resolve_identity(&mut ctx, &loaded)
        .unwrap_or_else(|err| exit_with(&render_error(&err, &loaded, args.output.color)));
    let name = ctx.resolve(sym);

    if args.output.json {
        print_line(&format_json(&serde_json::json!({ "identity": name })));
    } else {
        print_line(name);
    }
}

pub(crate) fn resolve_identity(
    ctx: &mut TypeContext,
    loaded: &LoadedType,
) -> quantype::Result<Symbol> {
    let ty = parse_loaded(ctx, loaded, &[])?;
    Ok(template_identity(ctx, ty)?)
}
