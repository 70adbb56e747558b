use quantype::{TypeContext, engine};

use super::output::{OutputArgs, format_type, print_line};
use super::type_loader::{
    LoadedType, TypeInput, exit_with, load_source_or_exit, parse_loaded, render_error,
};

pub struct RewrapArgs {
    pub body: TypeInput,
    pub like: String,
    pub output: OutputArgs,
}

pub fn run(args: RewrapArgs) {
    let color = args.output.color;
    let mut ctx = TypeContext::new();

    let like = LoadedType {
        source: args.like,
        path: Some("--like".to_string()),
    };
    let original = parse_loaded(&mut ctx, &like, &[])
        .unwrap_or_else(|err| exit_with(&render_error(&err, &like, color)));

    // The body sees the chain of `original` by name, so it shares its variables.
    let chain = engine::bound_vars(&ctx, original);
    let loaded = load_source_or_exit(&args.body);
    let body = parse_loaded(&mut ctx, &loaded, &chain)
        .unwrap_or_else(|err| exit_with(&render_error(&err, &loaded, color)));

    let res = engine::rewrap(&mut ctx, body, original);
    print_line(&format_type(&ctx, res, &args.output));
}
