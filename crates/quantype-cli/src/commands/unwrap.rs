use quantype::{TypeContext, engine};

use super::TypeArgs;
use super::output::{format_type, print_line};
use super::type_loader::load_or_exit;

pub fn run(args: TypeArgs) {
    let mut ctx = TypeContext::new();
    let ty = load_or_exit(&mut ctx, &args.input, args.output.color);

    let body = engine::unwrap(&ctx, ty);
    log::debug!(
        "stripped {} quantifier(s)",
        engine::quantifier_depth(&ctx, ty)
    );
    print_line(&format_type(&ctx, body, &args.output));
}
