use quantype::{TypeContext, engine};

use super::TypeArgs;
use super::output::{format_type, print_line};
use super::type_loader::load_or_exit;

pub fn run(args: TypeArgs) {
    let mut ctx = TypeContext::new();
    let ty = load_or_exit(&mut ctx, &args.input, args.output.color);

    let renamed = engine::rename(&mut ctx, ty);
    print_line(&format_type(&ctx, renamed, &args.output));
}
