use quantype::{CountRef, TypeContext, TypeId, engine, render};

use super::TypeArgs;
use super::output::{OutputArgs, format_json, print_line};
use super::type_loader::load_or_exit;

pub fn run(args: TypeArgs) {
    let mut ctx = TypeContext::new();
    let ty = load_or_exit(&mut ctx, &args.input, args.output.color);

    let Some(tail) = engine::tuple_tail(&ctx, ty) else {
        eprintln!("error: `{}` is not a variadic tuple", render::display(&ctx, ty));
        std::process::exit(1);
    };

    // Counts are rendered as type nodes: a literal or a variable reference.
    let count = engine::tail_count(&ctx, tail).map(|count| match count {
        CountRef::Fixed(n) => ctx.count(n),
        CountRef::Var(var) => ctx.var(var),
    });
    let report = TailReport {
        element: engine::tail_element_type(&ctx, tail),
        count,
        unconstrained: engine::unconstrain_tuple_tail(&mut ctx, ty),
    };
    print_line(&report.format(&ctx, &args.output));
}

struct TailReport {
    element: TypeId,
    count: Option<TypeId>,
    unconstrained: TypeId,
}

impl TailReport {
    fn format(&self, ctx: &TypeContext, output: &OutputArgs) -> String {
        if output.json {
            return format_json(&serde_json::json!({
                "element": render::to_json(ctx, self.element),
                "count": self.count.map(|c| render::to_json(ctx, c)),
                "unconstrained": render::to_json(ctx, self.unconstrained),
            }));
        }

        let options = output.render_options();
        let count = match self.count {
            Some(c) => render::render(ctx, c, options),
            None => "unbounded".to_string(),
        };
        format!(
            "element:       {}\ncount:         {}\nunconstrained: {}",
            render::render(ctx, self.element, options),
            count,
            render::render(ctx, self.unconstrained, options)
        )
    }
}
