use std::io::{self, Write};

use quantype::{RenderOptions, TypeContext, TypeId, render, to_json};

/// Output configuration shared by every command.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    pub var_ids: bool,
    pub json: bool,
    pub color: bool,
}

impl OutputArgs {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            var_ids: self.var_ids,
        }
    }
}

/// Type in the requested format: notation, or a JSON tree.
pub fn format_type(ctx: &TypeContext, ty: TypeId, args: &OutputArgs) -> String {
    if args.json {
        return format_json(&to_json(ctx, ty));
    }
    render(ctx, ty, args.render_options())
}

pub fn format_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("error: failed to serialize output: {}", e);
        std::process::exit(1);
    })
}

pub fn print_line(text: &str) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", text) {
        eprintln!("error: failed to write output: {}", e);
        std::process::exit(1);
    }
}
