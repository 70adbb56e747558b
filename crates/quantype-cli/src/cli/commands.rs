//! Command builders for the CLI.
//!
//! Output flags (`--var-ids`, `--json`, `--color`, `-v`) are global and
//! accepted by every subcommand.

use clap::Command;

use super::args::*;

/// Add the type input args shared by every subcommand.
fn with_type_input(cmd: Command) -> Command {
    cmd.arg(type_text_arg()).arg(type_file_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("quantype")
        .about("Inspect and transform quantified types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(var_ids_arg())
        .arg(json_arg())
        .arg(color_arg())
        .arg(verbose_arg())
        .subcommand(show_command())
        .subcommand(unwrap_command())
        .subcommand(rewrap_command())
        .subcommand(rename_command())
        .subcommand(tail_command())
        .subcommand(identity_command())
}

/// Parse and print a type.
pub fn show_command() -> Command {
    with_type_input(
        Command::new("show")
            .about("Parse a type and print it back")
            .after_help(
                r#"EXAMPLES:
  quantype show 'forall T <: Number. Array{T}'
  quantype show --file types.qt --var-ids
  echo 'Tuple{Int, Vararg}' | quantype show -f - --json"#,
            ),
    )
}

/// Strip the quantifier chain.
pub fn unwrap_command() -> Command {
    with_type_input(
        Command::new("unwrap")
            .about("Strip every quantifier and print the body")
            .after_help(
                r#"EXAMPLES:
  quantype unwrap 'forall X. forall Y. Pair{X, Y}'   # Pair{X, Y}"#,
            ),
    )
}

/// Restore a quantifier chain around a new body.
pub fn rewrap_command() -> Command {
    with_type_input(
        Command::new("rewrap")
            .about("Reapply the quantifier chain of --like around BODY")
            .override_usage("quantype rewrap <BODY> --like <TYPE>")
            .after_help(
                r#"BODY may refer to the variables bound by --like, by name.

EXAMPLES:
  quantype rewrap 'Pair{Y, X}' --like 'forall X. forall Y. Pair{X, Y}'
  quantype rewrap 'Vararg{Array{T}, N}' --like 'forall T. forall N. Tuple{Vararg{T, N}}'"#,
            ),
    )
    .arg(like_arg())
}

/// Alpha-rename a type.
pub fn rename_command() -> Command {
    with_type_input(
        Command::new("rename")
            .about("Alpha-rename every quantifier to a fresh variable")
            .after_help(
                r#"EXAMPLES:
  quantype rename 'forall X. Array{X}' --var-ids   # forall X#1. Array{X#1}"#,
            ),
    )
}

/// Inspect a variadic tuple.
pub fn tail_command() -> Command {
    with_type_input(
        Command::new("tail")
            .about("Inspect the variadic tail of a tuple type")
            .after_help(
                r#"EXAMPLES:
  quantype tail 'forall N. Tuple{Int, Vararg{String, N}}'"#,
            ),
    )
}

/// Resolve a template identity.
pub fn identity_command() -> Command {
    with_type_input(
        Command::new("identity")
            .about("Print the template identity of a type")
            .after_help(
                r#"EXAMPLES:
  quantype identity 'forall T. Array{T}'                  # Array
  quantype identity 'Union{Array{Int}, Dict{Int, Int}}'   # error"#,
            ),
    )
}
