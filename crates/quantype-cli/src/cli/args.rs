//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be reused
//! across commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Type in notation (positional).
pub fn type_text_arg() -> Arg {
    Arg::new("type_text")
        .value_name("TYPE")
        .help("Type in notation, e.g. 'forall T. Array{T}'")
}

/// Read the type from a file instead (--file, `-` for stdin).
pub fn type_file_arg() -> Arg {
    Arg::new("type_file")
        .short('f')
        .long("file")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("type_text")
        .help("Read the type from a file ('-' for stdin)")
}

/// Quantified type whose chain is restored (--like).
pub fn like_arg() -> Arg {
    Arg::new("like")
        .long("like")
        .value_name("TYPE")
        .required(true)
        .help("Type whose quantifier chain is reapplied")
}

/// Show variable identities (--var-ids).
pub fn var_ids_arg() -> Arg {
    Arg::new("var_ids")
        .long("var-ids")
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Suffix every variable with its identity, e.g. T#0")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Print results as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .global(true)
        .help("Colorize diagnostics")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log engine activity (-v debug, -vv trace); RUST_LOG overrides")
}
