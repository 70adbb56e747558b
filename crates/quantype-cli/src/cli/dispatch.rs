//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors read the subcommand's matches, global flags
//!   included
//! - `From<*Params>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::TypeArgs;
use crate::commands::output::OutputArgs;
use crate::commands::rewrap::RewrapArgs;
use crate::commands::type_loader::TypeInput;

/// Type input shared by every subcommand.
pub struct InputParams {
    pub type_text: Option<String>,
    pub type_file: Option<PathBuf>,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            type_text: m.get_one::<String>("type_text").cloned(),
            type_file: m.get_one::<PathBuf>("type_file").cloned(),
        }
    }
}

impl From<InputParams> for TypeInput {
    fn from(p: InputParams) -> Self {
        Self {
            text: p.type_text,
            file: p.type_file,
        }
    }
}

/// Global output flags.
pub struct OutputParams {
    pub var_ids: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl OutputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            var_ids: m.get_flag("var_ids"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<OutputParams> for OutputArgs {
    fn from(p: OutputParams) -> Self {
        Self {
            var_ids: p.var_ids,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

/// Params for the single-type commands: show, unwrap, rename, tail, identity.
pub struct TypeParams {
    pub input: InputParams,
    pub output: OutputParams,
}

impl TypeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            output: OutputParams::from_matches(m),
        }
    }
}

impl From<TypeParams> for TypeArgs {
    fn from(p: TypeParams) -> Self {
        Self {
            input: p.input.into(),
            output: p.output.into(),
        }
    }
}

pub struct RewrapParams {
    pub body: InputParams,
    pub like: String,
    pub output: OutputParams,
}

impl RewrapParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            body: InputParams::from_matches(m),
            like: m
                .get_one::<String>("like")
                .cloned()
                .unwrap_or_default(),
            output: OutputParams::from_matches(m),
        }
    }
}

impl From<RewrapParams> for RewrapArgs {
    fn from(p: RewrapParams) -> Self {
        Self {
            body: p.body.into(),
            like: p.like,
            output: p.output.into(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
