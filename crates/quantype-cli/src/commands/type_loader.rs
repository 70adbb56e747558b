use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use quantype::syntax::Parser;
use quantype::{Error, TypeContext, TypeId, VarId};

/// Where a type's notation comes from.
#[derive(Debug, Default)]
pub struct TypeInput {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

/// Notation text with the name it is reported under.
#[derive(Debug)]
pub struct LoadedType {
    pub source: String,
    pub path: Option<String>,
}

pub fn load_type_source(input: &TypeInput) -> Result<LoadedType, String> {
    let loaded = if let Some(text) = &input.text {
        LoadedType {
            source: text.clone(),
            path: None,
        }
    } else if let Some(path) = &input.file {
        if path.as_os_str() == "-" {
            load_stdin()?
        } else {
            load_file(path)?
        }
    } else {
        return Err("type is required: use a positional argument or --file".to_string());
    };

    if loaded.source.trim().is_empty() {
        return Err("type cannot be empty".to_string());
    }
    Ok(loaded)
}

fn load_stdin() -> Result<LoadedType, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(LoadedType {
        source: buf,
        path: Some("<stdin>".to_string()),
    })
}

fn load_file(path: &Path) -> Result<LoadedType, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(LoadedType {
        source,
        path: Some(path.to_string_lossy().into_owned()),
    })
}

/// Parse `loaded` with `scope` visible by name.
pub fn parse_loaded(
    ctx: &mut TypeContext,
    loaded: &LoadedType,
    scope: &[VarId],
) -> quantype::Result<TypeId> {
    Ok(Parser::new(ctx, &loaded.source).with_scope(scope).parse()?)
}

/// Render a library error for stderr. Parse errors point into `loaded`.
pub fn render_error(err: &Error, loaded: &LoadedType, color: bool) -> String {
    match err {
        Error::Parse(parse) => {
            let mut printer = parse.printer(&loaded.source).colored(color);
            if let Some(path) = &loaded.path {
                printer = printer.path(path);
            }
            printer.render()
        }
        other => format!("error: {}", other),
    }
}

/// Print a failure and exit with status 1.
pub fn exit_with(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

/// Load a type's notation, or report and exit.
pub fn load_source_or_exit(input: &TypeInput) -> LoadedType {
    load_type_source(input).unwrap_or_else(|msg| exit_with(&format!("error: {}", msg)))
}

/// Load and parse a type, or report and exit.
pub fn load_or_exit(ctx: &mut TypeContext, input: &TypeInput, color: bool) -> TypeId {
    let loaded = load_source_or_exit(input);
    parse_loaded(ctx, &loaded, &[])
        .unwrap_or_else(|err| exit_with(&render_error(&err, &loaded, color)))
}
