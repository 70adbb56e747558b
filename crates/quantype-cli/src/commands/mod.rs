pub mod identity;
pub mod output;
pub mod rename;
pub mod rewrap;
pub mod show;
pub mod tail;
pub mod type_loader;
pub mod unwrap;


use output::OutputArgs;
use type_loader::TypeInput;

/// Args of the commands that take a single type.
pub struct TypeArgs {
    pub input: TypeInput,
    pub output: OutputArgs,
}
