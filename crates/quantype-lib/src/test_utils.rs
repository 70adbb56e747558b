use crate::context::TypeContext;
use crate::render::{RenderOptions, render};
use crate::syntax::parse_type;
use crate::types::TypeId;

impl TypeContext {
    /// Parse notation, panicking with the rendered error on failure.
    pub fn expect_parse(&mut self, source: &str) -> TypeId {
        match parse_type(self, source) {
            Ok(ty) => ty,
            Err(err) => panic!(
                "expected valid notation, got error:\n{}",
                err.printer(source).render()
            ),
        }
    }

    pub fn show(&self, ty: TypeId) -> String {
        render(self, ty, RenderOptions::default())
    }

    /// Render with variable ids, to make identity visible in snapshots.
    pub fn show_ids(&self, ty: TypeId) -> String {
        render(self, ty, RenderOptions { var_ids: true })
    }
}
