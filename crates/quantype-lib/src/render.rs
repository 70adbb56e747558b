//! Rendering types back to notation and to JSON.

use std::fmt::Write;

use serde::Serialize;

use crate::context::TypeContext;
use crate::types::{CountRef, TYPE_ANY, TYPE_BOTTOM, TypeId, TypeKind, VarId};

/// Output configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// Suffix every variable with `#<id>` so identity is visible.
    pub var_ids: bool,
}

/// Render `ty` in the notation accepted by the parser.
///
/// With `var_ids` set the output is for display only: `#` starts a comment
/// in the notation.
pub fn render(ctx: &TypeContext, ty: TypeId, options: RenderOptions) -> String {
    let mut out = String::new();
    Printer { ctx, options }
        .write_type(&mut out, ty)
        .expect("String write never fails");
    out
}

/// Shorthand for [`render`] with default options.
pub fn display(ctx: &TypeContext, ty: TypeId) -> String {
    render(ctx, ty, RenderOptions::default())
}

struct Printer<'c> {
    ctx: &'c TypeContext,
    options: RenderOptions,
}

impl Printer<'_> {
    fn write_type(&self, w: &mut impl Write, ty: TypeId) -> std::fmt::Result {
        match self.ctx.get_type(ty) {
            TypeKind::Any => w.write_str("Any"),
            TypeKind::Bottom => w.write_str("Bottom"),
            TypeKind::Concrete { name, params } => {
                w.write_str(self.ctx.resolve(*name))?;
                if params.is_empty() {
                    return Ok(());
                }
                self.write_list(w, params)
            }
            TypeKind::Tuple(fields) => {
                w.write_str("Tuple")?;
                self.write_list(w, fields)
            }
            TypeKind::Vararg(tail) => {
                w.write_str("Vararg")?;
                if tail.element.is_none() && tail.count.is_none() {
                    return Ok(());
                }
                w.write_char('{')?;
                self.write_type(w, tail.element.unwrap_or(TYPE_ANY))?;
                if let Some(count) = tail.count {
                    w.write_str(", ")?;
                    self.write_count(w, count)?;
                }
                w.write_char('}')
            }
            TypeKind::Count(n) => write!(w, "{n}"),
            TypeKind::Var(var) => self.write_var(w, *var),
            TypeKind::Quantified { var, body } => {
                w.write_str("forall ")?;
                self.write_binder(w, *var)?;
                w.write_str(". ")?;
                self.write_type(w, *body)
            }
            TypeKind::Union(alternatives) => {
                w.write_str("Union")?;
                self.write_list(w, alternatives)
            }
        }
    }

    fn write_list(&self, w: &mut impl Write, ids: &[TypeId]) -> std::fmt::Result {
        w.write_char('{')?;
        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                w.write_str(", ")?;
            }
            self.write_type(w, id)?;
        }
        w.write_char('}')
    }

    fn write_count(&self, w: &mut impl Write, count: CountRef) -> std::fmt::Result {
        match count {
            CountRef::Fixed(n) => write!(w, "{n}"),
            CountRef::Var(var) => self.write_var(w, var),
        }
    }

    fn write_var(&self, w: &mut impl Write, var: VarId) -> std::fmt::Result {
        w.write_str(self.ctx.var_name(var))?;
        if self.options.var_ids {
            write!(w, "#{}", var.as_u32())?;
        }
        Ok(())
    }

    fn write_binder(&self, w: &mut impl Write, var: VarId) -> std::fmt::Result {
        self.write_var(w, var)?;
        let info = self.ctx.var_info(var);
        if info.upper != TYPE_ANY {
            w.write_str(" <: ")?;
            self.write_bound(w, info.upper)?;
        }
        if info.lower != TYPE_BOTTOM {
            w.write_str(" >: ")?;
            self.write_bound(w, info.lower)?;
        }
        Ok(())
    }

    // Bounds parse as atoms.
    fn write_bound(&self, w: &mut impl Write, ty: TypeId) -> std::fmt::Result {
        if self.ctx.get_type(ty).is_quantified() {
            w.write_char('(')?;
            self.write_type(w, ty)?;
            return w.write_char(')');
        }
        self.write_type(w, ty)
    }
}

// ============================================================================
// JSON
// ============================================================================

/// Owned, serializable view of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeTree {
    Any,
    Bottom,
    Concrete {
        name: String,
        params: Vec<TypeTree>,
    },
    Tuple {
        fields: Vec<TypeTree>,
    },
    Vararg {
        #[serde(skip_serializing_if = "Option::is_none")]
        element: Option<Box<TypeTree>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        count: Option<CountTree>,
    },
    Count {
        value: u64,
    },
    Var(VarTree),
    Quantified {
        var: VarTree,
        lower: Box<TypeTree>,
        upper: Box<TypeTree>,
        body: Box<TypeTree>,
    },
    Union {
        alternatives: Vec<TypeTree>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarTree {
    pub name: String,
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CountTree {
    Fixed(u64),
    Var(VarTree),
}

impl TypeTree {
    pub fn build(ctx: &TypeContext, ty: TypeId) -> Self {
        let var_tree = |var: VarId| VarTree {
            name: ctx.var_name(var).to_owned(),
            id: var.as_u32(),
        };
        let all = |ids: &[TypeId]| ids.iter().map(|&id| Self::build(ctx, id)).collect();

        match ctx.get_type(ty) {
            TypeKind::Any => TypeTree::Any,
            TypeKind::Bottom => TypeTree::Bottom,
            TypeKind::Concrete { name, params } => TypeTree::Concrete {
                name: ctx.resolve(*name).to_owned(),
                params: all(params),
            },
            TypeKind::Tuple(fields) => TypeTree::Tuple {
                fields: all(fields),
            },
            TypeKind::Vararg(tail) => TypeTree::Vararg {
                element: tail.element.map(|e| Box::new(Self::build(ctx, e))),
                count: tail.count.map(|count| match count {
                    CountRef::Fixed(n) => CountTree::Fixed(n),
                    CountRef::Var(var) => CountTree::Var(var_tree(var)),
                }),
            },
            TypeKind::Count(n) => TypeTree::Count { value: *n },
            TypeKind::Var(var) => TypeTree::Var(var_tree(*var)),
            TypeKind::Quantified { var, body } => {
                let info = ctx.var_info(*var);
                TypeTree::Quantified {
                    var: var_tree(*var),
                    lower: Box::new(Self::build(ctx, info.lower)),
                    upper: Box::new(Self::build(ctx, info.upper)),
                    body: Box::new(Self::build(ctx, *body)),
                }
            }
            TypeKind::Union(alternatives) => TypeTree::Union {
                alternatives: all(alternatives),
            },
        }
    }
}

/// Serialize `ty` as a JSON tree.
pub fn to_json(ctx: &TypeContext, ty: TypeId) -> serde_json::Value {
    serde_json::to_value(TypeTree::build(ctx, ty)).expect("TypeTree always serializes")
}
