//! Template identity: the name shared by every instantiation of a generic type.

use quantype_core::Symbol;

use crate::context::TypeContext;
use crate::types::{TypeId, TypeKind};

/// Error while resolving a template identity.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// Union alternatives resolve to different templates.
    #[error("union spans unrelated templates `{left}` and `{right}`")]
    Mismatch { left: String, right: String },
    /// The type shape has no template identity.
    #[error("{shape} has no template identity")]
    Unsupported { shape: &'static str },
}

/// Resolve the template identity of `ty`.
///
/// Quantifiers are looked through and `Any` is its own template. Every
/// alternative of a union must resolve to the same template, otherwise the
/// union is reported as a mismatch rather than picking one side. The empty
/// union (`Bottom`) has no identity.
pub fn template_identity(ctx: &TypeContext, ty: TypeId) -> Result<Symbol, IdentityError> {
    match ctx.get_type(ty) {
        TypeKind::Concrete { name, .. } => Ok(*name),
        TypeKind::Any => Ok(ctx.any_name()),
        TypeKind::Tuple(_) => Ok(ctx.tuple_name()),
        TypeKind::Quantified { body, .. } => template_identity(ctx, *body),
        TypeKind::Union(alternatives) => union_identity(ctx, alternatives),
        other => {
            log::debug!("no template identity for {}", other.shape_name());
            Err(IdentityError::Unsupported {
                shape: other.shape_name(),
            })
        }
    }
}

fn union_identity(ctx: &TypeContext, alternatives: &[TypeId]) -> Result<Symbol, IdentityError> {
    let mut iter = alternatives.iter();
    let Some(&first) = iter.next() else {
        return Err(IdentityError::Unsupported {
            shape: TypeKind::Bottom.shape_name(),
        });
    };

    let name = template_identity(ctx, first)?;
    for &alt in iter {
        let other = template_identity(ctx, alt)?;
        if other != name {
            log::debug!(
                "union mixes templates `{}` and `{}`",
                ctx.resolve(name),
                ctx.resolve(other)
            );
            return Err(IdentityError::Mismatch {
                left: ctx.resolve(name).to_owned(),
                right: ctx.resolve(other).to_owned(),
            });
        }
    }
    Ok(name)
}
