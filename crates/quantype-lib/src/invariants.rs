//! Invariant checks excluded from coverage reports.
//!
//! Every check here guards a contract the type constructor owns. A failure
//! means a node was built wrong upstream, so the operation aborts instead of
//! producing a silently wrong type.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::context::TypeContext;
use crate::types::{BoundVar, TypeId, TypeKind, VarId};

impl TypeContext {
    pub(crate) fn ensure_type(&self, id: TypeId) -> &TypeKind {
        self.try_get_type(id).unwrap_or_else(|| {
            panic!(
                "TypeContext: type {} not found \
                 (ids must come from the context that minted them)",
                id.as_u32()
            )
        })
    }

    pub(crate) fn ensure_var(&self, var: VarId) -> &BoundVar {
        self.try_var_info(var).unwrap_or_else(|| {
            panic!(
                "TypeContext: variable {} not found \
                 (ids must come from the context that minted them)",
                var.as_u32()
            )
        })
    }

    pub(crate) fn ensure_tail_last(&self, fields: &[TypeId]) {
        let Some((_, init)) = fields.split_last() else {
            return;
        };
        if let Some(pos) = init.iter().position(|&f| self.ensure_type(f).is_vararg()) {
            panic!(
                "TypeContext: variadic tail at tuple position {pos} of {} \
                 (a tail is only valid as the last field)",
                fields.len()
            );
        }
    }
}
