//! Predicate references.
//!
//! A predicate renders as `(<name> <args>)`. Three things decide the shape:
//!
//! - `negativeOf`: the reference is a placeholder for the negation of its
//!   counterpart; the counterpart is rendered and wrapped as `(not(...))`.
//! - `prSpecializationOf`: the name comes from the generic template and the
//!   arguments from the reference's comment, in the declared argument mode.
//! - otherwise the predicate's own label and `Parameters` list are used.

use crate::comment::ListTag;
use crate::entity::EntityId;
use crate::error::EmitResult;
use crate::graph::KnowledgeBase;
use crate::relation::Relation;

use super::Emitter;

impl<K: KnowledgeBase + ?Sized> Emitter<'_, K> {
    /// Render one predicate reference.
    pub fn render_predicate(&self, predicate: EntityId) -> EmitResult<String> {
        match self.single(predicate, Relation::NegativeOf)? {
            Some(positive) => {
                let inner = self.predicate_form(positive)?;
                Ok(format!("(not{inner})"))
            }
            None => self.predicate_form(predicate),
        }
    }

    /// Render a sequence of predicates by adjacency.
    pub fn render_predicates(&self, predicates: &[EntityId]) -> EmitResult<String> {
        let mut out = String::new();
        for &p in predicates {
            out.push_str(&self.render_predicate(p)?);
        }
        Ok(out)
    }

    fn predicate_form(&self, predicate: EntityId) -> EmitResult<String> {
        let Some(generic) = self.single(predicate, Relation::PrSpecializationOf)? else {
            let name = self.label(predicate)?;
            let params = self.arguments(predicate, Relation::PrHasParameter, ListTag::Parameters)?;
            return Ok(format!("({name}{params})"));
        };

        let name = self.label(generic)?;
        let args = match self.argument_mode(predicate)? {
            ListTag::Objects => self.arguments(predicate, Relation::PrHasObject, ListTag::Objects)?,
            ListTag::Parameters => {
                self.arguments(predicate, Relation::PrHasParameter, ListTag::Parameters)?
            }
            ListTag::Mixed => self.comment_list(predicate, ListTag::Mixed)?,
        };
        Ok(format!("({name}{args})"))
    }
}
