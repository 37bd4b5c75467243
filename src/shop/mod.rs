//! SHOP serializer: linearizes the planning knowledge base into
//! `defdomain`/`defproblem` S-expressions.
//!
//! The [`Emitter`] borrows a [`KnowledgeBase`] and renders, leaf-first:
//!
//! - predicate references (`predicate`): negation and specialization
//! - method and operator calls (`call`)
//! - `:method`/`:operator` clauses and precondition lists (`clause`)
//! - whole `defdomain`/`defproblem` forms (`program`)
//!
//! Every renderer returns a fresh `String`; nothing is printed and the
//! knowledge base is never mutated, so rendering the same entity twice gives
//! byte-identical text.

pub mod call;
pub mod clause;
pub mod predicate;
pub mod program;

pub use call::CallKind;

use crate::comment::{self, CommentError, ListTag};
use crate::entity::EntityId;
use crate::error::{EmitError, EmitResult};
use crate::graph::KnowledgeBase;
use crate::relation::Relation;

/// Renders SHOP text for entities of one knowledge base.
pub struct Emitter<'kb, K: KnowledgeBase + ?Sized> {
    kb: &'kb K,
    strict_ambiguity: bool,
}

impl<K: KnowledgeBase + ?Sized> Clone for Emitter<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: KnowledgeBase + ?Sized> Copy for Emitter<'_, K> {}

impl<K: KnowledgeBase + ?Sized> std::fmt::Debug for Emitter<'_, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("strict_ambiguity", &self.strict_ambiguity)
            .finish_non_exhaustive()
    }
}

impl<'kb, K: KnowledgeBase + ?Sized> Emitter<'kb, K> {
    pub fn new(kb: &'kb K) -> Self {
        Self {
            kb,
            strict_ambiguity: false,
        }
    }

    /// Fail instead of warning when a single-valued relation has several targets.
    pub fn strict(mut self, strict_ambiguity: bool) -> Self {
        self.strict_ambiguity = strict_ambiguity;
        self
    }

    /// Identifier used in diagnostics.
    pub(crate) fn describe(&self, entity: EntityId) -> String {
        self.kb
            .iri(entity)
            .map(str::to_string)
            .unwrap_or_else(|| entity.to_string())
    }

    /// The entity's label, required for anything that is emitted.
    pub(crate) fn label(&self, entity: EntityId) -> EmitResult<&'kb str> {
        self.kb.label(entity).ok_or_else(|| EmitError::MissingLabel {
            entity: self.describe(entity),
        })
    }

    /// The entity's comment, required when an argument list must be read.
    fn comment(&self, entity: EntityId) -> EmitResult<&'kb str> {
        self.kb
            .comment(entity)
            .ok_or_else(|| self.malformed(entity, CommentError::Missing))
    }

    fn malformed(&self, entity: EntityId, source: CommentError) -> EmitError {
        EmitError::MalformedComment {
            entity: self.describe(entity),
            source,
        }
    }

    /// The target of a single-valued relation.
    ///
    /// Only the first asserted target is honoured. Extra targets are an error
    /// in strict mode and a warning otherwise.
    pub(crate) fn single(&self, entity: EntityId, relation: Relation) -> EmitResult<Option<EntityId>> {
        let targets = self.kb.related(entity, relation);
        if targets.len() > 1 {
            if self.strict_ambiguity {
                return Err(EmitError::AmbiguousRelation {
                    entity: self.describe(entity),
                    relation,
                    count: targets.len(),
                });
            }
            tracing::warn!(
                entity = %self.describe(entity),
                %relation,
                candidates = targets.len(),
                "several targets asserted, using the first"
            );
        }
        Ok(targets.first().copied())
    }

    /// The declared argument mode of a specialization.
    fn argument_mode(&self, entity: EntityId) -> EmitResult<ListTag> {
        let comment = self.comment(entity)?;
        comment::argument_mode(comment).map_err(|e| self.malformed(entity, e))
    }

    /// The `tag` list from the entity's comment, rendered with token prefixes.
    fn comment_list(&self, entity: EntityId, tag: ListTag) -> EmitResult<String> {
        let comment = self.comment(entity)?;
        let tokens = comment::extract_list(comment, tag).map_err(|e| self.malformed(entity, e))?;
        Ok(comment::render_list(&tokens, tag))
    }

    /// Like [`Self::comment_list`], but empty unless `relation` has assertions.
    fn arguments(&self, entity: EntityId, relation: Relation, tag: ListTag) -> EmitResult<String> {
        if self.kb.related(entity, relation).is_empty() {
            return Ok(String::new());
        }
        self.comment_list(entity, tag)
    }
}
