//! `:method` and `:operator` clauses.

use crate::comment::ListTag;
use crate::entity::EntityId;
use crate::error::EmitResult;
use crate::graph::KnowledgeBase;
use crate::relation::Relation;

use super::{CallKind, Emitter};

/// Label prefix of preconditions that bind the objects later preconditions
/// range over, e.g. `predicate-concept ?concept`.
const TYPE_FILTER_PREFIX: &str = "predicate";

/// Whether a precondition label marks a type filter (`predicate-*`).
pub fn is_type_filter(label: &str) -> bool {
    label.split('-').next() == Some(TYPE_FILTER_PREFIX)
}

impl<K: KnowledgeBase + ?Sized> Emitter<'_, K> {
    /// Render the precondition list asserted for `relation` on `entity`.
    ///
    /// Type filters come first, then every other precondition; both groups
    /// keep their assertion order.
    pub fn render_preconditions(&self, entity: EntityId, relation: Relation) -> EmitResult<String> {
        let mut filters = String::new();
        let mut rest = String::new();
        for precondition in self.kb.related(entity, relation) {
            let group = if is_type_filter(self.label(precondition)?) {
                &mut filters
            } else {
                &mut rest
            };
            group.push_str(&self.render_predicate(precondition)?);
        }
        Ok(format!("({filters}{rest})"))
    }

    /// Render one `:method` clause per flow of `method`.
    ///
    /// Method calls precede operator calls in the postcondition group.
    /// Swapping them makes recursive methods re-fire on an unchanged state.
    pub fn render_method(&self, method: EntityId) -> EmitResult<Vec<String>> {
        let name = self.label(method)?;
        let params = self.arguments(method, Relation::MeHasParameter, ListTag::Parameters)?;

        let flows = self.kb.related(method, Relation::HasFlow);
        if flows.is_empty() {
            tracing::warn!(method = %self.describe(method), "method has no flows, nothing emitted");
        }

        let mut clauses = Vec::with_capacity(flows.len());
        for flow in flows {
            let preconditions = self.render_preconditions(flow, Relation::MfHasPrecondition)?;
            let methods = self.render_calls(CallKind::Method, flow, Relation::HasPostconditionMe)?;
            let operators =
                self.render_calls(CallKind::Operator, flow, Relation::HasPostconditionOp)?;
            clauses.push(format!(
                "(:method ({name}{params})\n{preconditions}\n({methods}{operators}))"
            ));
        }
        Ok(clauses)
    }

    /// Render the `:operator` clause of `operator`.
    pub fn render_operator(&self, operator: EntityId) -> EmitResult<String> {
        let name = self.label(operator)?;
        let params = self.arguments(operator, Relation::OpHasParameter, ListTag::Parameters)?;
        let preconditions = self.render_preconditions(operator, Relation::OpHasPrecondition)?;
        let deletes =
            self.render_predicates(&self.kb.related(operator, Relation::DeletesPredicate))?;
        let adds = self.render_predicates(&self.kb.related(operator, Relation::AddsPredicate))?;
        Ok(format!(
            "(:operator (!{name}{params})\n{preconditions}\n({deletes})\n({adds}))"
        ))
    }
}
