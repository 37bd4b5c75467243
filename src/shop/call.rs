//! Method and operator calls.
//!
//! Calls appear in method postconditions and problem goals. A call is either a
//! direct reference, `(<name> ?params)`, or a specialization of a generic
//! method/operator, `(<generic-name> objects)`. Operator calls carry the `!`
//! prefix SHOP uses for primitive tasks.

use crate::comment::ListTag;
use crate::entity::EntityId;
use crate::error::EmitResult;
use crate::graph::KnowledgeBase;
use crate::relation::Relation;

use super::Emitter;

/// Which kind of task a call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Method,
    Operator,
}

impl CallKind {
    fn specialization(self) -> Relation {
        match self {
            CallKind::Method => Relation::MeSpecializationOf,
            CallKind::Operator => Relation::OpSpecializationOf,
        }
    }

    fn parameters(self) -> Relation {
        match self {
            CallKind::Method => Relation::MeHasParameter,
            CallKind::Operator => Relation::OpHasParameter,
        }
    }

    fn objects(self) -> Relation {
        match self {
            CallKind::Method => Relation::MeHasObject,
            CallKind::Operator => Relation::OpHasObject,
        }
    }

    /// Name prefix inside the call's parenthesis.
    pub fn marker(self) -> &'static str {
        match self {
            CallKind::Method => "",
            CallKind::Operator => "!",
        }
    }
}

impl<K: KnowledgeBase + ?Sized> Emitter<'_, K> {
    /// Render a call to a method or operator.
    pub fn render_call(&self, kind: CallKind, task: EntityId) -> EmitResult<String> {
        let marker = kind.marker();
        match self.single(task, kind.specialization())? {
            None => {
                let name = self.label(task)?;
                let params = self.arguments(task, kind.parameters(), ListTag::Parameters)?;
                Ok(format!("({marker}{name}{params})"))
            }
            Some(generic) => {
                let name = self.label(generic)?;
                let objects = self.arguments(task, kind.objects(), ListTag::Objects)?;
                Ok(format!("({marker}{name}{objects})"))
            }
        }
    }

    /// Render every call asserted for `relation` on `entity`, by adjacency.
    pub(crate) fn render_calls(
        &self,
        kind: CallKind,
        entity: EntityId,
        relation: Relation,
    ) -> EmitResult<String> {
        let mut out = String::new();
        for task in self.kb.related(entity, relation) {
            out.push_str(&self.render_call(kind, task)?);
        }
        Ok(out)
    }
}
