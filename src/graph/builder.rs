//! Incremental construction of a [`KnowledgeSnapshot`].
//!
//! Loaders feed statements in document order; the builder allocates entity
//! IDs on first reference and numbers assertions as they arrive, which is
//! the order every relation lookup reports.

use std::collections::HashMap;

use crate::entity::{EntityAllocator, EntityId, EntityKind, EntityMeta};
use crate::relation::Relation;

use super::Assertion;
use super::snapshot::KnowledgeSnapshot;

/// Mutable staging area for a knowledge snapshot.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    allocator: EntityAllocator,
    by_iri: HashMap<String, EntityId>,
    /// Indexed by `id - 1`.
    entities: Vec<EntityMeta>,
    assertions: Vec<Assertion>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the entity with the given source identifier.
    pub fn entity(&mut self, iri: &str) -> EntityId {
        if let Some(&id) = self.by_iri.get(iri) {
            return id;
        }
        let id = self.allocator.next_id();
        self.by_iri.insert(iri.to_string(), id);
        self.entities.push(EntityMeta::new(id, iri));
        id
    }

    /// Get or create an entity and set its label.
    pub fn labeled(&mut self, iri: &str, label: &str) -> EntityId {
        let id = self.entity(iri);
        self.set_label(id, label);
        id
    }

    fn meta_mut(&mut self, id: EntityId) -> Option<&mut EntityMeta> {
        let slot = usize::try_from(id.get() - 1).ok()?;
        self.entities.get_mut(slot)
    }

    /// Set the label. A later call replaces an earlier one.
    pub fn set_label(&mut self, id: EntityId, label: impl Into<String>) {
        if let Some(meta) = self.meta_mut(id) {
            meta.label = Some(label.into());
        }
    }

    /// Set the comment. A later call replaces an earlier one.
    pub fn set_comment(&mut self, id: EntityId, comment: impl Into<String>) {
        if let Some(meta) = self.meta_mut(id) {
            meta.comment = Some(comment.into());
        }
    }

    pub fn set_kind(&mut self, id: EntityId, kind: EntityKind) {
        if let Some(meta) = self.meta_mut(id) {
            meta.kind = kind;
        }
    }

    /// Record `subject relation object` after every assertion seen so far.
    pub fn assert(&mut self, subject: EntityId, relation: Relation, object: EntityId) {
        let ordinal = u32::try_from(self.assertions.len()).unwrap_or(u32::MAX);
        self.assertions.push(Assertion {
            subject,
            relation,
            object,
            ordinal,
        });
    }

    /// Freeze into an immutable snapshot.
    pub fn build(self) -> KnowledgeSnapshot {
        tracing::debug!(
            entities = self.entities.len(),
            assertions = self.assertions.len(),
            "building knowledge snapshot"
        );
        KnowledgeSnapshot::from_parts(self.entities, self.assertions)
    }
}
