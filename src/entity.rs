//! Core entity types for the onto-shop generator.
//!
//! Entities are the nodes of the planning knowledge base: domain and problem
//! definitions, methods, flows, operators, predicates and their parameters.
//! Every entity is identified by an [`EntityId`] and described by
//! [`EntityMeta`].

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

/// Unique, niche-optimized identifier for an entity.
///
/// Uses `NonZeroU64` so that `Option<EntityId>` is the same size as `EntityId`.
/// IDs are allocated in first-appearance order, so sorting by ID reproduces
/// the order in which the source document introduced the entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct EntityId(NonZeroU64);

impl EntityId {
    /// Create an `EntityId` from a raw `u64`.
    ///
    /// Returns `None` if `raw` is zero.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(EntityId)
    }

    /// Get the underlying `u64` value.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ent:{}", self.0)
    }
}

/// Classification of an entity, resolved once when the snapshot is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EntityKind {
    /// Root of a `defdomain` form.
    DomainDefinition,
    /// Root of a `defproblem` form.
    ProblemDefinition,
    /// Anything else: methods, flows, operators, predicates, parameters.
    #[default]
    Other,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::DomainDefinition => write!(f, "DomainDefinition"),
            EntityKind::ProblemDefinition => write!(f, "ProblemDefinition"),
            EntityKind::Other => write!(f, "Other"),
        }
    }
}

/// Metadata describing an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMeta {
    /// Unique identifier.
    pub id: EntityId,
    /// Source identifier (IRI, blank node or JSON id).
    pub iri: String,
    /// Definition kind.
    pub kind: EntityKind,
    /// Display label (`rdfs:label`).
    pub label: Option<String>,
    /// Annotation comment (`rdfs:comment`), carrier of the argument lists.
    pub comment: Option<String>,
}

impl EntityMeta {
    /// Create metadata with no label, comment or kind.
    pub fn new(id: EntityId, iri: impl Into<String>) -> Self {
        Self {
            id,
            iri: iri.into(),
            kind: EntityKind::Other,
            label: None,
            comment: None,
        }
    }
}

/// Sequential entity ID allocator.
///
/// Produces monotonically increasing IDs starting from 1.
#[derive(Debug)]
pub struct EntityAllocator {
    next: u64,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let raw = self.next;
        self.next += 1;
        // `next` starts at 1 and only grows.
        EntityId(NonZeroU64::MIN.saturating_add(raw - 1))
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_niche_optimization() {
        assert_eq!(
            std::mem::size_of::<Option<EntityId>>(),
            std::mem::size_of::<EntityId>()
        );
    }

    #[test]
    fn entity_id_zero_is_none() {
        assert!(EntityId::new(0).is_none());
        assert_eq!(EntityId::new(42).unwrap().get(), 42);
    }

    #[test]
    fn allocator_produces_sequential_ids() {
        let mut alloc = EntityAllocator::new();
        assert_eq!(alloc.next_id().get(), 1);
        assert_eq!(alloc.next_id().get(), 2);
        assert_eq!(alloc.next_id().get(), 3);
    }

    #[test]
    fn new_meta_is_bare() {
        let meta = EntityMeta::new(EntityId::new(1).unwrap(), "urn:x:load");
        assert_eq!(meta.iri, "urn:x:load");
        assert_eq!(meta.kind, EntityKind::Other);
        assert!(meta.label.is_none() && meta.comment.is_none());
    }

    #[test]
    fn display_forms() {
        assert_eq!(EntityId::new(7).unwrap().to_string(), "ent:7");
        assert_eq!(EntityKind::DomainDefinition.to_string(), "DomainDefinition");
    }
}
