//! Immutable in-memory knowledge base backed by petgraph.
//!
//! Every entity is a node; every relation assertion is an edge carrying its
//! [`EdgeData`]. petgraph yields outgoing edges newest-first, so lookups sort
//! by the assertion ordinal to recover source order.

use std::collections::{BTreeMap, HashMap};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::entity::{EntityId, EntityKind, EntityMeta};
use crate::relation::Relation;

use super::{Assertion, EdgeData, KnowledgeBase};

/// Read-only snapshot of a planning knowledge base.
pub struct KnowledgeSnapshot {
    /// The directed graph: nodes are EntityIds, edges carry EdgeData.
    graph: DiGraph<EntityId, EdgeData>,
    /// EntityId → NodeIndex mapping.
    node_index: HashMap<EntityId, NodeIndex>,
    /// Entity metadata, ordered by ID (first-appearance order).
    entities: BTreeMap<EntityId, EntityMeta>,
    /// Source identifier → EntityId.
    iri_index: HashMap<String, EntityId>,
}

impl KnowledgeSnapshot {
    /// Assemble a snapshot. Assertions referencing unknown entities are dropped.
    pub(crate) fn from_parts(entities: Vec<EntityMeta>, assertions: Vec<Assertion>) -> Self {
        let mut graph = DiGraph::with_capacity(entities.len(), assertions.len());
        let mut node_index = HashMap::with_capacity(entities.len());
        let mut iri_index = HashMap::with_capacity(entities.len());
        let mut by_id = BTreeMap::new();

        for meta in entities {
            node_index.insert(meta.id, graph.add_node(meta.id));
            iri_index.insert(meta.iri.clone(), meta.id);
            by_id.insert(meta.id, meta);
        }

        for assertion in &assertions {
            let (Some(&subj), Some(&obj)) = (
                node_index.get(&assertion.subject),
                node_index.get(&assertion.object),
            ) else {
                tracing::trace!(?assertion, "dropping assertion with unknown endpoint");
                continue;
            };
            graph.add_edge(subj, obj, EdgeData::from(assertion));
        }

        Self {
            graph,
            node_index,
            entities: by_id,
            iri_index,
        }
    }

    /// Find an entity by its source identifier.
    pub fn lookup_iri(&self, iri: &str) -> Option<EntityId> {
        self.iri_index.get(iri).copied()
    }

    /// Number of entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of assertions (edges).
    pub fn assertion_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl KnowledgeBase for KnowledgeSnapshot {
    fn entities_of_kind(&self, kind: EntityKind) -> Vec<EntityId> {
        self.entities
            .values()
            .filter(|m| m.kind == kind)
            .map(|m| m.id)
            .collect()
    }

    fn related(&self, entity: EntityId, relation: Relation) -> Vec<EntityId> {
        let Some(&idx) = self.node_index.get(&entity) else {
            return vec![];
        };

        let mut hits: Vec<(u32, EntityId)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .filter(|e| e.weight().relation == relation)
            .filter_map(|e| {
                let target = *self.graph.node_weight(e.target())?;
                Some((e.weight().ordinal, target))
            })
            .collect();
        hits.sort_by_key(|&(ordinal, _)| ordinal);
        hits.into_iter().map(|(_, id)| id).collect()
    }

    fn label(&self, entity: EntityId) -> Option<&str> {
        self.entities.get(&entity)?.label.as_deref()
    }

    fn comment(&self, entity: EntityId) -> Option<&str> {
        self.entities.get(&entity)?.comment.as_deref()
    }

    fn iri(&self, entity: EntityId) -> Option<&str> {
        self.entities.get(&entity).map(|m| m.iri.as_str())
    }
}

impl std::fmt::Debug for KnowledgeSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeSnapshot")
            .field("entities", &self.entity_count())
            .field("assertions", &self.assertion_count())
            .finish()
    }
}
