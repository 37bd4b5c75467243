//! Knowledge base: the immutable entity graph the generator reads from.
//!
//! The graph stores relation assertions (subject, relation, object) between
//! entities.
//!
//! - **Contract** ([`KnowledgeBase`]): the lookups the serializers need
//! - **Snapshot** ([`snapshot::KnowledgeSnapshot`]): petgraph-backed implementation
//! - **Builder** ([`builder::SnapshotBuilder`]): assembles a snapshot in assertion order

pub mod builder;
pub mod snapshot;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, EntityKind};
use crate::relation::Relation;

/// Read access to a planning knowledge base.
///
/// Implementations must be deterministic: repeated calls with the same
/// arguments return the same sequences, in assertion order.
pub trait KnowledgeBase: Sync {
    /// All entities of the given kind, in entity order.
    fn entities_of_kind(&self, kind: EntityKind) -> Vec<EntityId>;

    /// Objects asserted for `relation` on `entity`, in assertion order.
    fn related(&self, entity: EntityId, relation: Relation) -> Vec<EntityId>;

    /// The entity's display label.
    fn label(&self, entity: EntityId) -> Option<&str>;

    /// The entity's annotation comment.
    fn comment(&self, entity: EntityId) -> Option<&str>;

    /// The entity's source identifier, for diagnostics.
    fn iri(&self, entity: EntityId) -> Option<&str>;
}

/// A relation assertion (subject, relation, object) in the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    /// The subject of the assertion.
    pub subject: EntityId,
    /// The relation.
    pub relation: Relation,
    /// The object of the assertion.
    pub object: EntityId,
    /// Position of the assertion in the source.
    pub ordinal: u32,
}

/// Edge data stored on petgraph edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    /// The relation for this edge.
    pub relation: Relation,
    /// Position of the assertion in the source.
    pub ordinal: u32,
}

impl From<&Assertion> for EdgeData {
    fn from(a: &Assertion) -> Self {
        Self {
            relation: a.relation,
            ordinal: a.ordinal,
        }
    }
}
