//! JSON snapshot documents.
//!
//! ```json
//! {"entities": [
//!   {"id": "urn:load", "label": "load", "comment": "Parameters: [truck]",
//!    "types": [], "relations": [{"relation": "opHasParameter", "target": "urn:truck"}]}
//! ]}
//! ```
//!
//! Declared entities are allocated first, in document order, so ids follow
//! the file. Relation targets that are never declared are created on first
//! reference and stay unlabeled.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::entity::EntityKind;
use crate::error::{LoadError, LoadResult};
use crate::graph::builder::SnapshotBuilder;
use crate::graph::snapshot::KnowledgeSnapshot;
use crate::relation::Relation;

/// Top-level JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotDocument {
    pub entities: Vec<EntityRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<RelationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationRecord {
    /// Ontology name, e.g. `hasOperator`.
    pub relation: String,
    pub target: String,
}

impl SnapshotDocument {
    /// Build a snapshot from this document.
    pub fn into_snapshot(self, config: &GeneratorConfig) -> LoadResult<KnowledgeSnapshot> {
        let mut builder = SnapshotBuilder::new();

        for record in &self.entities {
            let id = builder.entity(&record.id);
            if let Some(label) = &record.label {
                builder.set_label(id, label);
            }
            if let Some(comment) = &record.comment {
                builder.set_comment(id, comment);
            }
            for type_name in &record.types {
                let kind = super::classify(type_name, config);
                if kind != EntityKind::Other {
                    builder.set_kind(id, kind);
                }
            }
        }

        for record in &self.entities {
            let subject = builder.entity(&record.id);
            for rel in &record.relations {
                let relation =
                    Relation::from_name(&rel.relation).ok_or_else(|| LoadError::UnknownRelation {
                        entity: record.id.clone(),
                        name: rel.relation.clone(),
                    })?;
                let target = builder.entity(&rel.target);
                builder.assert(subject, relation, target);
            }
        }

        Ok(builder.build())
    }
}

/// Parse a JSON snapshot document.
pub fn load<R: Read>(reader: R, config: &GeneratorConfig) -> LoadResult<KnowledgeSnapshot> {
    let document: SnapshotDocument =
        serde_json::from_reader(reader).map_err(|e| LoadError::Json {
            message: e.to_string(),
        })?;
    tracing::debug!(entities = document.entities.len(), "parsed JSON snapshot");
    document.into_snapshot(config)
}
