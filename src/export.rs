//! Export types for summarizing a knowledge base.
//!
//! These types provide human-readable, label-resolved views of the domain
//! and problem definitions a generation run would render, suitable for JSON
//! export or a plain-text listing.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, EntityKind};
use crate::graph::KnowledgeBase;
use crate::relation::Relation;

/// Exported domain definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainExport {
    /// Numeric entity ID.
    pub id: u64,
    /// Source identifier.
    pub iri: String,
    /// Label, if the entity has one.
    pub label: Option<String>,
    /// Number of `hasMethod` targets.
    pub methods: usize,
    /// Number of `hasOperator` targets.
    pub operators: usize,
}

/// Exported problem definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemExport {
    /// Numeric entity ID.
    pub id: u64,
    /// Source identifier.
    pub iri: String,
    /// Label, if the entity has one.
    pub label: Option<String>,
    /// Label of the first `hasDomain` target.
    pub domain: Option<String>,
    /// Number of `hasInitialState` targets.
    pub initial_states: usize,
    /// Number of `hasGoal` targets.
    pub goals: usize,
}

/// Every definition in a knowledge base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeExport {
    pub domains: Vec<DomainExport>,
    pub problems: Vec<ProblemExport>,
}

impl KnowledgeExport {
    /// Summarize the domain and problem definitions of `kb`.
    pub fn from_kb<K: KnowledgeBase + ?Sized>(kb: &K) -> Self {
        let domains = kb
            .entities_of_kind(EntityKind::DomainDefinition)
            .into_iter()
            .map(|id| DomainExport {
                id: id.get(),
                iri: iri_of(kb, id),
                label: kb.label(id).map(str::to_string),
                methods: kb.related(id, Relation::HasMethod).len(),
                operators: kb.related(id, Relation::HasOperator).len(),
            })
            .collect();

        let problems = kb
            .entities_of_kind(EntityKind::ProblemDefinition)
            .into_iter()
            .map(|id| ProblemExport {
                id: id.get(),
                iri: iri_of(kb, id),
                label: kb.label(id).map(str::to_string),
                domain: kb
                    .related(id, Relation::HasDomain)
                    .first()
                    .and_then(|&d| kb.label(d))
                    .map(str::to_string),
                initial_states: kb.related(id, Relation::HasInitialState).len(),
                goals: kb.related(id, Relation::HasGoal).len(),
            })
            .collect();

        Self { domains, problems }
    }

    /// One line per definition.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for d in &self.domains {
            out.push_str(&format!(
                "domain  {} ({}): {} methods, {} operators\n",
                d.label.as_deref().unwrap_or("<unlabeled>"),
                d.iri,
                d.methods,
                d.operators,
            ));
        }
        for p in &self.problems {
            out.push_str(&format!(
                "problem {} ({}): domain {}, {} initial states, {} goals\n",
                p.label.as_deref().unwrap_or("<unlabeled>"),
                p.iri,
                p.domain.as_deref().unwrap_or("<none>"),
                p.initial_states,
                p.goals,
            ));
        }
        out
    }
}

fn iri_of<K: KnowledgeBase + ?Sized>(kb: &K, id: EntityId) -> String {
    kb.iri(id).map_or_else(|| id.to_string(), str::to_string)
}
