//! The fixed relation vocabulary of the planning ontology.
//!
//! Relation names are matched against the local name of a predicate IRI
//! (the fragment after `#`, or the last path segment). Anything outside
//! this vocabulary is not part of the planning model and is ignored by the
//! RDF loader.

use serde::{Deserialize, Serialize};

/// A named relation between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = "hasMethod")]
    HasMethod,
    #[serde(rename = "hasOperator")]
    HasOperator,
    #[serde(rename = "hasFlow")]
    HasFlow,
    #[serde(rename = "hasDomain")]
    HasDomain,
    #[serde(rename = "hasInitialState")]
    HasInitialState,
    #[serde(rename = "hasGoal")]
    HasGoal,
    #[serde(rename = "hasPredicate")]
    HasPredicate,
    #[serde(rename = "consistsOfMethod")]
    ConsistsOfMethod,
    #[serde(rename = "mfHasPrecondition")]
    MfHasPrecondition,
    #[serde(rename = "opHasPrecondition")]
    OpHasPrecondition,
    #[serde(rename = "hasPostconditionMe")]
    HasPostconditionMe,
    #[serde(rename = "hasPostconditionOp")]
    HasPostconditionOp,
    #[serde(rename = "deletesPredicate")]
    DeletesPredicate,
    #[serde(rename = "addsPredicate")]
    AddsPredicate,
    #[serde(rename = "meHasParameter")]
    MeHasParameter,
    #[serde(rename = "opHasParameter")]
    OpHasParameter,
    #[serde(rename = "prHasParameter")]
    PrHasParameter,
    #[serde(rename = "meHasObject")]
    MeHasObject,
    #[serde(rename = "opHasObject")]
    OpHasObject,
    #[serde(rename = "prHasObject")]
    PrHasObject,
    #[serde(rename = "meSpecializationOf")]
    MeSpecializationOf,
    #[serde(rename = "opSpecializationOf")]
    OpSpecializationOf,
    #[serde(rename = "prSpecializationOf")]
    PrSpecializationOf,
    #[serde(rename = "negativeOf")]
    NegativeOf,
}

impl Relation {
    /// Every relation in the vocabulary.
    pub const ALL: [Relation; 24] = [
        Relation::HasMethod,
        Relation::HasOperator,
        Relation::HasFlow,
        Relation::HasDomain,
        Relation::HasInitialState,
        Relation::HasGoal,
        Relation::HasPredicate,
        Relation::ConsistsOfMethod,
        Relation::MfHasPrecondition,
        Relation::OpHasPrecondition,
        Relation::HasPostconditionMe,
        Relation::HasPostconditionOp,
        Relation::DeletesPredicate,
        Relation::AddsPredicate,
        Relation::MeHasParameter,
        Relation::OpHasParameter,
        Relation::PrHasParameter,
        Relation::MeHasObject,
        Relation::OpHasObject,
        Relation::PrHasObject,
        Relation::MeSpecializationOf,
        Relation::OpSpecializationOf,
        Relation::PrSpecializationOf,
        Relation::NegativeOf,
    ];

    /// The name used in the ontology.
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::HasMethod => "hasMethod",
            Relation::HasOperator => "hasOperator",
            Relation::HasFlow => "hasFlow",
            Relation::HasDomain => "hasDomain",
            Relation::HasInitialState => "hasInitialState",
            Relation::HasGoal => "hasGoal",
            Relation::HasPredicate => "hasPredicate",
            Relation::ConsistsOfMethod => "consistsOfMethod",
            Relation::MfHasPrecondition => "mfHasPrecondition",
            Relation::OpHasPrecondition => "opHasPrecondition",
            Relation::HasPostconditionMe => "hasPostconditionMe",
            Relation::HasPostconditionOp => "hasPostconditionOp",
            Relation::DeletesPredicate => "deletesPredicate",
            Relation::AddsPredicate => "addsPredicate",
            Relation::MeHasParameter => "meHasParameter",
            Relation::OpHasParameter => "opHasParameter",
            Relation::PrHasParameter => "prHasParameter",
            Relation::MeHasObject => "meHasObject",
            Relation::OpHasObject => "opHasObject",
            Relation::PrHasObject => "prHasObject",
            Relation::MeSpecializationOf => "meSpecializationOf",
            Relation::OpSpecializationOf => "opSpecializationOf",
            Relation::PrSpecializationOf => "prSpecializationOf",
            Relation::NegativeOf => "negativeOf",
        }
    }

    /// Look a relation up by its ontology name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == name)
    }

    /// Look a relation up by the local name of a predicate IRI.
    pub fn from_iri(iri: &str) -> Option<Self> {
        Self::from_name(local_name(iri))
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The local name of an IRI: the fragment after `#`, else the last path segment.
pub fn local_name(iri: &str) -> &str {
    if let Some((_, fragment)) = iri.rsplit_once('#') {
        return fragment;
    }
    match iri.rsplit_once('/') {
        Some((_, segment)) => segment,
        None => iri,
    }
}
