//! RDF loader backed by oxigraph's streaming parsers.
//!
//! Recognized statements:
//!
//! - `rdfs:label` / `rdfs:comment` with a literal object
//! - `rdf:type` whose class local name is a configured definition tag
//! - any predicate whose local name is in the [`Relation`] vocabulary,
//!   with a named or blank object
//!
//! Everything else (class axioms, property declarations, other
//! annotations) is skipped.

use std::io::Read;

use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::Term;
use oxigraph::model::vocab::{rdf, rdfs};

use crate::config::GeneratorConfig;
use crate::entity::EntityKind;
use crate::error::{LoadError, LoadResult};
use crate::graph::builder::SnapshotBuilder;
use crate::graph::snapshot::KnowledgeSnapshot;
use crate::relation::{Relation, local_name};

/// Entity key of a subject rendered in N-Triples syntax: `<iri>` → `iri`,
/// blank nodes keep their `_:` form.
fn subject_key(rendered: &str) -> &str {
    rendered
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(rendered)
}

/// Entity key of a resource object, `None` for literals.
fn object_key(term: &Term) -> Option<String> {
    match term {
        Term::NamedNode(node) => Some(node.as_str().to_string()),
        Term::BlankNode(node) => Some(node.to_string()),
        _ => None,
    }
}

/// Parse an RDF document into a snapshot.
pub fn load<R: Read>(
    reader: R,
    format: RdfFormat,
    config: &GeneratorConfig,
) -> LoadResult<KnowledgeSnapshot> {
    let mut builder = SnapshotBuilder::new();
    let mut skipped = 0usize;

    for quad in RdfParser::from_format(format).for_reader(reader) {
        let quad = quad.map_err(|e| LoadError::Rdf {
            message: e.to_string(),
        })?;
        let rendered_subject = quad.subject.to_string();
        let subject = subject_key(&rendered_subject);
        let predicate = quad.predicate.as_ref();

        if predicate == rdfs::LABEL || predicate == rdfs::COMMENT {
            let Term::Literal(literal) = &quad.object else {
                skipped += 1;
                continue;
            };
            let id = builder.entity(subject);
            if predicate == rdfs::LABEL {
                builder.set_label(id, literal.value());
            } else {
                builder.set_comment(id, literal.value());
            }
        } else if predicate == rdf::TYPE {
            let Term::NamedNode(class) = &quad.object else {
                skipped += 1;
                continue;
            };
            let kind = super::classify(local_name(class.as_str()), config);
            if kind == EntityKind::Other {
                skipped += 1;
                continue;
            }
            let id = builder.entity(subject);
            builder.set_kind(id, kind);
        } else if let Some(relation) = Relation::from_iri(predicate.as_str()) {
            let Some(object) = object_key(&quad.object) else {
                tracing::trace!(%relation, subject, "relation with literal object skipped");
                skipped += 1;
                continue;
            };
            let s = builder.entity(subject);
            let o = builder.entity(&object);
            builder.assert(s, relation, o);
        } else {
            tracing::trace!(predicate = predicate.as_str(), "statement outside the planning vocabulary");
            skipped += 1;
        }
    }

    tracing::debug!(skipped, "RDF statements not used by the planning model");
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::KnowledgeBase;

    const DOC: &str = r#"
@prefix : <http://example.org/plan#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .

:Logistics a owl:NamedIndividual, :DomainDefinition ;
    rdfs:label "Logistics" ;
    :hasOperator :load .

:load rdfs:label "load" ;
    rdfs:comment "Parameters: [truck;pkg]" ;
    :opHasParameter :truck, :pkg ;
    :deletesPredicate :at ;
    :addsPredicate :in .

:at rdfs:label "at" .
:in rdfs:label "in" .
:DomainDefinition a owl:Class .
"#;

    fn load_doc() -> KnowledgeSnapshot {
        load(DOC.as_bytes(), RdfFormat::Turtle, &GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn subject_keys() {
        assert_eq!(subject_key("<http://ex.org/a>"), "http://ex.org/a");
        assert_eq!(subject_key("_:b0"), "_:b0");
    }

    #[test]
    fn labels_comments_and_kinds() {
        let kb = load_doc();
        let domain = kb.lookup_iri("http://example.org/plan#Logistics").unwrap();
        assert_eq!(kb.label(domain), Some("Logistics"));
        assert_eq!(
            kb.entities_of_kind(EntityKind::DomainDefinition),
            vec![domain]
        );

        let load_op = kb.lookup_iri("http://example.org/plan#load").unwrap();
        assert_eq!(kb.comment(load_op), Some("Parameters: [truck;pkg]"));
    }

    #[test]
    fn relations_in_document_order() {
        let kb = load_doc();
        let load_op = kb.lookup_iri("http://example.org/plan#load").unwrap();
        let params = kb.related(load_op, Relation::OpHasParameter);
        let truck = kb.lookup_iri("http://example.org/plan#truck").unwrap();
        let pkg = kb.lookup_iri("http://example.org/plan#pkg").unwrap();
        assert_eq!(params, vec![truck, pkg]);
    }

    #[test]
    fn class_declarations_are_not_entities() {
        let kb = load_doc();
        assert!(kb.lookup_iri("http://example.org/plan#DomainDefinition").is_none());
    }

    #[test]
    fn blank_node_keys_agree_between_subject_and_object() {
        let doc = "<urn:init> <http://ex.org/o#hasPredicate> _:p .\n\
                   _:p <http://www.w3.org/2000/01/rdf-schema#label> \"at\" .\n";
        let kb = load(doc.as_bytes(), RdfFormat::NTriples, &GeneratorConfig::default()).unwrap();
        let init = kb.lookup_iri("urn:init").unwrap();
        let predicates = kb.related(init, Relation::HasPredicate);
        assert_eq!(predicates.len(), 1);
        assert_eq!(kb.label(predicates[0]), Some("at"));
    }

    #[test]
    fn anonymous_turtle_nodes_are_entities() {
        let doc = r#"
@prefix : <http://example.org/plan#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
:init :hasPredicate [ rdfs:label "at" ] .
"#;
        let kb = load(doc.as_bytes(), RdfFormat::Turtle, &GeneratorConfig::default()).unwrap();
        let init = kb.lookup_iri("http://example.org/plan#init").unwrap();
        let predicates = kb.related(init, Relation::HasPredicate);
        assert_eq!(predicates.len(), 1);
        assert_eq!(kb.label(predicates[0]), Some("at"));
    }

    #[test]
    fn named_graphs_keep_document_order() {
        let trig = r#"
@prefix : <http://example.org/plan#> .
:g1 { :op :opHasParameter :a, :b . }
:g2 { :op :opHasParameter :c . }
"#;
        let nquads = "<urn:op> <http://ex.org/o#opHasParameter> <urn:a> <urn:g1> .\n\
                      <urn:op> <http://ex.org/o#opHasParameter> <urn:b> <urn:g2> .\n\
                      <urn:op> <http://ex.org/o#opHasParameter> <urn:c> .\n";

        let kb = load(trig.as_bytes(), RdfFormat::TriG, &GeneratorConfig::default()).unwrap();
        let op = kb.lookup_iri("http://example.org/plan#op").unwrap();
        let names: Vec<_> = kb
            .related(op, Relation::OpHasParameter)
            .into_iter()
            .filter_map(|id| kb.iri(id))
            .map(local_name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        let kb = load(nquads.as_bytes(), RdfFormat::NQuads, &GeneratorConfig::default()).unwrap();
        let op = kb.lookup_iri("urn:op").unwrap();
        let iris: Vec<_> = kb
            .related(op, Relation::OpHasParameter)
            .into_iter()
            .filter_map(|id| kb.iri(id))
            .collect();
        assert_eq!(iris, vec!["urn:a", "urn:b", "urn:c"]);
    }

    #[test]
    fn syntax_errors_are_reported() {
        let err = load(
            "this is not turtle".as_bytes(),
            RdfFormat::Turtle,
            &GeneratorConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Rdf { .. }));
    }
}
