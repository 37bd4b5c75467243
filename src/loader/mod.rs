//! Knowledge-base loaders.
//!
//! A source document is read once into an immutable
//! [`KnowledgeSnapshot`](crate::graph::snapshot::KnowledgeSnapshot).
//! Statements are consumed in document order, which becomes the assertion
//! order every relation lookup reports.
//!
//! - **RDF** (`rdf`): Turtle, N-Triples, RDF/XML, N-Quads, TriG via oxigraph
//! - **JSON** (`json`): the crate's own snapshot document

pub mod json;
pub mod rdf;

use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use oxigraph::io::RdfFormat;

use crate::config::GeneratorConfig;
use crate::entity::EntityKind;
use crate::error::{LoadError, LoadResult};
use crate::graph::snapshot::KnowledgeSnapshot;

/// Serialization of a knowledge-base document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Turtle,
    NTriples,
    RdfXml,
    NQuads,
    TriG,
    Json,
}

impl InputFormat {
    /// Guess the format from a file extension.
    ///
    /// `.owl` is not guessed: it is as often OWL/XML as RDF/XML.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "ttl" => Some(Self::Turtle),
            "nt" => Some(Self::NTriples),
            "rdf" | "xml" => Some(Self::RdfXml),
            "nq" => Some(Self::NQuads),
            "trig" => Some(Self::TriG),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Guess the format from a path's extension.
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(extension).ok_or_else(|| LoadError::UnsupportedFormat {
            name: path.display().to_string(),
        })
    }

    fn rdf_format(self) -> Option<RdfFormat> {
        match self {
            Self::Turtle => Some(RdfFormat::Turtle),
            Self::NTriples => Some(RdfFormat::NTriples),
            Self::RdfXml => Some(RdfFormat::RdfXml),
            Self::NQuads => Some(RdfFormat::NQuads),
            Self::TriG => Some(RdfFormat::TriG),
            Self::Json => None,
        }
    }
}

impl FromStr for InputFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(Self::Turtle),
            "ntriples" | "nt" => Ok(Self::NTriples),
            "rdfxml" | "rdf" | "xml" => Ok(Self::RdfXml),
            "nquads" | "nq" => Ok(Self::NQuads),
            "trig" => Ok(Self::TriG),
            "json" => Ok(Self::Json),
            _ => Err(LoadError::UnsupportedFormat { name: s.to_string() }),
        }
    }
}

/// Map an `rdf:type`/`types` tag to an entity kind.
pub(crate) fn classify(type_name: &str, config: &GeneratorConfig) -> EntityKind {
    if type_name == config.domain_type {
        EntityKind::DomainDefinition
    } else if type_name == config.problem_type {
        EntityKind::ProblemDefinition
    } else {
        EntityKind::Other
    }
}

/// Load a document from any reader.
pub fn load_reader<R: Read>(
    reader: R,
    format: InputFormat,
    config: &GeneratorConfig,
) -> LoadResult<KnowledgeSnapshot> {
    match format.rdf_format() {
        Some(rdf_format) => rdf::load(reader, rdf_format, config),
        None => json::load(reader, config),
    }
}

/// Load a document from disk, inferring the format from the extension
/// unless one is given.
pub fn load_path(
    path: &Path,
    format: Option<InputFormat>,
    config: &GeneratorConfig,
) -> LoadResult<KnowledgeSnapshot> {
    let format = match format {
        Some(f) => f,
        None => InputFormat::from_path(path)?,
    };
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let snapshot = load_reader(BufReader::new(file), format, config)?;
    tracing::info!(
        path = %path.display(),
        ?format,
        entities = snapshot.entity_count(),
        assertions = snapshot.assertion_count(),
        "loaded knowledge base"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_from_extension() {
        assert_eq!(InputFormat::from_extension("ttl"), Some(InputFormat::Turtle));
        assert_eq!(InputFormat::from_extension("RDF"), Some(InputFormat::RdfXml));
        assert_eq!(InputFormat::from_extension("owl"), None);
        assert_eq!(InputFormat::from_extension("json"), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_extension("csv"), None);
    }

    #[test]
    fn formats_from_name() {
        assert_eq!("turtle".parse::<InputFormat>().unwrap(), InputFormat::Turtle);
        assert_eq!("N-Triples".parse::<InputFormat>().ok(), None);
        assert!("owl".parse::<InputFormat>().is_err());
        assert_eq!("ntriples".parse::<InputFormat>().unwrap(), InputFormat::NTriples);
    }

    #[test]
    fn path_without_extension_is_rejected() {
        let err = InputFormat::from_path(Path::new("/tmp/knowledge")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn classify_uses_configured_tags() {
        let config = GeneratorConfig {
            problem_type: "PlanningProblem".into(),
            ..Default::default()
        };
        assert_eq!(classify("DomainDefinition", &config), EntityKind::DomainDefinition);
        assert_eq!(classify("PlanningProblem", &config), EntityKind::ProblemDefinition);
        assert_eq!(classify("ProblemDefinition", &config), EntityKind::Other);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_path(
            Path::new("/definitely/not/here.ttl"),
            None,
            &GeneratorConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
