//! Rich diagnostic error types for the onto-shop generator.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so users know exactly what
//! went wrong in their knowledge base and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

use crate::comment::CommentError;
use crate::relation::Relation;

/// Top-level error type for onto-shop.
#[derive(Debug, Error, Diagnostic)]
pub enum ShopError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("failed to read knowledge base: {path}")]
    #[diagnostic(
        code(shop::load::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("RDF parse error: {message}")]
    #[diagnostic(
        code(shop::load::rdf),
        help(
            "The document is not valid in the selected RDF syntax. \
             Pass `--format` explicitly if the file extension is misleading. \
             OWL/XML documents are not RDF and must be converted to RDF/XML or Turtle first."
        )
    )]
    Rdf { message: String },

    #[error("JSON snapshot error: {message}")]
    #[diagnostic(
        code(shop::load::json),
        help(
            "A JSON snapshot is an object with an `entities` array; each entity \
             needs an `id` and may carry `label`, `comment`, `types` and `relations`."
        )
    )]
    Json { message: String },

    #[error("unknown relation \"{name}\" on entity \"{entity}\"")]
    #[diagnostic(
        code(shop::load::unknown_relation),
        help(
            "JSON snapshots may only use the planning vocabulary, e.g. \
             hasMethod, hasFlow, mfHasPrecondition, prSpecializationOf, negativeOf."
        )
    )]
    UnknownRelation { entity: String, name: String },

    #[error("unsupported input format: \"{name}\"")]
    #[diagnostic(
        code(shop::load::unsupported_format),
        help(
            "Supported formats: turtle, ntriples, rdfxml, nquads, trig, json. \
             `.owl` files are not guessed: convert OWL/XML to RDF/XML or Turtle first, \
             or pass `--format rdfxml` if the file already is RDF/XML."
        )
    )]
    UnsupportedFormat { name: String },
}

/// Result type for loader operations.
pub type LoadResult<T> = std::result::Result<T, LoadError>;

// ---------------------------------------------------------------------------
// Emission errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    #[error("entity \"{entity}\" has no label")]
    #[diagnostic(
        code(shop::emit::missing_label),
        help("Every emitted entity needs an rdfs:label; its label becomes the SHOP name.")
    )]
    MissingLabel { entity: String },

    #[error("malformed comment on entity \"{entity}\"")]
    #[diagnostic(
        code(shop::emit::malformed_comment),
        help(
            "Entities with parameters or objects must list them in their rdfs:comment, \
             e.g. \"Parameters: [truck;pkg]\", \"Objects: [t1;p1]\" or \"Mixed: [?x;home]\"."
        )
    )]
    MalformedComment {
        entity: String,
        #[source]
        source: CommentError,
    },

    #[error("entity \"{entity}\" asserts {count} {relation} targets, expected one")]
    #[diagnostic(
        code(shop::emit::ambiguous),
        help(
            "Only the first asserted target is honoured. Remove the extra assertions, \
             or disable `strict_ambiguity` to accept the first one with a warning."
        )
    )]
    AmbiguousRelation {
        entity: String,
        relation: Relation,
        count: usize,
    },

    #[error("entity \"{entity}\" has no {relation} assertion")]
    #[diagnostic(
        code(shop::emit::missing_relation),
        help("A problem definition needs a domain, an initial state and a goal.")
    )]
    MissingRelation { entity: String, relation: Relation },
}

/// Result type for emission.
pub type EmitResult<T> = std::result::Result<T, EmitError>;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(shop::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {message}")]
    #[diagnostic(
        code(shop::config::parse),
        help("Check the TOML syntax. Known keys: domain_type, problem_type, strict_ambiguity, parallel.")
    )]
    Parse { message: String },
}
