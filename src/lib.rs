// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # onto-shop
//!
//! Generates SHOP hierarchical-task-network planning programs from a
//! planning ontology: every domain definition becomes a `defdomain` form,
//! every problem definition a `defproblem` form.
//!
//! ## Architecture
//!
//! - **Knowledge graph** (`graph`): immutable petgraph snapshot with assertion order
//! - **Loaders** (`loader`): RDF via oxigraph, plus a JSON snapshot document
//! - **Annotations** (`comment`): argument lists embedded in entity comments
//! - **Serializers** (`shop`): predicates, calls, clauses and programs
//! - **Generator** (`generator`): renders every unit, optionally on rayon
//!
//! ## Library usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use onto_shop::config::GeneratorConfig;
//! use onto_shop::generator::Generator;
//! use onto_shop::loader;
//!
//! let config = GeneratorConfig::default();
//! let kb = loader::load_path(Path::new("logistics.ttl"), None, &config).unwrap();
//! let program = Generator::new(&kb, config).generate();
//! print!("{}", program.text());
//! ```

pub mod comment;
pub mod config;
pub mod entity;
pub mod error;
pub mod export;
pub mod generator;
pub mod graph;
pub mod loader;
pub mod relation;
pub mod shop;
