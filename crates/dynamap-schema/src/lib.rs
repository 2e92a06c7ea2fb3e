//! Schema model and analysis for attribute-value codec generation.
//!
//! The pipeline front end: declaration input (`source`), per-field mapping
//! classification (`classify`), analyzed schema nodes (`node`), and the
//! dependency graph with its topological resolver (`graph`).

pub mod classify;
pub mod graph;
pub mod node;
pub mod source;
pub mod types;

use crate::{classify::ClassifyError, graph::GraphError, node::NodeError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        classify::{Classifier, ClassifyError},
        graph::{DependencyGraph, GraphError},
        node::{Entity, Field, FieldList, NodeError},
        source::{EntityDecl, FieldDecl, SchemaSource, StaticSource, TableDecl, TypeIndex},
        types::{CodecId, DeclaredType, MappingStrategy, Primitive, simple_name},
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Node(#[from] NodeError),
}
