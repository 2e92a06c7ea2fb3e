//! Code emission for attribute-value codecs.
//!
//! Drives discovery → classification → dependency ordering → emission and
//! hands each artifact to a [`writer::CodeWriter`]. The single-string
//! [`generate`] form backs the `build!` macro for build-script use.

pub mod codec;
pub mod constants;
pub mod registry;
pub mod writer;

mod macros;

use crate::{
    codec::EmitError,
    writer::{CodeWriter, MemoryWriter, WriteError},
};
use convert_case::{Case, Casing};
use dynamap_schema::{
    classify::{Classifier, ClassifyError},
    graph::{DependencyGraph, GraphError},
    node::{Entity, NodeError},
    source::{SchemaSource, TypeIndex},
};
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Node(#[from] NodeError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

///
/// Report
///
/// Outcome of one generation run. Per-entity failures are isolated here so
/// siblings keep generating; only a dependency cycle aborts the run, since
/// no valid order exists at all.
///

#[derive(Debug, Default)]
pub struct Report {
    /// Entity identities that produced artifacts, in emission order.
    pub generated: Vec<String>,

    /// Per-entity failures. The run went on without these entities.
    pub failures: Vec<EntityFailure>,

    pub notes: Vec<String>,
}

impl Report {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

///
/// EntityFailure
///

#[derive(Debug)]
pub struct EntityFailure {
    pub entity: String,
    pub error: Error,
}

///
/// Pipeline
///
/// Single-pass batch driver. Nothing here survives the run: the graph and
/// the analyzed nodes are rebuilt fresh on every invocation.
///

pub struct Pipeline;

impl Pipeline {
    pub fn run(source: &dyn SchemaSource, writer: &mut dyn CodeWriter) -> Result<Report, Error> {
        let mut report = Report::default();

        // discovery + classification; a failing entity is excluded and
        // reported, not fatal
        let index = TypeIndex::build(source);
        let classifier = Classifier::new(&index);

        let mut entities = Vec::new();
        for decl in source.entities() {
            match classifier
                .classify_entity(&decl)
                .map_err(Error::from)
                .and_then(|entity| {
                    entity.validate()?;
                    Ok(entity)
                }) {
                Ok(entity) => entities.push(entity),
                Err(error) => report.failures.push(EntityFailure {
                    entity: decl.path.clone(),
                    error,
                }),
            }
        }

        // ordering; a cycle means no valid emission order exists
        let order = DependencyGraph::build(&entities).resolve()?;

        // codec + constants per entity, dependencies first
        for position in order {
            let entity = &entities[position];
            match emit_entity(entity, writer) {
                Ok(()) => report.generated.push(entity.path.clone()),
                Err(error) => report.failures.push(EntityFailure {
                    entity: entity.path.clone(),
                    error,
                }),
            }
        }

        // table registry, once across the whole schema
        let tables: Vec<&Entity> = entities.iter().filter(|entity| entity.has_table()).collect();
        if tables.is_empty() {
            report
                .notes
                .push("no table-annotated entities; skipping table registry".to_string());
        } else if let Err(error) = writer.write("table_registry", &registry::generate(&tables)) {
            report.failures.push(EntityFailure {
                entity: "table_registry".to_string(),
                error: error.into(),
            });
        }

        Ok(report)
    }
}

fn emit_entity(entity: &Entity, writer: &mut dyn CodeWriter) -> Result<(), Error> {
    let stem = entity.simple_name().to_case(Case::Snake);

    writer.write(&format!("{stem}_codec"), &codec::generate(entity)?)?;
    writer.write(&format!("{stem}_fields"), &constants::generate(entity))?;

    Ok(())
}

/// Generate every artifact as one compilable module body, for inclusion
/// from a build-script output file (see `build!`).
///
/// Unlike [`Pipeline::run`], any failure is an error here: an incomplete
/// module would not compile anyway.
pub fn generate(source: &dyn SchemaSource) -> Result<String, Error> {
    let mut writer = MemoryWriter::default();
    let report = Pipeline::run(source, &mut writer)?;

    if let Some(failure) = report.failures.into_iter().next() {
        return Err(failure.error);
    }

    Ok(format!(
        "// @generated by dynamap {}. DO NOT EDIT\n{}\n",
        env!("CARGO_PKG_VERSION"),
        writer.concat()
    ))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use dynamap_schema::{
        source::{EntityDecl, FieldDecl, StaticSource, TableDecl},
        types::{DeclaredType, Primitive},
    };

    fn route_schema() -> StaticSource {
        StaticSource::new(vec![
            EntityDecl::new(
                "crate::domain::Route",
                vec![
                    FieldDecl::new(
                        "title",
                        DeclaredType::optional(DeclaredType::named("String")),
                    ),
                    FieldDecl::new(
                        "geometry",
                        DeclaredType::optional(DeclaredType::named("crate::domain::RouteGeometry")),
                    ),
                ],
            )
            .with_table(TableDecl::named("routes")),
            EntityDecl::new(
                "crate::domain::RouteGeometry",
                vec![FieldDecl::new(
                    "coordinates",
                    DeclaredType::list(DeclaredType::list(DeclaredType::Scalar(Primitive::F64))),
                )],
            ),
        ])
    }

    #[test]
    fn run_emits_dependencies_before_dependents() {
        let mut writer = MemoryWriter::default();
        let report = Pipeline::run(&route_schema(), &mut writer).unwrap();

        assert!(report.is_clean());
        assert_eq!(
            report.generated,
            vec![
                "crate::domain::RouteGeometry".to_string(),
                "crate::domain::Route".to_string(),
            ]
        );

        let names: Vec<&str> = writer
            .artifacts
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "route_geometry_codec",
                "route_geometry_fields",
                "route_codec",
                "route_fields",
                "table_registry",
            ]
        );
    }

    #[test]
    fn one_bad_entity_does_not_stop_the_others() {
        let mut source = route_schema();
        source.entities.push(EntityDecl::new(
            "crate::domain::Broken",
            vec![FieldDecl::new(
                "settings",
                DeclaredType::map(DeclaredType::named("String")),
            )],
        ));

        let mut writer = MemoryWriter::default();
        let report = Pipeline::run(&source, &mut writer).unwrap();

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].entity, "crate::domain::Broken");
        assert_eq!(report.generated.len(), 2);
    }

    #[test]
    fn classification_failure_excludes_only_that_entity() {
        let mut source = route_schema();
        source.entities.push(EntityDecl::new(
            "crate::domain::Odd",
            vec![FieldDecl::new("blob", DeclaredType::named("bytes::Bytes"))],
        ));

        let mut writer = MemoryWriter::default();
        let report = Pipeline::run(&source, &mut writer).unwrap();

        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0].error, Error::Classify(_)));
        assert_eq!(report.generated.len(), 2);
    }

    #[test]
    fn cycle_is_fatal_for_the_whole_run() {
        let source = StaticSource::new(vec![
            EntityDecl::new(
                "crate::domain::A",
                vec![FieldDecl::new(
                    "b",
                    DeclaredType::optional(DeclaredType::named("crate::domain::B")),
                )],
            ),
            EntityDecl::new(
                "crate::domain::B",
                vec![FieldDecl::new(
                    "a",
                    DeclaredType::optional(DeclaredType::named("crate::domain::A")),
                )],
            ),
        ]);

        let mut writer = MemoryWriter::default();
        let result = Pipeline::run(&source, &mut writer);
        assert!(matches!(result, Err(Error::Graph(_))));
    }

    #[test]
    fn generate_produces_one_parseable_module_body() {
        let output = generate(&route_schema()).unwrap();

        assert!(output.starts_with("// @generated by dynamap"));
        assert!(output.contains("pub struct RouteCodec"));
        assert!(output.contains("pub struct RouteGeometryCodec"));
        assert!(output.contains("pub mod route_fields"));
        assert!(output.contains("resolve_table_name"));
        syn::parse_file(&output).expect("generated output must be valid Rust");
    }
}
