use crate::{
    node::{Entity, Field, FieldList},
    source::{EntityDecl, FieldDecl, TypeIndex},
    types::{CodecId, DeclaredType, MappingStrategy, simple_name},
};
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

/// Instant paths the wire format maps to its canonical string form.
const INSTANT_PATHS: [&str; 3] = ["time::OffsetDateTime", "OffsetDateTime", "Timestamp"];

///
/// ClassifyError
///
/// Classification is deliberately total over the supported shapes and loud
/// about everything else: an unknown shape here would otherwise surface as
/// generated code referencing a codec that does not exist.
///

#[derive(Debug, ThisError)]
pub enum ClassifyError {
    #[error("field '{entity}.{field}': no mapping strategy for declared type {ty:?}")]
    UnknownType {
        entity: String,
        field: String,
        ty: DeclaredType,
    },

    #[error("field '{entity}.{field}': unsupported list element shape {element:?}")]
    UnsupportedListElement {
        entity: String,
        field: String,
        element: DeclaredType,
    },
}

///
/// Classifier
///
/// Per-field mapping-strategy inference over the declared type shape. Knows
/// nothing about other entities beyond the two `TypeIndex` questions.
///

pub struct Classifier<'a> {
    index: &'a TypeIndex,
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub const fn new(index: &'a TypeIndex) -> Self {
        Self { index }
    }

    /// Analyze one declared entity into an immutable schema node.
    pub fn classify_entity(&self, decl: &EntityDecl) -> Result<Entity, ClassifyError> {
        let mut fields = Vec::with_capacity(decl.fields.len());
        let mut dependencies = BTreeSet::new();

        for field_decl in &decl.fields {
            let field = self.classify_field(&decl.path, field_decl)?;
            if let Some(dependency) = &field.dependency {
                dependencies.insert(dependency.clone());
            }
            fields.push(field);
        }

        Ok(Entity {
            path: decl.path.clone(),
            table: decl.table.clone(),
            fields: FieldList { fields },
            dependencies,
        })
    }

    /// Classify a single field declaration.
    pub fn classify_field(&self, entity: &str, decl: &FieldDecl) -> Result<Field, ClassifyError> {
        let (inner, optional) = decl.ty.unwrap_optional();

        // collection absence is modeled by emptiness, never by Option
        if optional && matches!(inner, DeclaredType::List(_) | DeclaredType::Map(_)) {
            return Err(ClassifyError::UnknownType {
                entity: entity.to_string(),
                field: decl.ident.clone(),
                ty: decl.ty.clone(),
            });
        }

        let (strategy, dependency) = self.strategy_for(entity, &decl.ident, inner)?;

        Ok(Field {
            ident: decl.ident.clone(),
            ty: decl.ty.clone(),
            strategy,
            primitive: !optional,
            dependency,
        })
    }

    // Decision order matters: scalar forms must win before the
    // nested-object fallback.
    fn strategy_for(
        &self,
        entity: &str,
        field: &str,
        ty: &DeclaredType,
    ) -> Result<(MappingStrategy, Option<CodecId>), ClassifyError> {
        match ty {
            DeclaredType::Named(path) if is_string_like(path) => {
                Ok((MappingStrategy::String, None))
            }
            DeclaredType::Scalar(primitive) if primitive.is_numeric() => {
                Ok((MappingStrategy::Number, None))
            }
            DeclaredType::Scalar(_) => Ok((MappingStrategy::Boolean, None)),
            DeclaredType::Named(path) if is_instant(path) => {
                Ok((MappingStrategy::Timestamp, None))
            }
            DeclaredType::Named(path) if self.index.is_enum(path) => {
                Ok((MappingStrategy::Enum, None))
            }
            DeclaredType::List(element) => self.list_strategy(entity, field, element),
            DeclaredType::Map(_) => Ok((MappingStrategy::Map, None)),
            DeclaredType::Named(path) if self.index.is_entity(path) => Ok((
                MappingStrategy::ComplexObject,
                Some(CodecId::for_entity(path)),
            )),
            other => Err(ClassifyError::UnknownType {
                entity: entity.to_string(),
                field: field.to_string(),
                ty: other.clone(),
            }),
        }
    }

    fn list_strategy(
        &self,
        entity: &str,
        field: &str,
        element: &DeclaredType,
    ) -> Result<(MappingStrategy, Option<CodecId>), ClassifyError> {
        match element {
            DeclaredType::Named(path) if is_string_like(path) => {
                Ok((MappingStrategy::StringList, None))
            }
            DeclaredType::List(inner) if is_numeric_scalar(inner) => {
                Ok((MappingStrategy::NestedNumberList, None))
            }
            element if is_numeric_scalar(element) => Ok((MappingStrategy::NumberList, None)),
            DeclaredType::Named(path) if self.index.is_entity(path) => Ok((
                MappingStrategy::ComplexList,
                Some(CodecId::for_entity(path)),
            )),
            other => Err(ClassifyError::UnsupportedListElement {
                entity: entity.to_string(),
                field: field.to_string(),
                element: other.clone(),
            }),
        }
    }
}

fn is_string_like(path: &str) -> bool {
    matches!(simple_name(path), "String" | "str")
}

fn is_instant(path: &str) -> bool {
    INSTANT_PATHS.contains(&path) || INSTANT_PATHS.contains(&simple_name(path))
}

fn is_numeric_scalar(ty: &DeclaredType) -> bool {
    matches!(ty, DeclaredType::Scalar(primitive) if primitive.is_numeric())
}

///
/// TESTS
///
