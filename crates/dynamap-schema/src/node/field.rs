use crate::{
    node::NodeError,
    types::{CodecId, DeclaredType, MappingStrategy},
};
use serde::Serialize;
use std::slice::Iter;

///
/// FieldList
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Field> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// Field
///
/// One analyzed field: declaration shape plus the inferred mapping
/// strategy. `dependency` is set exactly for the complex strategies; the
/// invariant is enforced by `validate`.
///

#[derive(Clone, Debug, Serialize)]
pub struct Field {
    pub ident: String,
    pub ty: DeclaredType,
    pub strategy: MappingStrategy,

    /// Declared without an `Optional` wrapper: encode has no absence branch.
    pub primitive: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency: Option<CodecId>,
}

impl Field {
    pub fn validate(&self, entity: &str) -> Result<(), NodeError> {
        match (&self.dependency, self.strategy.needs_dependency()) {
            (None, true) => Err(NodeError::MissingDependency {
                entity: entity.to_string(),
                field: self.ident.clone(),
                strategy: self.strategy,
            }),
            (Some(dependency), false) => Err(NodeError::UnexpectedDependency {
                entity: entity.to_string(),
                field: self.ident.clone(),
                strategy: self.strategy,
                dependency: dependency.clone(),
            }),
            _ => Ok(()),
        }
    }
}

///
/// TESTS
///
