use crate::{
    node::{FieldList, NodeError},
    source::TableDecl,
    types::{CodecId, simple_name},
};
use serde::Serialize;
use std::collections::BTreeSet;

///
/// Entity
///
/// One fully analyzed schema entity. Constructed once during analysis and
/// immutable for the rest of the run; the resolver and the emitters only
/// ever read it.
///

#[derive(Clone, Debug, Serialize)]
pub struct Entity {
    /// Fully-qualified Rust path; schema identity.
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableDecl>,

    pub fields: FieldList,

    /// Codecs this entity's codec is wired with. `BTreeSet` fixes the
    /// constructor parameter order for the whole run.
    pub dependencies: BTreeSet<CodecId>,
}

impl Entity {
    #[must_use]
    pub fn simple_name(&self) -> &str {
        simple_name(&self.path)
    }

    #[must_use]
    pub fn codec_id(&self) -> CodecId {
        CodecId::for_entity(&self.path)
    }

    /// Carries the storage-collection annotation (a smaller opt-in than
    /// being mappable at all).
    #[must_use]
    pub const fn has_table(&self) -> bool {
        self.table.is_some()
    }

    /// Resolved storage-collection name: the annotation value, or the
    /// lower-cased simple type name when unspecified.
    #[must_use]
    pub fn table_name(&self) -> String {
        self.table
            .as_ref()
            .and_then(|table| table.name.clone())
            .unwrap_or_else(|| self.simple_name().to_lowercase())
    }

    /// Check per-field invariants and dependency-set consistency.
    pub fn validate(&self) -> Result<(), NodeError> {
        let mut referenced = BTreeSet::new();
        for field in &self.fields {
            field.validate(&self.path)?;
            if let Some(dependency) = &field.dependency {
                referenced.insert(dependency.clone());
            }
        }

        if let Some(dependency) = self.dependencies.difference(&referenced).next() {
            return Err(NodeError::DanglingDependency {
                entity: self.path.clone(),
                dependency: dependency.clone(),
            });
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(table: Option<TableDecl>) -> Entity {
        Entity {
            path: "domain::route::Route".to_string(),
            table,
            fields: FieldList::default(),
            dependencies: BTreeSet::new(),
        }
    }

    #[test]
    fn table_name_defaults_to_lowercased_simple_name() {
        assert_eq!(entity(Some(TableDecl::default())).table_name(), "route");
        assert_eq!(
            entity(Some(TableDecl::named("routes"))).table_name(),
            "routes"
        );
    }

    #[test]
    fn dangling_dependency_is_rejected() {
        let mut node = entity(None);
        node.dependencies
            .insert(CodecId::for_entity("domain::Waypoint"));

        assert!(matches!(
            node.validate(),
            Err(NodeError::DanglingDependency { .. })
        ));
    }
}
