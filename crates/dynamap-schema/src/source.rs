use crate::types::{DeclaredType, simple_name};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// TableDecl
///
/// Storage-collection annotation. Presence alone opts the entity into the
/// table registry; `name: None` falls back to the lower-cased simple type
/// name.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TableDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TableDecl {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

///
/// FieldDecl
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FieldDecl {
    pub ident: String,
    pub ty: DeclaredType,
}

impl FieldDecl {
    #[must_use]
    pub fn new(ident: impl Into<String>, ty: DeclaredType) -> Self {
        Self {
            ident: ident.into(),
            ty,
        }
    }
}

///
/// EntityDecl
///
/// One discovered schema entity as the host's type introspection reports
/// it: identity path, declaration-ordered fields, optional table metadata.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EntityDecl {
    /// Fully-qualified Rust path; doubles as schema identity.
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableDecl>,

    pub fields: Vec<FieldDecl>,
}

impl EntityDecl {
    #[must_use]
    pub fn new(path: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        Self {
            path: path.into(),
            table: None,
            fields,
        }
    }

    #[must_use]
    pub fn with_table(mut self, table: TableDecl) -> Self {
        self.table = Some(table);
        self
    }

    #[must_use]
    pub fn simple_name(&self) -> &str {
        simple_name(&self.path)
    }
}

///
/// SchemaSource
///
/// The host-side type-introspection seam. Yields discovered entities in
/// declaration order and the set of enumerated-values types in scope; the
/// pipeline never looks at declarations any other way.
///

pub trait SchemaSource {
    fn entities(&self) -> Vec<EntityDecl>;

    /// Qualified paths of enumerated-values types.
    fn enums(&self) -> BTreeSet<String>;
}

///
/// StaticSource
///
/// In-memory source for build scripts and tests. Declarations are plain
/// serde data, so a JSON document deserialized into `Vec<EntityDecl>` works
/// here unchanged.
///

#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    pub entities: Vec<EntityDecl>,
    pub enums: BTreeSet<String>,
}

impl StaticSource {
    #[must_use]
    pub fn new(entities: Vec<EntityDecl>) -> Self {
        Self {
            entities,
            enums: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_enums<I, S>(mut self, enums: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enums = enums.into_iter().map(Into::into).collect();
        self
    }
}

impl SchemaSource for StaticSource {
    fn entities(&self) -> Vec<EntityDecl> {
        self.entities.clone()
    }

    fn enums(&self) -> BTreeSet<String> {
        self.enums.clone()
    }
}

///
/// TypeIndex
///
/// The two kind questions classification needs, answered over one
/// discovery batch: is this path a schema entity, is it an enum.
///

#[derive(Clone, Debug, Default)]
pub struct TypeIndex {
    entities: BTreeSet<String>,
    enums: BTreeSet<String>,
}

impl TypeIndex {
    #[must_use]
    pub fn build(source: &dyn SchemaSource) -> Self {
        Self {
            entities: source
                .entities()
                .iter()
                .map(|entity| entity.path.clone())
                .collect(),
            enums: source.enums(),
        }
    }

    #[must_use]
    pub fn is_entity(&self, path: &str) -> bool {
        self.entities.contains(path)
    }

    #[must_use]
    pub fn is_enum(&self, path: &str) -> bool {
        self.enums.contains(path)
    }
}

///
/// TESTS
///
