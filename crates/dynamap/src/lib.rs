//! ## Crate layout
//! - `build`: the generation pipeline, emitters, and the `build!` macro.
//! - `convert` / `value` / `error`: the runtime surface generated code
//!   leans on (re-exported from `dynamap-core` so generated artifacts can
//!   reference `::dynamap::...` paths alone).
//! - `schema`: declaration model, classifier, and dependency resolver.
//!
//! The `prelude` module mirrors the surface consumer code uses around
//! generated codecs.

pub use dynamap_build as build;
pub use dynamap_schema as schema;

// runtime surface at the crate root; generated code references these paths
pub use dynamap_core::{convert, error, value};

pub use dynamap_build::build;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::convert::{self, Timestamp, WireNumber};
    pub use crate::error::UnknownEntityError;
    pub use crate::schema::source::{
        EntityDecl, FieldDecl, SchemaSource, StaticSource, TableDecl,
    };
    pub use crate::schema::types::{DeclaredType, MappingStrategy, Primitive};
    pub use crate::value::{AttributeValue, Attributes};
}
