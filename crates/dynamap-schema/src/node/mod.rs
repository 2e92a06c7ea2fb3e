mod entity;
mod field;

pub use self::entity::*;
pub use self::field::*;

use thiserror::Error as ThisError;

///
/// NodeError
///
/// Structural invariant violations on analyzed nodes. These indicate a bug
/// in classification, not bad input, so they fail the entity loudly.
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("field '{entity}.{field}' uses strategy {strategy} but carries no dependency codec")]
    MissingDependency {
        entity: String,
        field: String,
        strategy: crate::types::MappingStrategy,
    },

    #[error("field '{entity}.{field}' uses strategy {strategy} but carries dependency '{dependency}'")]
    UnexpectedDependency {
        entity: String,
        field: String,
        strategy: crate::types::MappingStrategy,
        dependency: crate::types::CodecId,
    },

    #[error("entity '{entity}' lists dependency '{dependency}' no field references")]
    DanglingDependency {
        entity: String,
        dependency: crate::types::CodecId,
    },
}
