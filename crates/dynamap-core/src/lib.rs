//! Runtime support for generated attribute-value codecs.
//!
//! Generated code depends on this crate alone: the wire value model
//! (`value`), the shape-tolerant conversion helpers (`convert`), and the
//! error type surfaced by the generated table registry (`error`).

pub mod convert;
pub mod error;
pub mod value;

///
/// Prelude
///

pub mod prelude {
    pub use crate::convert::{self, Timestamp, WireNumber};
    pub use crate::error::UnknownEntityError;
    pub use crate::value::{AttributeValue, Attributes};
}
