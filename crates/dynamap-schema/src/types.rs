use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

/// Trailing segment of a qualified path (`domain::route::Route` → `Route`).
#[must_use]
pub fn simple_name(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

///
/// Primitive
///
/// Machine scalars a field can declare directly. Bare scalars are always
/// present on the native side, so encode has no absence branch for them.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
#[remain::sorted]
pub enum Primitive {
    Bool,
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
}

impl Primitive {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Bool)
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Rust type name the wire parser targets for this scalar.
    #[must_use]
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
        }
    }
}

///
/// DeclaredType
///
/// Syntactic shape of one declared field type as reported by the schema
/// source. Carries no classification; that is the classifier's job.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DeclaredType {
    /// Bare machine scalar.
    Scalar(Primitive),
    /// `Option<T>` — absence is representable natively.
    Optional(Box<DeclaredType>),
    /// Ordered homogeneous collection (`Vec<T>`).
    List(Box<DeclaredType>),
    /// String-keyed associative collection; only the value shape matters.
    Map(Box<DeclaredType>),
    /// Named type by qualified path (strings, instants, enums, entities).
    Named(String),
}

impl DeclaredType {
    #[must_use]
    pub fn named(path: impl Into<String>) -> Self {
        Self::Named(path.into())
    }

    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }

    #[must_use]
    pub fn list(element: Self) -> Self {
        Self::List(Box::new(element))
    }

    #[must_use]
    pub fn map(value: Self) -> Self {
        Self::Map(Box::new(value))
    }

    /// Strip at most one `Optional` layer. The flag reports whether one was
    /// present; a field's primitiveness is its negation.
    #[must_use]
    pub fn unwrap_optional(&self) -> (&Self, bool) {
        match self {
            Self::Optional(inner) => (inner, true),
            other => (other, false),
        }
    }
}

///
/// MappingStrategy
///
/// Closed classification of how a field maps to and from the wire. Every
/// consumer matches exhaustively, so a new strategy is a compile-checked
/// change at each site.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
#[remain::sorted]
pub enum MappingStrategy {
    Boolean,
    ComplexList,
    ComplexObject,
    Enum,
    /// Placeholder: classified, but rejected at emission time.
    Map,
    NestedNumberList,
    Number,
    NumberList,
    String,
    StringList,
    Timestamp,
}

impl MappingStrategy {
    /// Strategies that compose a dependency codec.
    #[must_use]
    pub const fn needs_dependency(self) -> bool {
        matches!(self, Self::ComplexList | Self::ComplexObject)
    }
}

///
/// CodecId
///
/// Identity of a generated codec, by type name (`RouteCodec`). A raw
/// dependency reference resolves back to its owning entity through
/// `entity_hint`.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct CodecId(String);

impl CodecId {
    pub const SUFFIX: &'static str = "Codec";

    /// Raw reference to a codec that may live outside the current batch.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn for_entity(path: &str) -> Self {
        Self(format!("{}{}", simple_name(path), Self::SUFFIX))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Simple entity name this codec belongs to, if the reference follows
    /// the generated naming scheme. Anything else is an external codec and
    /// carries no ordering constraint.
    #[must_use]
    pub fn entity_hint(&self) -> Option<&str> {
        self.0
            .strip_suffix(Self::SUFFIX)
            .filter(|hint| !hint.is_empty())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name_strips_leading_segments() {
        assert_eq!(simple_name("domain::route::Route"), "Route");
        assert_eq!(simple_name("Route"), "Route");
    }

    #[test]
    fn codec_id_round_trips_entity_hint() {
        let id = CodecId::for_entity("domain::route::Route");
        assert_eq!(id.as_str(), "RouteCodec");
        assert_eq!(id.entity_hint(), Some("Route"));
    }

    #[test]
    fn foreign_codec_reference_has_no_hint() {
        assert_eq!(CodecId::new("LegacyMapper").entity_hint(), None);
        assert_eq!(CodecId::new("Codec").entity_hint(), None);
    }

    #[test]
    fn unwrap_optional_strips_one_layer() {
        let ty = DeclaredType::optional(DeclaredType::Scalar(Primitive::F64));
        let (inner, optional) = ty.unwrap_optional();
        assert_eq!(inner, &DeclaredType::Scalar(Primitive::F64));
        assert!(optional);

        let bare = DeclaredType::Scalar(Primitive::Bool);
        assert_eq!(bare.unwrap_optional(), (&bare, false));
    }

    #[test]
    fn strategy_names_parse_back() {
        let strategy: MappingStrategy = "NestedNumberList".parse().unwrap();
        assert_eq!(strategy, MappingStrategy::NestedNumberList);
        assert!("Bogus".parse::<MappingStrategy>().is_err());
    }
}
