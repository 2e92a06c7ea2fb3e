use crate::convert::WireNumber;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Item form of a wire record: the string-keyed attribute map that whole
/// entities travel as. `BTreeMap` keeps key order deterministic.
pub type Attributes = BTreeMap<String, AttributeValue>;

///
/// AttributeValue
///
/// Tagged union over the wire format's value kinds. Numbers travel in their
/// canonical textual form; `Ss` is the native string-set encoding used for
/// string collections.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum AttributeValue {
    S(String),
    N(String),
    Bool(bool),
    Ss(Vec<String>),
    L(Vec<AttributeValue>),
    M(Attributes),
    Null,
}

impl AttributeValue {
    // constructors

    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::S(value.into())
    }

    /// Wrap a number as its canonical textual form.
    #[must_use]
    pub fn number<N: WireNumber>(value: N) -> Self {
        Self::N(value.to_string())
    }

    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Bool(value)
    }

    #[must_use]
    pub const fn string_set(values: Vec<String>) -> Self {
        Self::Ss(values)
    }

    #[must_use]
    pub const fn list(values: Vec<Self>) -> Self {
        Self::L(values)
    }

    #[must_use]
    pub const fn map(attributes: Attributes) -> Self {
        Self::M(attributes)
    }

    // accessors
    // every accessor is total: a kind mismatch is None, never a panic

    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::S(value) => Some(value),
            _ => None,
        }
    }

    /// Textual form of a number value; parsing is the caller's concern.
    #[must_use]
    pub fn as_number(&self) -> Option<&str> {
        match self {
            Self::N(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_string_set(&self) -> Option<&[String]> {
        match self {
            Self::Ss(values) => Some(values),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::L(values) => Some(values),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&Attributes> {
        match self {
            Self::M(attributes) => Some(attributes),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_map(self) -> Option<Attributes> {
        match self {
            Self::M(attributes) => Some(attributes),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

///
/// TESTS
///
