//! Conversion helpers shared by generated codecs.
//!
//! Every helper here is shape-tolerant: a kind mismatch or an unparsable
//! payload yields `None`, so a single bad attribute degrades to one skipped
//! field instead of failing the record.

use crate::value::AttributeValue;
use std::fmt::Display;
use std::str::FromStr;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Instant type generated codecs map to and from.
pub type Timestamp = OffsetDateTime;

///
/// WireNumber
///
/// The closed set of numeric kinds a field can put on the wire. The
/// canonical textual form is `Display` output, and `FromStr` accepts
/// exactly that form back.
///

pub trait WireNumber: Copy + Display + FromStr {}

impl WireNumber for f32 {}
impl WireNumber for f64 {}
impl WireNumber for i8 {}
impl WireNumber for i16 {}
impl WireNumber for i32 {}
impl WireNumber for i64 {}

/// Parse a number attribute back to the declared numeric kind.
#[must_use]
pub fn number<N: WireNumber>(attr: &AttributeValue) -> Option<N> {
    attr.as_number().and_then(|text| text.parse().ok())
}

#[must_use]
pub fn text(attr: &AttributeValue) -> Option<&str> {
    attr.as_string()
}

#[must_use]
pub const fn boolean(attr: &AttributeValue) -> Option<bool> {
    attr.as_bool()
}

/// Format an instant in its canonical RFC 3339 form.
///
/// `None` only for instants the format cannot express (years outside
/// 0..=9999); the caller omits the attribute in that case.
#[must_use]
pub fn format_timestamp(value: Timestamp) -> Option<String> {
    value.format(&Rfc3339).ok()
}

/// Parse an RFC 3339 string attribute; unparsable values are discarded.
#[must_use]
pub fn timestamp(attr: &AttributeValue) -> Option<Timestamp> {
    let text = attr.as_string()?;
    OffsetDateTime::parse(text, &Rfc3339).ok()
}

///
/// TESTS
///
