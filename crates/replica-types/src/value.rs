//! Immutable runtime values
//!
//! [`Value`] covers the immutable kinds a replicator can copy: scalars, text
//! and enumeration constants. [`ValueType`] is the declared type a value is
//! replicated into.

use crate::id::EnumTypeId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// A single enumeration constant
///
/// The ordinal is the 0-based declaration index of the constant within its
/// enumeration type and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValue {
    type_id: EnumTypeId,
    ordinal: usize,
    name: Arc<str>,
}

impl EnumValue {
    /// Create enumeration constant
    #[inline]
    #[must_use]
    pub fn new(type_id: EnumTypeId, ordinal: usize, name: impl Into<Arc<str>>) -> Self {
        Self {
            type_id,
            ordinal,
            name: name.into(),
        }
    }

    /// Enumeration type this constant belongs to
    #[inline]
    #[must_use]
    pub fn type_id(&self) -> &EnumTypeId {
        &self.type_id
    }

    /// Declaration index within the enumeration
    #[inline]
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Declared constant name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether the constant belongs to `type_id`
    #[inline]
    #[must_use]
    pub fn is_of(&self, type_id: &EnumTypeId) -> bool {
        &self.type_id == type_id
    }
}

impl Display for EnumValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_id, self.name)
    }
}

/// Immutable value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,

    /// Boolean
    Bool(bool),

    /// Signed 64-bit integer
    Int(i64),

    /// 64-bit float
    Float(f64),

    /// Shared immutable text
    Text(Arc<str>),

    /// Enumeration constant
    Enum(EnumValue),
}

impl Value {
    /// Create text value
    #[inline]
    #[must_use]
    pub fn text(s: impl Into<Arc<str>>) -> Self {
        Self::Text(s.into())
    }

    /// Runtime type of the value, `None` for [`Value::Null`]
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(ValueType::Bool),
            Self::Int(_) => Some(ValueType::Int),
            Self::Float(_) => Some(ValueType::Float),
            Self::Text(_) => Some(ValueType::Text),
            Self::Enum(e) => Some(ValueType::Enum(e.type_id().clone())),
        }
    }

    /// Short kind name for diagnostics
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Text(_) => "Text",
            Self::Enum(_) => "Enum",
        }
    }

    /// Check for [`Value::Null`]
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow enumeration constant if this is one
    #[inline]
    #[must_use]
    pub fn as_enum(&self) -> Option<&EnumValue> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}

impl From<EnumValue> for Value {
    fn from(e: EnumValue) -> Self {
        Self::Enum(e)
    }
}

/// Declared type of an immutable value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Boolean
    Bool,

    /// Signed 64-bit integer
    Int,

    /// 64-bit float
    Float,

    /// Text
    Text,

    /// Enumeration type
    Enum(EnumTypeId),
}

impl ValueType {
    /// Enumeration type id if this is an enumeration type
    #[inline]
    #[must_use]
    pub fn enum_id(&self) -> Option<&EnumTypeId> {
        match self {
            Self::Enum(id) => Some(id),
            _ => None,
        }
    }

    /// Check if this is an enumeration type
    #[inline]
    #[must_use]
    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("Bool"),
            Self::Int => f.write_str("Int"),
            Self::Float => f.write_str("Float"),
            Self::Text => f.write_str("Text"),
            Self::Enum(id) => write!(f, "Enum({id})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(ordinal: usize, name: &str) -> EnumValue {
        EnumValue::new(EnumTypeId::new("shop.Color"), ordinal, name)
    }

    #[test]
    fn enum_value_accessors() {
        let green = color(1, "GREEN");
        assert_eq!(green.ordinal(), 1);
        assert_eq!(green.name(), "GREEN");
        assert!(green.is_of(&EnumTypeId::new("shop.Color")));
        assert!(!green.is_of(&EnumTypeId::new("shop.Size")));
        assert_eq!(green.to_string(), "shop.Color.GREEN");
    }

    #[test]
    fn value_types() {
        assert_eq!(Value::Null.value_type(), None);
        assert_eq!(Value::from(true).value_type(), Some(ValueType::Bool));
        assert_eq!(Value::from(3_i64).value_type(), Some(ValueType::Int));
        assert_eq!(Value::from(0.5).value_type(), Some(ValueType::Float));
        assert_eq!(Value::from("x").value_type(), Some(ValueType::Text));
        assert_eq!(
            Value::from(color(0, "RED")).value_type(),
            Some(ValueType::Enum(EnumTypeId::new("shop.Color")))
        );
    }

    #[test]
    fn as_enum_only_for_enums() {
        let v = Value::from(color(2, "BLUE"));
        assert_eq!(v.as_enum().map(EnumValue::name), Some("BLUE"));
        assert!(Value::from(1_i64).as_enum().is_none());
        assert_eq!(v.kind_name(), "Enum");
    }

    #[test]
    fn null_and_enum_predicates() {
        assert!(Value::Null.is_null());
        assert!(!Value::from(false).is_null());

        let size = ValueType::Enum(EnumTypeId::new("shop.Size"));
        assert!(size.is_enum());
        assert_eq!(size.enum_id().map(EnumTypeId::as_str), Some("shop.Size"));
        assert!(!ValueType::Text.is_enum());
        assert_eq!(ValueType::Text.enum_id(), None);
    }

    #[test]
    fn value_type_serde() {
        let ty = ValueType::Enum(EnumTypeId::new("shop.Size"));
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(json, r#"{"enum":"shop.Size"}"#);

        let back: ValueType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ty);
        assert_eq!(serde_json::to_string(&ValueType::Int).unwrap(), "\"int\"");
    }
}
