//! Enumeration type descriptors
//!
//! Provides [`EnumType`], an explicit ordered list of constant names standing
//! in for runtime type metadata.

use crate::id::EnumTypeId;
use crate::value::EnumValue;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Descriptor of an enumeration type
///
/// Constants are kept in declaration order; a constant's index is its
/// ordinal. Constant names are unique within the type. An enumeration with
/// no constants is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEnumType", into = "RawEnumType")]
pub struct EnumType {
    id: EnumTypeId,
    constants: Arc<[Arc<str>]>,
}

/// Wire shape of [`EnumType`]
#[derive(Serialize, Deserialize)]
struct RawEnumType {
    name: String,
    constants: Vec<String>,
}

impl EnumType {
    /// Create descriptor from a type name and constants in declaration order
    ///
    /// # Errors
    /// Returns error if the type name or a constant name is blank, or a
    /// constant name is declared twice
    pub fn new<I, S>(name: impl Into<Arc<str>>, constants: I) -> Result<Self, DescriptorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let name: Arc<str> = name.into();
        if name.trim().is_empty() {
            return Err(DescriptorError::EmptyTypeName);
        }

        let constants: Vec<Arc<str>> = constants.into_iter().map(Into::into).collect();
        validate_constants(&name, &constants)?;

        Ok(Self {
            id: EnumTypeId::new(name),
            constants: constants.into(),
        })
    }

    /// Type id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &EnumTypeId {
        &self.id
    }

    /// Constant names in declaration order
    #[inline]
    #[must_use]
    pub fn constants(&self) -> &[Arc<str>] {
        &self.constants
    }

    /// Shared handle to the constant sequence
    #[inline]
    pub(crate) fn shared_constants(&self) -> Arc<[Arc<str>]> {
        Arc::clone(&self.constants)
    }

    /// Number of declared constants
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Check if the enumeration declares no constants
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Name of the constant at `ordinal`
    #[inline]
    #[must_use]
    pub fn constant(&self, ordinal: usize) -> Option<&str> {
        self.constants.get(ordinal).map(|c| &**c)
    }

    /// Ordinal of the constant called `name`
    #[must_use]
    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.constants.iter().position(|c| &**c == name)
    }

    /// Constant at `ordinal` as an [`EnumValue`]
    #[must_use]
    pub fn value_at(&self, ordinal: usize) -> Option<EnumValue> {
        self.constants
            .get(ordinal)
            .map(|name| EnumValue::new(self.id.clone(), ordinal, Arc::clone(name)))
    }

    /// Constant called `name` as an [`EnumValue`]
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<EnumValue> {
        self.ordinal_of(name).and_then(|ordinal| self.value_at(ordinal))
    }

    /// Iterate over all constants in declaration order
    pub fn values(&self) -> impl Iterator<Item = EnumValue> + '_ {
        self.constants
            .iter()
            .enumerate()
            .map(|(ordinal, name)| EnumValue::new(self.id.clone(), ordinal, Arc::clone(name)))
    }
}

fn validate_constants(type_name: &str, constants: &[Arc<str>]) -> Result<(), DescriptorError> {
    let mut seen = HashSet::with_capacity(constants.len());
    for (ordinal, constant) in constants.iter().enumerate() {
        if constant.trim().is_empty() {
            return Err(DescriptorError::EmptyConstantName {
                type_name: type_name.to_string(),
                ordinal,
            });
        }
        if !seen.insert(&**constant) {
            return Err(DescriptorError::DuplicateConstant {
                type_name: type_name.to_string(),
                constant: constant.to_string(),
            });
        }
    }
    Ok(())
}

impl TryFrom<RawEnumType> for EnumType {
    type Error = DescriptorError;

    fn try_from(raw: RawEnumType) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.constants)
    }
}

impl From<EnumType> for RawEnumType {
    fn from(ty: EnumType) -> Self {
        Self {
            name: ty.id.as_str().to_string(),
            constants: ty.constants.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Errors building an enumeration descriptor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// Type name is blank
    #[error("enumeration type name is empty")]
    EmptyTypeName,

    /// Constant name is blank
    #[error("constant #{ordinal} of {type_name} has an empty name")]
    EmptyConstantName {
        /// Enumeration type name
        type_name: String,
        /// Position of the blank constant
        ordinal: usize,
    },

    /// Constant name declared twice
    #[error("constant {constant} declared twice in {type_name}")]
    DuplicateConstant {
        /// Enumeration type name
        type_name: String,
        /// Repeated constant name
        constant: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn color() -> EnumType {
        EnumType::new("shop.Color", ["RED", "GREEN", "BLUE"]).unwrap()
    }

    #[test]
    fn constants_in_declaration_order() {
        let ty = color();
        assert_eq!(ty.len(), 3);
        assert_eq!(ty.constant(0), Some("RED"));
        assert_eq!(ty.constant(2), Some("BLUE"));
        assert_eq!(ty.constant(3), None);
        assert_eq!(ty.ordinal_of("GREEN"), Some(1));
        assert_eq!(ty.ordinal_of("PURPLE"), None);
    }

    #[test]
    fn value_at_carries_ordinal() {
        let ty = color();
        let blue = ty.value_at(2).unwrap();
        assert_eq!(blue.ordinal(), 2);
        assert_eq!(blue.name(), "BLUE");
        assert_eq!(blue.type_id(), ty.id());
        assert_eq!(ty.value_of("BLUE"), Some(blue));
    }

    #[test]
    fn values_iterate_all() {
        let names: Vec<String> = color().values().map(|v| v.name().to_string()).collect();
        assert_eq!(names, vec!["RED", "GREEN", "BLUE"]);
    }

    #[test]
    fn empty_enumeration_is_valid() {
        let ty = EnumType::new("shop.Nothing", Vec::<String>::new()).unwrap();
        assert!(ty.is_empty());
        assert_eq!(ty.value_at(0), None);
    }

    #[test]
    fn rejects_blank_type_name() {
        let err = EnumType::new("  ", ["A"]).unwrap_err();
        assert_eq!(err, DescriptorError::EmptyTypeName);
    }

    #[test]
    fn rejects_blank_constant() {
        let err = EnumType::new("shop.Size", ["SMALL", ""]).unwrap_err();
        assert!(matches!(err, DescriptorError::EmptyConstantName { ordinal: 1, .. }));
    }

    #[test]
    fn rejects_duplicate_constant() {
        let err = EnumType::new("shop.Size", ["SMALL", "LARGE", "SMALL"]).unwrap_err();
        assert_eq!(
            err,
            DescriptorError::DuplicateConstant {
                type_name: "shop.Size".to_string(),
                constant: "SMALL".to_string(),
            }
        );
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(color()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "shop.Color", "constants": ["RED", "GREEN", "BLUE"]})
        );

        let back: EnumType = serde_json::from_value(json).unwrap();
        assert_eq!(back, color());
    }

    #[test]
    fn deserialize_validates() {
        let result: Result<EnumType, _> =
            serde_json::from_str(r#"{"name": "shop.Size", "constants": ["S", "S"]}"#);
        assert!(result.is_err());
    }
}
