//! Enumeration type identifiers
//!
//! Provides [`EnumTypeId`], the key under which enumeration types are
//! registered and compared.

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// Qualified name of an enumeration type
///
/// Two enumeration types are the same type exactly when their ids are equal.
/// Cheap to clone (shared string).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnumTypeId(Arc<str>);

impl EnumTypeId {
    /// Create id from a qualified type name
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Qualified type name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment of the qualified name (`a.b.Color` -> `Color`)
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rsplit(['.', ':']).next().unwrap_or(&self.0)
    }
}

impl Display for EnumTypeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EnumTypeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EnumTypeId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for EnumTypeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for EnumTypeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EnumTypeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(name))
    }
}
