//! Enumeration constant sources
//!
//! [`EnumSource`] is the seam through which replicators read an enumeration's
//! declared constants. Explicit descriptors never fail; descriptors parsed on
//! demand ([`JsonEnumSource`]) may.

use crate::enum_type::EnumType;
use crate::id::EnumTypeId;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// Producer of an enumeration's ordered constant sequence
pub trait EnumSource: Send + Sync + fmt::Debug {
    /// Enumeration type this source describes
    fn type_id(&self) -> &EnumTypeId;

    /// Constant names in declaration order
    ///
    /// # Errors
    /// Returns error if the underlying metadata cannot be read
    fn constants(&self) -> Result<Arc<[Arc<str>]>, IntrospectionError>;
}

impl EnumSource for EnumType {
    fn type_id(&self) -> &EnumTypeId {
        self.id()
    }

    fn constants(&self) -> Result<Arc<[Arc<str>]>, IntrospectionError> {
        Ok(self.shared_constants())
    }
}

/// Enumeration described by a JSON document, parsed on first use
///
/// The document has the [`EnumType`] wire shape
/// (`{"name": ..., "constants": [...]}`). A successful parse is cached;
/// a failed parse is reported on every call.
#[derive(Debug)]
pub struct JsonEnumSource {
    type_id: EnumTypeId,
    document: String,
    parsed: OnceCell<EnumType>,
}

impl JsonEnumSource {
    /// Create source for `type_id` backed by `document`
    #[must_use]
    pub fn new(type_id: impl Into<EnumTypeId>, document: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            document: document.into(),
            parsed: OnceCell::new(),
        }
    }

    /// Parse (or fetch the cached) descriptor
    ///
    /// # Errors
    /// Returns error if the document is malformed or declares another type
    pub fn descriptor(&self) -> Result<&EnumType, IntrospectionError> {
        self.parsed.get_or_try_init(|| {
            let parsed: EnumType =
                serde_json::from_str(&self.document).map_err(|source| IntrospectionError::Malformed {
                    type_id: self.type_id.clone(),
                    source,
                })?;

            if parsed.id() != &self.type_id {
                return Err(IntrospectionError::TypeMismatch {
                    expected: self.type_id.clone(),
                    found: parsed.id().clone(),
                });
            }
            Ok(parsed)
        })
    }
}

impl EnumSource for JsonEnumSource {
    fn type_id(&self) -> &EnumTypeId {
        &self.type_id
    }

    fn constants(&self) -> Result<Arc<[Arc<str>]>, IntrospectionError> {
        self.descriptor().map(EnumType::shared_constants)
    }
}

/// Failure reading enumeration metadata
#[derive(Debug, thiserror::Error)]
pub enum IntrospectionError {
    /// Descriptor document could not be parsed
    #[error("malformed descriptor for {type_id}: {source}")]
    Malformed {
        /// Enumeration being read
        type_id: EnumTypeId,
        /// Parser error
        source: serde_json::Error,
    },

    /// Descriptor document describes a different enumeration
    #[error("descriptor declares {found}, expected {expected}")]
    TypeMismatch {
        /// Enumeration the source was registered for
        expected: EnumTypeId,
        /// Enumeration named by the document
        found: EnumTypeId,
    },
}
