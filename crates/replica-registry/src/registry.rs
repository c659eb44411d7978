//! Enumeration registry
//!
//! Provides [`EnumRegistry`], a concurrent map from [`EnumTypeId`] to the
//! [`EnumSource`] describing that enumeration.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use replica_types::{
    DescriptorError, EnumSource, EnumType, EnumTypeId, EnumValue, IntrospectionError,
    ReplicableEnum,
};
use std::sync::Arc;

/// Registry of known enumeration types
///
/// Thread-safe: registration and lookup may happen concurrently from any
/// number of threads. Lookups clone the source handle out of the map, so no
/// shard lock is held while constants are read.
#[derive(Debug, Default)]
pub struct EnumRegistry {
    entries: DashMap<EnumTypeId, RegisteredEnum>,
}

/// Registered source, plus its descriptor when registered from one
#[derive(Debug, Clone)]
struct RegisteredEnum {
    source: Arc<dyn EnumSource>,
    descriptor: Option<EnumType>,
}

impl EnumRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Register an explicit descriptor
    ///
    /// Registering an identical descriptor again is a no-op.
    ///
    /// # Errors
    /// Returns [`RegistryError::AlreadyRegistered`] if a different
    /// enumeration is registered under the same id
    pub fn register_type(&self, ty: EnumType) -> Result<(), RegistryError> {
        match self.entries.entry(ty.id().clone()) {
            Entry::Occupied(existing) => {
                if existing.get().descriptor.as_ref() == Some(&ty) {
                    Ok(())
                } else {
                    Err(RegistryError::AlreadyRegistered {
                        type_id: ty.id().clone(),
                    })
                }
            }
            Entry::Vacant(slot) => {
                tracing::debug!(type_id = %ty.id(), constants = ty.len(), "registered enumeration");
                slot.insert(RegisteredEnum {
                    source: Arc::new(ty.clone()),
                    descriptor: Some(ty),
                });
                Ok(())
            }
        }
    }

    /// Register a native Rust enum
    ///
    /// # Errors
    /// Returns error if the enum's type name is blank or another enumeration
    /// is registered under the same id
    pub fn register<E: ReplicableEnum>(&self) -> Result<(), RegistryError> {
        let ty = EnumType::new(E::TYPE_NAME, E::VARIANTS.iter().map(ReplicableEnum::name))?;
        self.register_type(ty)
    }

    /// Register an arbitrary source
    ///
    /// Registering the same source handle again is a no-op.
    ///
    /// # Errors
    /// Returns [`RegistryError::AlreadyRegistered`] if another source is
    /// registered under the same id
    pub fn register_source(&self, source: Arc<dyn EnumSource>) -> Result<(), RegistryError> {
        match self.entries.entry(source.type_id().clone()) {
            Entry::Occupied(existing) => {
                if Arc::ptr_eq(&existing.get().source, &source) {
                    Ok(())
                } else {
                    Err(RegistryError::AlreadyRegistered {
                        type_id: source.type_id().clone(),
                    })
                }
            }
            Entry::Vacant(slot) => {
                tracing::debug!(type_id = %source.type_id(), "registered enumeration source");
                slot.insert(RegisteredEnum {
                    source,
                    descriptor: None,
                });
                Ok(())
            }
        }
    }

    /// Parse a JSON descriptor (`{"name": ..., "constants": [...]}`) and
    /// register it
    ///
    /// # Errors
    /// Returns error if the document is malformed or the id is taken
    pub fn register_json(&self, document: &str) -> Result<EnumTypeId, RegistryError> {
        let ty: EnumType = serde_json::from_str(document)?;
        let type_id = ty.id().clone();
        self.register_type(ty)?;
        Ok(type_id)
    }

    /// Register `source`, replacing whatever was registered under its id
    ///
    /// Returns the previous source, if any.
    pub fn replace_source(&self, source: Arc<dyn EnumSource>) -> Option<Arc<dyn EnumSource>> {
        let type_id = source.type_id().clone();
        let previous = self.entries.insert(
            type_id.clone(),
            RegisteredEnum {
                source,
                descriptor: None,
            },
        );
        if previous.is_some() {
            tracing::debug!(type_id = %type_id, "replaced enumeration source");
        }
        previous.map(|entry| entry.source)
    }

    /// Source registered for `type_id`
    #[must_use]
    pub fn get(&self, type_id: &EnumTypeId) -> Option<Arc<dyn EnumSource>> {
        self.entries
            .get(type_id)
            .map(|entry| Arc::clone(&entry.source))
    }

    /// Check if `type_id` is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, type_id: &EnumTypeId) -> bool {
        self.entries.contains_key(type_id)
    }

    /// Remove a registration
    #[inline]
    pub fn remove(&self, type_id: &EnumTypeId) -> bool {
        self.entries.remove(type_id).is_some()
    }

    /// Number of registered enumerations
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered ids, sorted
    #[must_use]
    pub fn type_ids(&self) -> Vec<EnumTypeId> {
        let mut ids: Vec<_> = self.entries.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Constant sequence of a registered enumeration
    ///
    /// # Errors
    /// Returns error if the type is not registered or its source fails
    pub fn constants_of(&self, type_id: &EnumTypeId) -> Result<Arc<[Arc<str>]>, RegistryError> {
        let source = self
            .get(type_id)
            .ok_or_else(|| RegistryError::NotRegistered {
                type_id: type_id.clone(),
            })?;
        Ok(source.constants()?)
    }

    /// Check that `value` is a declared constant of its registered type
    ///
    /// # Errors
    /// Returns error if the type is unknown, or the ordinal/name pair does
    /// not match the declaration
    pub fn resolve(&self, value: &EnumValue) -> Result<(), RegistryError> {
        let constants = self.constants_of(value.type_id())?;
        match constants.get(value.ordinal()) {
            Some(declared) if &**declared == value.name() => Ok(()),
            _ => Err(RegistryError::UnknownConstant {
                type_id: value.type_id().clone(),
                ordinal: value.ordinal(),
                name: value.name().to_string(),
            }),
        }
    }
}

/// Registry errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Another enumeration already owns the id
    #[error("enumeration already registered: {type_id}")]
    AlreadyRegistered {
        /// Contested id
        type_id: EnumTypeId,
    },

    /// No enumeration registered under the id
    #[error("enumeration not registered: {type_id}")]
    NotRegistered {
        /// Missing id
        type_id: EnumTypeId,
    },

    /// Constant is not declared by its enumeration
    #[error("{type_id} declares no constant {name} at ordinal {ordinal}")]
    UnknownConstant {
        /// Enumeration type
        type_id: EnumTypeId,
        /// Claimed ordinal
        ordinal: usize,
        /// Claimed name
        name: String,
    },

    /// Descriptor failed validation
    #[error("invalid enumeration descriptor: {0}")]
    Descriptor(#[from] DescriptorError),

    /// JSON descriptor could not be parsed
    #[error("malformed enumeration document: {0}")]
    Json(#[from] serde_json::Error),

    /// Source could not produce its constants
    #[error(transparent)]
    Introspection(#[from] IntrospectionError),
}
