//! Cross-enumeration ordinal mapping
//!
//! Maps a constant of one enumeration to the constant at the same position
//! in another. Positions are compared, names are not: if the two
//! declarations are ordered differently the mapping is still positional.

use crate::error::ReplicationError;
use replica_registry::{EnumRegistry, RegistryError};
use replica_types::{EnumTypeId, EnumValue};
use std::sync::Arc;

/// Result of an ordinal mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrdinalMapping {
    /// Target constant with the source's ordinal
    Mapped(EnumValue),

    /// Target enumeration declares too few constants
    NoValue,
}

impl OrdinalMapping {
    /// Check if a constant was found
    #[inline]
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped(_))
    }

    /// Borrow the mapped constant
    #[inline]
    #[must_use]
    pub fn as_mapped(&self) -> Option<&EnumValue> {
        match self {
            Self::Mapped(value) => Some(value),
            Self::NoValue => None,
        }
    }

    /// Convert into `Option`, `NoValue` becoming `None`
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<EnumValue> {
        match self {
            Self::Mapped(value) => Some(value),
            Self::NoValue => None,
        }
    }
}

/// Positional mapper between enumeration types
///
/// Stateless apart from the shared registry; cheap to clone and safe to use
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct OrdinalEnumMapper {
    registry: Arc<EnumRegistry>,
}

impl OrdinalEnumMapper {
    /// Create mapper over `registry`
    #[inline]
    #[must_use]
    pub fn new(registry: Arc<EnumRegistry>) -> Self {
        Self { registry }
    }

    /// Registry used to resolve target enumerations
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &Arc<EnumRegistry> {
        &self.registry
    }

    /// Map `source` to the constant of `target` with the same ordinal
    ///
    /// # Returns
    /// - `Ok(Mapped(_))` if `target` declares a constant at that ordinal
    /// - `Ok(NoValue)` if `target` declares fewer constants
    ///
    /// # Errors
    /// - [`ReplicationError::InvariantViolation`] if `target` is not a
    ///   registered enumeration, or `source` is registered but its ordinal
    ///   and name disagree with the declaration
    /// - [`ReplicationError::Introspection`] if either enumeration's
    ///   constants cannot be read
    pub fn map_by_ordinal(
        &self,
        source: &EnumValue,
        target: &EnumTypeId,
    ) -> Result<OrdinalMapping, ReplicationError> {
        self.check_declared(source)?;

        let Some(target_source) = self.registry.get(target) else {
            tracing::warn!(target_type = %target, "target type is not a registered enumeration");
            return Err(ReplicationError::invariant_violation(
                target.clone(),
                "not a registered enumeration",
            ));
        };

        let constants = target_source
            .constants()
            .map_err(|cause| ReplicationError::introspection(target.clone(), cause))?;

        let ordinal = source.ordinal();
        match constants.get(ordinal) {
            Some(name) => {
                tracing::trace!(source = %source, target_type = %target, %name, "mapped by ordinal");
                Ok(OrdinalMapping::Mapped(EnumValue::new(
                    target.clone(),
                    ordinal,
                    Arc::clone(name),
                )))
            }
            None => {
                tracing::debug!(
                    source = %source,
                    target_type = %target,
                    target_len = constants.len(),
                    "ordinal out of range for target enumeration"
                );
                Ok(OrdinalMapping::NoValue)
            }
        }
    }

    /// Ordinal of a registered source must be its declaration index
    fn check_declared(&self, source: &EnumValue) -> Result<(), ReplicationError> {
        if !self.registry.contains(source.type_id()) {
            return Ok(());
        }
        self.registry.resolve(source).map_err(|err| {
            let type_id = source.type_id().clone();
            match err {
                RegistryError::Introspection(cause) => {
                    ReplicationError::introspection(type_id, cause)
                }
                other => {
                    tracing::warn!(source = %source, error = %other, "source constant is not declared");
                    ReplicationError::invariant_violation(type_id, other.to_string())
                }
            }
        })
    }
}
