//! Error types for Replica Core
//!
//! Replication distinguishes three outcomes:
//! - a replica was produced,
//! - the strategy could not produce one (`Ok(None)` / `NoValue`, not an error),
//! - an internal failure, represented by [`ReplicationError`].

use replica_types::{EnumTypeId, IntrospectionError};

/// Internal replication failure
///
/// Neither variant is retried. An out-of-range ordinal is never an error.
#[derive(Debug, thiserror::Error)]
pub enum ReplicationError {
    /// A caller guarantee was broken (e.g. target type is not a registered
    /// enumeration)
    #[error("invariant violated for {type_id}: {reason}")]
    InvariantViolation {
        /// Type the guarantee was about
        type_id: EnumTypeId,
        /// What was expected
        reason: String,
    },

    /// Enumeration metadata could not be read
    #[error("failed to read constants of {type_id}: {source}")]
    Introspection {
        /// Enumeration being read
        type_id: EnumTypeId,
        /// Underlying cause
        source: IntrospectionError,
    },
}

impl ReplicationError {
    /// Create invariant violation error
    #[inline]
    #[must_use]
    pub fn invariant_violation(type_id: EnumTypeId, reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            type_id,
            reason: reason.into(),
        }
    }

    /// Create introspection error wrapping `source`
    #[inline]
    #[must_use]
    pub fn introspection(type_id: EnumTypeId, source: IntrospectionError) -> Self {
        Self::Introspection { type_id, source }
    }

    /// Check if error indicates a broken caller assumption
    #[inline]
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }

    /// Type the error is about
    #[inline]
    #[must_use]
    pub fn type_id(&self) -> &EnumTypeId {
        match self {
            Self::InvariantViolation { type_id, .. } | Self::Introspection { type_id, .. } => {
                type_id
            }
        }
    }
}
