//! Immutable replicator trait and the standard rules
//!
//! Provides the [`ImmutableReplicator`] trait for pluggable replication of
//! immutable values, and [`StandardImmutableReplicator`], the rules tried
//! before any cross-enumeration fallback.

use crate::config::ReplicatorConfig;
use crate::error::ReplicationError;
use replica_types::{Value, ValueType};
use std::sync::Arc;

/// Strategy replicating an immutable value into a declared type
///
/// # Contract
/// - `Ok(Some(_))`: replica produced
/// - `Ok(None)`: this strategy cannot replicate the pair; callers may try
///   another strategy or fall back to an absent value
/// - `Err(_)`: internal failure, not to be swallowed
pub trait ImmutableReplicator: Send + Sync + std::fmt::Debug {
    /// Replicate `value` as `target`
    ///
    /// # Errors
    /// Returns error only for internal failures, never for an inapplicable
    /// pair
    fn replicate_immutable(
        &self,
        value: &Value,
        target: &ValueType,
    ) -> Result<Option<Value>, ReplicationError>;

    /// Strategy name (for debugging)
    fn name(&self) -> &'static str;

    /// Replicate several values in order, stopping at the first error
    ///
    /// # Errors
    /// Returns the first internal failure
    fn replicate_all(
        &self,
        pairs: &[(Value, ValueType)],
    ) -> Result<Vec<Option<Value>>, ReplicationError> {
        pairs
            .iter()
            .map(|(value, target)| self.replicate_immutable(value, target))
            .collect()
    }
}

impl<R: ImmutableReplicator + ?Sized> ImmutableReplicator for Arc<R> {
    fn replicate_immutable(
        &self,
        value: &Value,
        target: &ValueType,
    ) -> Result<Option<Value>, ReplicationError> {
        (**self).replicate_immutable(value, target)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Rules for immutable values of the same or trivially convertible type
///
/// # Rules
/// - `Null` replicates to `Null` whatever the target
/// - identical types (including the same enumeration) replicate unchanged
/// - `Int` -> `Float`, and `Float` -> `Int` when integral and in range
/// - scalars and enum constants -> `Text`
///
/// Different enumeration types are left to other strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardImmutableReplicator {
    config: ReplicatorConfig,
}

impl StandardImmutableReplicator {
    /// Create replicator with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create replicator with `config`
    #[inline]
    #[must_use]
    pub fn with_config(config: ReplicatorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ReplicatorConfig {
        &self.config
    }

    #[allow(clippy::cast_precision_loss)]
    fn convert(&self, value: &Value, target: &ValueType) -> Option<Value> {
        match (value, target) {
            (Value::Int(i), ValueType::Float) if self.config.numeric_conversion => {
                Some(Value::Float(*i as f64))
            }
            (Value::Float(f), ValueType::Int) if self.config.numeric_conversion => {
                integral(*f).map(Value::Int)
            }
            (Value::Bool(b), ValueType::Text) if self.config.stringify_scalars => {
                Some(Value::text(b.to_string()))
            }
            (Value::Int(i), ValueType::Text) if self.config.stringify_scalars => {
                Some(Value::text(i.to_string()))
            }
            (Value::Float(f), ValueType::Text) if self.config.stringify_scalars => {
                Some(Value::text(f.to_string()))
            }
            (Value::Enum(e), ValueType::Text) if self.config.stringify_scalars => {
                Some(Value::text(e.name()))
            }
            _ => None,
        }
    }
}

impl ImmutableReplicator for StandardImmutableReplicator {
    fn replicate_immutable(
        &self,
        value: &Value,
        target: &ValueType,
    ) -> Result<Option<Value>, ReplicationError> {
        let Some(source_type) = value.value_type() else {
            return Ok(Some(Value::Null));
        };

        if &source_type == target {
            return Ok(Some(value.clone()));
        }

        let replica = self.convert(value, target);
        if replica.is_none() {
            tracing::trace!(from = %source_type, to = %target, "no standard rule applies");
        }
        Ok(replica)
    }

    fn name(&self) -> &'static str {
        "standard_immutable"
    }
}

/// `f` as `i64` if it has no fractional part and fits
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(f: f64) -> Option<i64> {
    // i64::MAX is not representable; 2^63 is the first float past it
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
