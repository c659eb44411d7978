//! Replication across heterogeneous enumerations
//!
//! [`HeteroImmutableReplicator`] extends another replicator with one fallback:
//! a constant of one enumeration replicated into a different enumeration
//! type becomes the target constant with the same ordinal.

use crate::config::ReplicatorConfig;
use crate::error::ReplicationError;
use crate::mapper::OrdinalEnumMapper;
use crate::replicator::{ImmutableReplicator, StandardImmutableReplicator};
use replica_registry::EnumRegistry;
use replica_types::{Value, ValueType};
use std::sync::Arc;

/// Immutable replicator supporting replication across different enums
///
/// The inner replicator is always tried first. Only when it yields nothing,
/// the value is an enum constant and the target is a different enumeration
/// does the ordinal fallback run. A target with too few constants yields
/// `Ok(None)`.
#[derive(Debug, Clone)]
pub struct HeteroImmutableReplicator<R = StandardImmutableReplicator> {
    inner: R,
    mapper: OrdinalEnumMapper,
    enabled: bool,
}

impl HeteroImmutableReplicator {
    /// Create replicator over `registry` with default configuration
    #[inline]
    #[must_use]
    pub fn new(registry: Arc<EnumRegistry>) -> Self {
        Self::with_config(registry, ReplicatorConfig::default())
    }

    /// Create replicator over `registry` with `config`
    #[must_use]
    pub fn with_config(registry: Arc<EnumRegistry>, config: ReplicatorConfig) -> Self {
        Self::wrap(StandardImmutableReplicator::with_config(config), registry, config)
    }
}

impl<R: ImmutableReplicator> HeteroImmutableReplicator<R> {
    /// Add the ordinal fallback to `inner`
    #[must_use]
    pub fn wrap(inner: R, registry: Arc<EnumRegistry>, config: ReplicatorConfig) -> Self {
        Self {
            inner,
            mapper: OrdinalEnumMapper::new(registry),
            enabled: config.hetero_enum_mapping,
        }
    }

    /// Replicator tried before the fallback
    #[inline]
    #[must_use]
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Mapper used by the fallback
    #[inline]
    #[must_use]
    pub fn mapper(&self) -> &OrdinalEnumMapper {
        &self.mapper
    }
}

impl<R: ImmutableReplicator> ImmutableReplicator for HeteroImmutableReplicator<R> {
    fn replicate_immutable(
        &self,
        value: &Value,
        target: &ValueType,
    ) -> Result<Option<Value>, ReplicationError> {
        if let Some(replica) = self.inner.replicate_immutable(value, target)? {
            return Ok(Some(replica));
        }
        if !self.enabled {
            return Ok(None);
        }

        match (value.as_enum(), target.enum_id()) {
            (Some(from), Some(to)) if !from.is_of(to) => Ok(self
                .mapper
                .map_by_ordinal(from, to)?
                .into_option()
                .map(Value::Enum)),
            _ => Ok(None),
        }
    }

    fn name(&self) -> &'static str {
        "hetero_immutable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replica_types::{EnumType, EnumTypeId};

    fn registry() -> Arc<EnumRegistry> {
        let registry = EnumRegistry::new();
        registry
            .register_type(EnumType::new("shop.Color", ["RED", "GREEN", "BLUE"]).unwrap())
            .unwrap();
        registry
            .register_type(EnumType::new("shop.Size", ["SMALL", "MEDIUM", "LARGE"]).unwrap())
            .unwrap();
        Arc::new(registry)
    }

    fn green() -> Value {
        Value::Enum(replica_types::EnumValue::new(
            EnumTypeId::new("shop.Color"),
            1,
            "GREEN",
        ))
    }

    fn size() -> ValueType {
        ValueType::Enum(EnumTypeId::new("shop.Size"))
    }

    #[test]
    fn falls_back_to_ordinal_mapping() {
        let replicator = HeteroImmutableReplicator::new(registry());
        let replica = replicator.replicate_immutable(&green(), &size()).unwrap();

        let medium = replica.as_ref().and_then(Value::as_enum).unwrap();
        assert_eq!(medium.name(), "MEDIUM");
        assert_eq!(medium.ordinal(), 1);
        assert_eq!(medium.type_id().as_str(), "shop.Size");
    }

    #[test]
    fn inner_result_wins() {
        let replicator = HeteroImmutableReplicator::new(registry());
        let replica = replicator
            .replicate_immutable(&green(), &ValueType::Text)
            .unwrap();
        assert_eq!(replica, Some(Value::text("GREEN")));
    }

    #[test]
    fn disabled_fallback_yields_none() {
        let replicator = HeteroImmutableReplicator::with_config(
            registry(),
            ReplicatorConfig::new().with_hetero_enum_mapping(false),
        );
        assert_eq!(replicator.replicate_immutable(&green(), &size()).unwrap(), None);
    }

    #[test]
    fn non_enum_source_not_mapped() {
        let replicator = HeteroImmutableReplicator::new(registry());
        assert_eq!(
            replicator.replicate_immutable(&Value::Int(1), &size()).unwrap(),
            None
        );
    }

    #[test]
    fn wraps_custom_inner() {
        let inner: Arc<dyn ImmutableReplicator> = Arc::new(StandardImmutableReplicator::new());
        let replicator =
            HeteroImmutableReplicator::wrap(inner, registry(), ReplicatorConfig::default());

        assert_eq!(replicator.inner().name(), "standard_immutable");
        assert!(replicator
            .replicate_immutable(&green(), &size())
            .unwrap()
            .is_some());
    }
}
