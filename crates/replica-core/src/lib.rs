//! Replica Core
//!
//! Replication of immutable values, including the positional mapping of
//! constants between different enumeration types.
//!
//! # Core Concepts
//!
//! - [`ImmutableReplicator`]: Core trait for immutable replication strategies
//! - [`StandardImmutableReplicator`]: Identity, numeric and text rules
//! - [`HeteroImmutableReplicator`]: Adds cross-enumeration ordinal mapping
//! - [`OrdinalEnumMapper`]: Maps a constant to the same position in another enum
//! - [`ReplicatorConfig`]: Rule switches, loadable from TOML
//!
//! # Example
//!
//! ```rust
//! use replica_core::{HeteroImmutableReplicator, ImmutableReplicator};
//! use replica_registry::EnumRegistry;
//! use replica_types::{EnumType, Value, ValueType};
//! use std::sync::Arc;
//!
//! let color = EnumType::new("shop.Color", ["RED", "GREEN", "BLUE"]).unwrap();
//! let size = EnumType::new("shop.Size", ["SMALL", "MEDIUM", "LARGE"]).unwrap();
//!
//! let registry = EnumRegistry::new();
//! registry.register_type(color.clone()).unwrap();
//! registry.register_type(size.clone()).unwrap();
//!
//! let replicator = HeteroImmutableReplicator::new(Arc::new(registry));
//! let green = Value::Enum(color.value_of("GREEN").unwrap());
//! let replica = replicator
//!     .replicate_immutable(&green, &ValueType::Enum(size.id().clone()))
//!     .unwrap();
//!
//! assert_eq!(replica, Some(Value::Enum(size.value_of("MEDIUM").unwrap())));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
mod hetero;
mod mapper;
mod replicator;

// Re-exports
pub use config::{ConfigError, ReplicatorConfig};
pub use error::ReplicationError;
pub use hetero::HeteroImmutableReplicator;
pub use mapper::{OrdinalEnumMapper, OrdinalMapping};
pub use replicator::{ImmutableReplicator, StandardImmutableReplicator};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
