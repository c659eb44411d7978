//! Replica Enumeration Registry
//!
//! Maps enumeration type ids to their ordered constant sequences. Types are
//! registered explicitly, from descriptors, native Rust enums or JSON
//! documents, instead of being discovered at runtime.
//!
//! # Example
//!
//! ```rust
//! use replica_registry::EnumRegistry;
//! use replica_types::{EnumType, EnumTypeId};
//!
//! let registry = EnumRegistry::new();
//! registry
//!     .register_type(EnumType::new("shop.Size", ["SMALL", "MEDIUM", "LARGE"]).unwrap())
//!     .unwrap();
//!
//! let constants = registry.constants_of(&EnumTypeId::new("shop.Size")).unwrap();
//! assert_eq!(&*constants[1], "MEDIUM");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod registry;

// Re-exports
pub use registry::{EnumRegistry, RegistryError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
