//! Replica Value Model
//!
//! Immutable values and enumeration descriptors consumed by the replicators.
//!
//! # Core Concepts
//!
//! - [`Value`]: An immutable value (scalar, text or enumeration constant)
//! - [`ValueType`]: Declared target type of a replication
//! - [`EnumTypeId`]: Qualified name of an enumeration type
//! - [`EnumValue`]: One enumeration constant together with its ordinal
//! - [`EnumType`]: Explicit, validated descriptor of an enumeration
//! - [`EnumSource`]: Anything that can produce an ordered constant sequence
//! - [`ReplicableEnum`]: Native Rust enums usable as enumeration types
//!
//! # Example
//!
//! ```rust
//! use replica_types::{replicable_enum, replicate_by_ordinal, ReplicableEnum};
//!
//! replicable_enum! {
//!     pub enum Color as "demo.Color" { Red, Green, Blue }
//! }
//!
//! replicable_enum! {
//!     pub enum Size as "demo.Size" { Small, Medium, Large }
//! }
//!
//! assert_eq!(replicate_by_ordinal::<Color, Size>(Color::Green), Some(Size::Medium));
//! assert_eq!(Color::Blue.to_enum_value().ordinal(), 2);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod enum_type;
mod id;
mod native;
mod source;
mod value;

// Re-exports
pub use enum_type::{DescriptorError, EnumType};
pub use id::EnumTypeId;
pub use native::{replicate_by_ordinal, ReplicableEnum};
pub use source::{EnumSource, IntrospectionError, JsonEnumSource};
pub use value::{EnumValue, Value, ValueType};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    crate::replicable_enum! {
        enum Light as "test.Light" { Red, Amber, Green }
    }

    #[test]
    fn native_enum_matches_descriptor() {
        let descriptor = EnumType::new(
            Light::TYPE_NAME,
            Light::VARIANTS.iter().map(|v| v.name()),
        )
        .unwrap();

        for variant in Light::VARIANTS {
            let value = variant.to_enum_value();
            assert_eq!(descriptor.value_at(value.ordinal()), Some(value));
        }
    }

    #[test]
    fn descriptor_from_json_source() {
        let source = JsonEnumSource::new(
            "test.Light",
            r#"{"name": "test.Light", "constants": ["Red", "Amber", "Green"]}"#,
        );

        let constants = source.constants().unwrap();
        assert_eq!(constants.len(), 3);
        assert_eq!(&*constants[1], Light::Amber.name());
    }
}
