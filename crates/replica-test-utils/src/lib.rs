//! Testing utilities for the Replica workspace
//!
//! Shared fixture enumerations, registries and tracing setup.

#![allow(missing_docs)]

use replica_registry::EnumRegistry;
use replica_types::{replicable_enum, EnumType, EnumTypeId, JsonEnumSource};
use std::sync::Arc;

replicable_enum! {
    pub enum Color as "fixtures.Color" { Red, Green, Blue }
}

replicable_enum! {
    pub enum Size as "fixtures.Size" { Small, Medium, Large }
}

replicable_enum! {
    pub enum Switch as "fixtures.Switch" { On, Off }
}

replicable_enum! {
    pub enum Single as "fixtures.Single" { A }
}

replicable_enum! {
    pub enum Axis as "fixtures.Axis" { X, Y, Z }
}

replicable_enum! {
    pub enum Weekday as "fixtures.Weekday" { Mon, Tue, Wed, Thu, Fri, Sat, Sun }
}

replicable_enum! {
    pub enum Note as "fixtures.Note" { Do, Re, Mi, Fa, Sol, La, Ti }
}

/// Type id of an enumeration whose descriptor document is malformed
pub const BROKEN_TYPE: &str = "fixtures.Broken";

/// Registry with every fixture enumeration plus [`BROKEN_TYPE`]
pub fn fixture_registry() -> Arc<EnumRegistry> {
    let registry = EnumRegistry::new();
    registry.register::<Color>().unwrap();
    registry.register::<Size>().unwrap();
    registry.register::<Switch>().unwrap();
    registry.register::<Single>().unwrap();
    registry.register::<Axis>().unwrap();
    registry.register::<Weekday>().unwrap();
    registry.register::<Note>().unwrap();
    registry
        .register_source(Arc::new(JsonEnumSource::new(
            BROKEN_TYPE,
            r#"{"name": "fixtures.Broken", "constants": [1, 2]}"#,
        )))
        .unwrap();
    Arc::new(registry)
}

/// Descriptor named `name` with constants `prefix0..prefix{len-1}`
pub fn generated_enum(name: &str, prefix: &str, len: usize) -> EnumType {
    EnumType::new(name, (0..len).map(|i| format!("{prefix}{i}"))).unwrap()
}

/// Id of [`BROKEN_TYPE`]
pub fn broken_type_id() -> EnumTypeId {
    EnumTypeId::new(BROKEN_TYPE)
}

/// Install a tracing subscriber writing to the test harness
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
