//! Native Rust enumerations
//!
//! [`ReplicableEnum`] exposes a fieldless Rust enum's declared variants so it
//! can be registered and replicated like any other enumeration type. The
//! [`replicable_enum!`](crate::replicable_enum) macro declares the enum and
//! implements the trait in one go.

use crate::id::EnumTypeId;
use crate::value::EnumValue;
use std::fmt;

/// Fieldless enum with a fixed, ordered set of variants
///
/// # Contract
/// - `VARIANTS[i].ordinal() == i` for every declared variant
/// - `name()` is unique per variant
pub trait ReplicableEnum: Copy + fmt::Debug + Send + Sync + 'static {
    /// Qualified enumeration type name
    const TYPE_NAME: &'static str;

    /// All variants in declaration order
    const VARIANTS: &'static [Self];

    /// Declared variant name
    fn name(&self) -> &'static str;

    /// Declaration index of the variant
    fn ordinal(&self) -> usize;

    /// Type id under which this enum is registered
    #[must_use]
    fn enum_type_id() -> EnumTypeId {
        EnumTypeId::new(Self::TYPE_NAME)
    }

    /// Variant at `ordinal`
    #[must_use]
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VARIANTS.get(ordinal).copied()
    }

    /// Convert into a dynamically typed [`EnumValue`]
    #[must_use]
    fn to_enum_value(self) -> EnumValue {
        EnumValue::new(Self::enum_type_id(), self.ordinal(), self.name())
    }

    /// Convert back from an [`EnumValue`] of this type
    ///
    /// Returns `None` if the value belongs to another type or does not
    /// name one of the declared variants.
    #[must_use]
    fn from_enum_value(value: &EnumValue) -> Option<Self> {
        if value.type_id().as_str() != Self::TYPE_NAME {
            return None;
        }
        Self::from_ordinal(value.ordinal()).filter(|v| v.name() == value.name())
    }
}

/// Map a variant of `F` to the variant of `T` with the same ordinal
///
/// Returns `None` when `T` declares fewer variants than `from.ordinal() + 1`.
/// Names are not compared.
#[inline]
#[must_use]
pub fn replicate_by_ordinal<F: ReplicableEnum, T: ReplicableEnum>(from: F) -> Option<T> {
    T::from_ordinal(from.ordinal())
}

/// Declare a fieldless enum implementing [`ReplicableEnum`]
///
/// The enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`.
/// Variant names become the constant names.
///
/// ```rust
/// use replica_types::{replicable_enum, ReplicableEnum};
///
/// replicable_enum! {
///     /// Traffic light phases
///     pub enum Light as "traffic.Light" { Red, Amber, Green }
/// }
///
/// assert_eq!(Light::Amber.ordinal(), 1);
/// assert_eq!(Light::VARIANTS.len(), 3);
/// ```
#[macro_export]
macro_rules! replicable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $type_name:literal {
            $($variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::ReplicableEnum for $name {
            const TYPE_NAME: &'static str = $type_name;
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            fn ordinal(&self) -> usize {
                *self as usize
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    crate::replicable_enum! {
        enum Weekday as "cal.Weekday" { Mon, Tue, Wed, Thu, Fri, Sat, Sun }
    }

    crate::replicable_enum! {
        enum Note as "music.Note" { Do, Re, Mi, Fa, Sol, La, Ti }
    }

    crate::replicable_enum! {
        enum Switch as "dev.Switch" { On, Off }
    }

    #[test]
    fn variants_follow_declaration_order() {
        for (i, day) in Weekday::VARIANTS.iter().enumerate() {
            assert_eq!(day.ordinal(), i);
        }
        assert_eq!(Weekday::Sun.name(), "Sun");
        assert_eq!(Weekday::enum_type_id().as_str(), "cal.Weekday");
    }

    #[test]
    fn same_length_maps_by_position_not_name() {
        assert_eq!(replicate_by_ordinal::<Weekday, Note>(Weekday::Sun), Some(Note::Ti));
        assert_eq!(replicate_by_ordinal::<Weekday, Note>(Weekday::Mon), Some(Note::Do));
    }

    #[test]
    fn shorter_target_gives_none() {
        assert_eq!(replicate_by_ordinal::<Weekday, Switch>(Weekday::Wed), None);
        assert_eq!(replicate_by_ordinal::<Weekday, Switch>(Weekday::Tue), Some(Switch::Off));
    }

    #[test]
    fn enum_value_conversion() {
        let value = Weekday::Fri.to_enum_value();
        assert_eq!(value.ordinal(), 4);
        assert_eq!(value.name(), "Fri");
        assert_eq!(Weekday::from_enum_value(&value), Some(Weekday::Fri));

        // Wrong type
        assert_eq!(Note::from_enum_value(&value), None);

        // Right type, stale name
        let stale = EnumValue::new(Weekday::enum_type_id(), 4, "Friday");
        assert_eq!(Weekday::from_enum_value(&stale), None);
    }

    proptest! {
        #[test]
        fn prop_typed_mapping_is_positional(idx in 0usize..7) {
            let day = Weekday::VARIANTS[idx];
            let mapped = replicate_by_ordinal::<Weekday, Switch>(day);
            if idx < Switch::VARIANTS.len() {
                prop_assert_eq!(mapped, Some(Switch::VARIANTS[idx]));
            } else {
                prop_assert_eq!(mapped, None);
            }
        }
    }
}
