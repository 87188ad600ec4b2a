//! Example table used by the `fruit-lookup` binary.

use crate::PropertyTable;

crate::enum_key! {
    pub enum Fruit: u32 {
        Apple,
        Cherry,
        Lychee,
        Mango,
        Prune,
    }
    sentinel DoNotUseMeMustBeLastEnumVariant;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FruitProperty {
    pub soft: bool,
    /// Grams.
    pub average_weight: i32,
    pub name: &'static str,
}

crate::property_table! {
    pub FruitProperties: Fruit => FruitProperty {
        Fruit::Apple => FruitProperty { soft: false, average_weight: 120, name: "apple" },
        Fruit::Cherry => FruitProperty { soft: true, average_weight: 4, name: "cherry" },
        Fruit::Lychee => FruitProperty { soft: true, average_weight: 20, name: "lychee" },
        Fruit::Mango => FruitProperty { soft: true, average_weight: 200, name: "mango" },
        Fruit::Prune => FruitProperty { soft: true, average_weight: 55, name: "prune" },
    }
}

pub static FRUIT_PROPERTIES: PropertyTable<Fruit, FruitProperty, { FruitProperties::SIZE }> =
    FruitProperties::value();

/// # Panics
///
/// Panics if `fruit` is the sentinel.
pub fn is_heavy_soft_fruit(fruit: Fruit) -> bool {
    let property = &FRUIT_PROPERTIES[fruit];

    property.soft && property.average_weight > 50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heavy_soft_fruit() {
        assert!(!is_heavy_soft_fruit(Fruit::Apple));
        assert!(!is_heavy_soft_fruit(Fruit::Cherry));
        assert!(!is_heavy_soft_fruit(Fruit::Lychee));
        assert!(is_heavy_soft_fruit(Fruit::Mango));
        assert!(is_heavy_soft_fruit(Fruit::Prune));
    }

    #[test]
    #[should_panic]
    fn test_sentinel_is_not_a_fruit() {
        is_heavy_soft_fruit(Fruit::DoNotUseMeMustBeLastEnumVariant);
    }
}
