//! Compile-time property tables keyed by dense enums.
//!
//! A key enum is declared with [`enum_key!`], which appends a sentinel
//! variant whose ordinal is the number of real variants. A table is declared
//! with [`property_table!`] as an explicit `key => value` list; the list is
//! validated while compiling and materialized as a [`PropertyTable`] indexed
//! by the key's ordinal.
//!
//! ```
//! use enum_property_table::fruit::{is_heavy_soft_fruit, Fruit, FRUIT_PROPERTIES};
//!
//! assert_eq!(FRUIT_PROPERTIES[Fruit::Mango].name, "mango");
//! assert!(is_heavy_soft_fruit(Fruit::Prune));
//! assert!(FRUIT_PROPERTIES.at(10).is_err());
//! ```

mod error;
mod key;
mod layout;
mod macros;
mod table;

pub mod fruit;

pub use error::{Error, LayoutError, Result};
pub use key::{EnumKey, UnsignedRepr};
pub use layout::{assert_layout, validate_layout};
pub use table::PropertyTable;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "enum-map")]
    pub use enum_map;
}
