/// Declares a key enum and implements [`EnumKey`](crate::EnumKey) for it.
///
/// The sentinel is appended after the listed variants. The representation
/// must be an unsigned integer type.
///
/// ```
/// use enum_property_table::{enum_key, EnumKey};
///
/// enum_key! {
///     pub enum Fruit: u32 {
///         Apple,
///         Cherry,
///         Lychee,
///     }
///     sentinel DoNotUseMeMustBeLastEnumVariant;
/// }
///
/// assert_eq!(Fruit::COUNT, 3);
/// assert_eq!(Fruit::DoNotUseMeMustBeLastEnumVariant as usize, 3);
/// assert_eq!(Fruit::from_ordinal(1), Some(Fruit::Cherry));
/// ```
///
/// Signed representations are rejected:
///
/// ```compile_fail
/// use enum_property_table::enum_key;
///
/// enum_key! {
///     pub enum Fruit: i32 {
///         Apple,
///         Cherry,
///     }
///     sentinel DoNotUseMeMustBeLastEnumVariant;
/// }
/// ```
#[macro_export]
macro_rules! enum_key {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
        sentinel $sentinel:ident;
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant,)+
            #[doc(hidden)]
            $sentinel,
        }

        impl $crate::EnumKey for $name {
            type Repr = $repr;

            const SENTINEL: Self = Self::$sentinel;
            const COUNT: usize = Self::$sentinel as usize;
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            #[inline]
            fn ordinal(self) -> usize {
                self as usize
            }
        }

        $crate::__enum_map_interop!($name);
    };
}

#[cfg(feature = "enum-map")]
#[doc(hidden)]
#[macro_export]
macro_rules! __enum_map_interop {
    ($name:ident) => {
        impl $crate::__private::enum_map::Enum for $name {
            const LENGTH: usize = <Self as $crate::EnumKey>::COUNT;

            #[inline]
            fn from_usize(value: usize) -> Self {
                match <Self as $crate::EnumKey>::from_ordinal(value) {
                    Some(key) => key,
                    None => panic!(concat!("ordinal out of range for `", stringify!($name), "`")),
                }
            }

            #[inline]
            fn into_usize(self) -> usize {
                <Self as $crate::EnumKey>::ordinal(self)
            }
        }

        impl<V> $crate::__private::enum_map::EnumArray<V> for $name {
            type Array = [V; <$name as $crate::EnumKey>::COUNT];
        }
    };
}

#[cfg(not(feature = "enum-map"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __enum_map_interop {
    ($name:ident) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __unit {
    ($ignored:expr) => {
        ()
    };
}

/// Declares a compile-time property table keyed by an [`EnumKey`](crate::EnumKey).
///
/// Generates a marker type exposing `SIZE`, `TABLE` and `value()`. The
/// declared keys are checked while compiling: one entry per real variant,
/// listed in ordinal order, no duplicates, no sentinel.
///
/// ```
/// use enum_property_table::{enum_key, property_table, PropertyTable};
///
/// enum_key! {
///     pub enum Fruit: u32 {
///         Apple,
///         Cherry,
///         Lychee,
///     }
///     sentinel DoNotUseMeMustBeLastEnumVariant;
/// }
///
/// property_table! {
///     /// Average weight in grams.
///     pub Weights: Fruit => u32 {
///         Fruit::Apple => 120,
///         Fruit::Cherry => 4,
///         Fruit::Lychee => 20,
///     }
/// }
///
/// static WEIGHTS: PropertyTable<Fruit, u32, { Weights::SIZE }> = Weights::value();
///
/// assert_eq!(Weights::SIZE, 3);
/// assert_eq!(WEIGHTS[Fruit::Cherry], 4);
/// assert!(WEIGHTS.at(3).is_err());
/// ```
///
/// Using the sentinel as a key does not compile:
///
/// ```compile_fail
/// # use enum_property_table::{enum_key, property_table};
/// # enum_key! {
/// #     pub enum Fruit: u32 { Apple, Cherry, Lychee }
/// #     sentinel DoNotUseMeMustBeLastEnumVariant;
/// # }
/// property_table! {
///     pub Weights: Fruit => u32 {
///         Fruit::Apple => 120,
///         Fruit::Cherry => 4,
///         Fruit::DoNotUseMeMustBeLastEnumVariant => 20,
///     }
/// }
/// ```
///
/// Neither does a missing entry:
///
/// ```compile_fail
/// # use enum_property_table::{enum_key, property_table};
/// # enum_key! {
/// #     pub enum Fruit: u32 { Apple, Cherry, Lychee }
/// #     sentinel DoNotUseMeMustBeLastEnumVariant;
/// # }
/// property_table! {
///     pub Weights: Fruit => u32 {
///         Fruit::Apple => 120,
///         Fruit::Cherry => 4,
///     }
/// }
/// ```
///
/// or a surplus one:
///
/// ```compile_fail
/// # use enum_property_table::{enum_key, property_table};
/// # enum_key! {
/// #     pub enum Fruit: u32 { Apple, Cherry, Lychee }
/// #     sentinel DoNotUseMeMustBeLastEnumVariant;
/// # }
/// property_table! {
///     pub Weights: Fruit => u32 {
///         Fruit::Apple => 120,
///         Fruit::Cherry => 4,
///         Fruit::Lychee => 20,
///         Fruit::Lychee => 21,
///     }
/// }
/// ```
///
/// Entries are never reordered, so a scrambled declaration is rejected
/// rather than producing a table whose positions disagree with its keys:
///
/// ```compile_fail
/// # use enum_property_table::{enum_key, property_table};
/// # enum_key! {
/// #     pub enum Fruit: u32 { Apple, Cherry, Lychee }
/// #     sentinel DoNotUseMeMustBeLastEnumVariant;
/// # }
/// property_table! {
///     pub Weights: Fruit => u32 {
///         Fruit::Cherry => 4,
///         Fruit::Apple => 120,
///         Fruit::Lychee => 20,
///     }
/// }
/// ```
///
/// A repeated key is rejected even when the count matches:
///
/// ```compile_fail
/// # use enum_property_table::{enum_key, property_table};
/// # enum_key! {
/// #     pub enum Fruit: u32 { Apple, Cherry, Lychee }
/// #     sentinel DoNotUseMeMustBeLastEnumVariant;
/// # }
/// property_table! {
///     pub Weights: Fruit => u32 {
///         Fruit::Apple => 120,
///         Fruit::Apple => 4,
///         Fruit::Lychee => 20,
///     }
/// }
/// ```
#[macro_export]
macro_rules! property_table {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident : $key:ty => $value:ty {
            $($entry_key:expr => $entry_value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $name {
            /// Number of real variants of the key enum.
            pub const SIZE: usize = <[()]>::len(&[$($crate::__unit!($entry_key)),+]);

            pub const TABLE: $crate::PropertyTable<$key, $value, { $name::SIZE }> =
                $crate::PropertyTable::from_values([$($entry_value),+]);

            pub const fn value() -> $crate::PropertyTable<$key, $value, { $name::SIZE }> {
                Self::TABLE
            }
        }

        const _: () = {
            const ORDINALS: [usize; $name::SIZE] = [$({
                let key: $key = $entry_key;
                key as usize
            }),+];

            $crate::assert_layout(&ORDINALS, <$key as $crate::EnumKey>::SENTINEL as usize)
        };
    };
}
