use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use log::trace;
use num_traits::{PrimInt, ToPrimitive};

use crate::error::{Error, Result};
use crate::key::EnumKey;

/// Fixed-size, immutable table holding one value per real variant of `E`.
///
/// Position `i` holds the value of the key with ordinal `i`. Tables are
/// declared with [`property_table!`](crate::property_table), which validates
/// the declared keys during compilation.
pub struct PropertyTable<E, V, const N: usize> {
    values: [V; N],
    key: PhantomData<fn() -> E>,
}

impl<E, V, const N: usize> PropertyTable<E, V, N>
where
    E: EnumKey,
{
    pub const SIZE: usize = N;

    const SIZE_MATCHES_KEY: () = assert!(N == E::COUNT, "provide a property for every enum variant");

    /// Wraps values already in ordinal order.
    ///
    /// Fails to build if `N` differs from the number of real variants of `E`.
    pub const fn from_values(values: [V; N]) -> Self {
        let () = Self::SIZE_MATCHES_KEY;

        Self {
            values,
            key: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn as_array(&self) -> &[V; N] {
        &self.values
    }

    pub const fn as_slice(&self) -> &[V] {
        &self.values
    }

    pub fn into_inner(self) -> [V; N] {
        self.values
    }

    /// # Panics
    ///
    /// Panics if `key` is the sentinel.
    pub fn get(&self, key: E) -> &V {
        &self.values[key.ordinal()]
    }

    /// Bounds-checked lookup for untrusted integers.
    ///
    /// Negative indices and indices `>= N` yield [`Error::OutOfRange`].
    /// Only primitive integers are accepted:
    ///
    /// ```compile_fail
    /// use enum_property_table::fruit::FRUIT_PROPERTIES;
    ///
    /// let _ = FRUIT_PROPERTIES.at(3.9f64);
    /// ```
    pub fn at<I>(&self, index: I) -> Result<&V>
    where
        I: PrimInt,
    {
        match index.to_usize().and_then(|i| self.values.get(i)) {
            Some(value) => Ok(value),
            None => Err(self.out_of_range(&index)),
        }
    }

    /// Converts an untrusted integer into the key it names.
    pub fn try_key<I>(&self, index: I) -> Result<E>
    where
        I: PrimInt,
    {
        index
            .to_usize()
            .and_then(E::from_ordinal)
            .ok_or_else(|| self.out_of_range(&index))
    }

    /// Lookup without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be below `N`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &V {
        debug_assert!(index < N);

        self.values.get_unchecked(index)
    }

    #[cfg(feature = "enum-map")]
    pub fn to_enum_map(&self) -> enum_map::EnumMap<E, V>
    where
        E: enum_map::EnumArray<V>,
        V: Clone,
    {
        enum_map::EnumMap::from_fn(|key: E| self.get(key).clone())
    }

    fn out_of_range<I: PrimInt>(&self, index: &I) -> Error {
        let index = index.to_i128().unwrap_or(i128::MAX);

        trace!("index {} missed a table of {} entries", index, N);

        Error::OutOfRange { index, size: N }
    }
}

impl<E, V, const N: usize> Index<E> for PropertyTable<E, V, N>
where
    E: EnumKey,
{
    type Output = V;

    fn index(&self, key: E) -> &V {
        self.get(key)
    }
}

impl<E, V: Clone, const N: usize> Clone for PropertyTable<E, V, N> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            key: PhantomData,
        }
    }
}

impl<E, V: Copy, const N: usize> Copy for PropertyTable<E, V, N> {}

impl<E, V: PartialEq, const N: usize> PartialEq for PropertyTable<E, V, N> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<E, V: Eq, const N: usize> Eq for PropertyTable<E, V, N> {}

impl<E, V: fmt::Debug, const N: usize> fmt::Debug for PropertyTable<E, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}
