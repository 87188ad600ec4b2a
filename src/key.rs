use num_traits::{PrimInt, ToPrimitive, Unsigned};

mod sealed {
    pub trait Sealed {}
}

/// Integer types a key enum may use as its `#[repr]`.
#[diagnostic::on_unimplemented(
    message = "underlying type of a key enum must be unsigned, found `{Self}`",
    label = "signed or non-integer representation",
    note = "declare the key enum with `u8`, `u16`, `u32`, `u64` or `usize`"
)]
pub trait UnsignedRepr: PrimInt + Unsigned + sealed::Sealed {}

macro_rules! impl_unsigned_repr {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl UnsignedRepr for $ty {}
        )*
    };
}

impl_unsigned_repr!(u8, u16, u32, u64, usize);

/// A dense, zero-based enumeration usable as a table key.
///
/// Real variants occupy ordinals `0..COUNT`. The enum carries one extra
/// variant, [`SENTINEL`](EnumKey::SENTINEL), at ordinal `COUNT`, which is
/// never a valid key.
///
/// Usually implemented through [`enum_key!`](crate::enum_key). A hand-written
/// impl must be for a fieldless enum whose `#[repr]` is `Repr` and whose
/// variants carry no explicit discriminants.
pub trait EnumKey: Copy + Eq + 'static {
    type Repr: UnsignedRepr;

    const SENTINEL: Self;

    /// Number of real variants, equal to the sentinel's ordinal.
    const COUNT: usize;

    /// Real variants in ordinal order, sentinel excluded.
    const VARIANTS: &'static [Self];

    fn ordinal(self) -> usize;

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VARIANTS.get(ordinal).copied()
    }

    fn from_repr(repr: Self::Repr) -> Option<Self> {
        repr.to_usize().and_then(Self::from_ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::enum_key! {
        enum Direction: u8 {
            Up,
            Down,
            Left,
            Right,
        }
        sentinel Last;
    }

    #[test]
    fn test_count_matches_sentinel_ordinal() {
        assert_eq!(Direction::COUNT, 4);
        assert_eq!(Direction::SENTINEL, Direction::Last);
        assert_eq!(Direction::Last as usize, Direction::COUNT);
        assert_eq!(Direction::VARIANTS.len(), Direction::COUNT);
    }

    #[test]
    fn test_ordinals_are_dense() {
        for (index, direction) in Direction::VARIANTS.iter().enumerate() {
            assert_eq!(direction.ordinal(), index);
            assert_eq!(Direction::from_ordinal(index), Some(*direction));
        }
    }

    #[test]
    fn test_sentinel_is_not_a_key() {
        assert_eq!(Direction::from_ordinal(4), None);
        assert_eq!(Direction::from_ordinal(usize::MAX), None);
        assert_eq!(Direction::from_repr(4u8), None);
    }

    #[test]
    fn test_from_repr() {
        assert_eq!(Direction::from_repr(2u8), Some(Direction::Left));
    }
}
