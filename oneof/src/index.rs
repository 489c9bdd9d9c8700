//! Type-level positions into an alternative list.
//!
//! Positions are Peano numerals: [`UTerm`] is zero and [`UInt<I>`] is the
//! successor of `I`. The aliases [`U0`] through [`U15`] cover the common
//! cases; longer lists can still be addressed by nesting [`UInt`].
//!
//! # Examples
//!
//! ```
//! use oneof::index::{Index, U0, U3, UInt};
//!
//! assert_eq!(U0::VALUE, 0);
//! assert_eq!(U3::VALUE, 3);
//! assert_eq!(<UInt<U3>>::VALUE, 4);
//! ```

use core::marker::PhantomData;

/// Position zero.
pub enum UTerm {}

/// The position after `I`.
pub struct UInt<I>(PhantomData<I>, UTerm);

/// A type-level position, with its runtime value.
///
/// Only [`UTerm`] and [`UInt`] implement it; both are uninhabited and exist
/// purely as type arguments.
pub trait Index {
    /// The zero-based position this type stands for.
    const VALUE: usize;
}

impl Index for UTerm {
    const VALUE: usize = 0;
}

impl<I: Index> Index for UInt<I> {
    const VALUE: usize = I::VALUE + 1;
}

/// Position zero, same as [`UTerm`].
pub type U0 = UTerm;

macro_rules! positions {
    ($($name:ident($n:literal) after $prev:ident;)*) => {
        $(
            #[doc = concat!("Position ", $n, ".")]
            pub type $name = UInt<$prev>;
        )*
    };
}

positions! {
    U1(1) after U0;
    U2(2) after U1;
    U3(3) after U2;
    U4(4) after U3;
    U5(5) after U4;
    U6(6) after U5;
    U7(7) after U6;
    U8(8) after U7;
    U9(9) after U8;
    U10(10) after U9;
    U11(11) after U10;
    U12(12) after U11;
    U13(13) after U12;
    U14(14) after U13;
    U15(15) after U14;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_match_their_names() {
        assert_eq!(U1::VALUE, 1);
        assert_eq!(U7::VALUE, 7);
        assert_eq!(U15::VALUE, 15);
        assert_eq!(<UInt<UInt<U15>>>::VALUE, 17);
    }
}
