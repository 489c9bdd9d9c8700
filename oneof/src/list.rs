//! Alternative lists: the compile-time description of what a
//! [`Variant`][crate::Variant] may hold.
//!
//! A list is a right-nested tuple ending in `()`, usually spelled with the
//! [`Alts!`][crate::Alts] macro:
//!
//! ```
//! use oneof::{Alts, AlternativeList};
//!
//! type L = Alts![u8, u64, (u8, u16)];
//! assert_eq!(L::COUNT, 3);
//! assert_eq!(L::MAX_SIZE, 8);
//! assert_eq!(L::MAX_ALIGN, core::mem::align_of::<u64>());
//! ```
//!
//! Three lookups are provided on top of a list:
//!
//! * [`Select<I>`] maps a position to its alternative type. Positions past the
//!   end of the list do not resolve.
//! * [`Locate<T, I>`] maps a type to its position, with `I` inferred. A type
//!   that is not in the list does not resolve, and a type listed twice leaves
//!   `I` ambiguous, so by-type access to repeated alternatives is a compile
//!   error while by-index access keeps working:
//!
//! ```compile_fail
//! use oneof::Variant;
//!
//! let v: oneof::Variant![i32, i32, i32] = Variant::new(1);
//! ```
//!
//! * [`Convertible<V, I>`] picks the unique alternative constructible from a
//!   `V` without loss of information, i.e. through [`From`].

use core::mem::{align_of, size_of};
use core::ptr;

use crate::index::{Index, UInt, UTerm};
use crate::macro_support::{alternative_out_of_range, max};
use crate::storage::{Cons, Nil};

/// Spells an alternative list type.
///
/// ```
/// use oneof::Alts;
///
/// let _: Alts![i32, char] = (0i32, ('a', ()));
/// ```
#[macro_export]
macro_rules! Alts {
    [] => [()];
    [$head:ty $(, $t:ty)* $(,)?] => [($head, $crate::Alts!($($t,)*))];
}

/// Spells the type of a [`Variant`][crate::Variant] over the given alternatives.
///
/// ```
/// use oneof::Variant;
///
/// let v: oneof::Variant![i32, char] = Variant::new('a');
/// assert_eq!(v.index(), 1);
/// ```
#[macro_export]
macro_rules! Variant {
    [$($t:ty),* $(,)?] => [$crate::Variant::<$crate::Alts![$($t,)*]>];
}

/// A type-level list of alternatives together with its storage layout.
///
/// Implemented for `()` and for `(Head, Tail)` where `Tail` is itself a list.
/// The `unsafe fn`s dispatch on a runtime position; they are the building
/// blocks [`Variant`][crate::Variant] uses once it has checked its
/// discriminant, and are not meant to be called directly.
pub trait AlternativeList {
    /// Union nest able to hold any one alternative.
    type Storage;

    /// Number of alternatives in the list.
    const COUNT: usize;

    /// Largest `size_of` among the alternatives.
    const MAX_SIZE: usize;

    /// Largest `align_of` among the alternatives.
    const MAX_ALIGN: usize;

    /// Drops the alternative at `index`. Positions past the end are a no-op.
    ///
    /// # Safety
    ///
    /// If `index < COUNT`, the alternative at `index` must be alive in
    /// `storage`; it is dead afterwards.
    #[doc(hidden)]
    unsafe fn drop_at(storage: *mut Self::Storage, index: usize);

    /// Swaps the alternatives at `index` held by `a` and `b`.
    ///
    /// # Safety
    ///
    /// `index < COUNT` and both storages hold a live alternative at `index`.
    #[doc(hidden)]
    unsafe fn swap_at(a: *mut Self::Storage, b: *mut Self::Storage, index: usize);

    /// Move-assigns the alternative at `index` from `src` into `dst`.
    ///
    /// # Safety
    ///
    /// `index < COUNT` and both storages hold a live alternative at `index`.
    /// The alternative in `src` is moved out and must not be used or dropped
    /// afterwards.
    #[doc(hidden)]
    unsafe fn assign_at(dst: *mut Self::Storage, src: *mut Self::Storage, index: usize);

    /// Name of the alternative type at `index`, if `index` is in range.
    #[doc(hidden)]
    fn type_name_at(index: usize) -> Option<&'static str>;
}

impl AlternativeList for () {
    type Storage = Nil;

    const COUNT: usize = 0;
    const MAX_SIZE: usize = 0;
    const MAX_ALIGN: usize = 1;

    #[inline(always)]
    unsafe fn drop_at(_storage: *mut Nil, _index: usize) {}

    unsafe fn swap_at(_a: *mut Nil, _b: *mut Nil, _index: usize) {
        alternative_out_of_range()
    }

    unsafe fn assign_at(_dst: *mut Nil, _src: *mut Nil, _index: usize) {
        alternative_out_of_range()
    }

    fn type_name_at(_index: usize) -> Option<&'static str> {
        None
    }
}

impl<H, Tail: AlternativeList> AlternativeList for (H, Tail) {
    type Storage = Cons<H, Tail::Storage>;

    const COUNT: usize = 1 + Tail::COUNT;
    const MAX_SIZE: usize = max(size_of::<H>(), Tail::MAX_SIZE);
    const MAX_ALIGN: usize = max(align_of::<H>(), Tail::MAX_ALIGN);

    #[inline]
    unsafe fn drop_at(storage: *mut Self::Storage, index: usize) {
        if index == 0 {
            ptr::drop_in_place(Cons::head_mut(storage));
        } else {
            Tail::drop_at(Cons::tail_mut(storage), index - 1);
        }
    }

    #[inline]
    unsafe fn swap_at(a: *mut Self::Storage, b: *mut Self::Storage, index: usize) {
        if index == 0 {
            core::mem::swap(&mut *Cons::head_mut(a), &mut *Cons::head_mut(b));
        } else {
            Tail::swap_at(Cons::tail_mut(a), Cons::tail_mut(b), index - 1);
        }
    }

    #[inline]
    unsafe fn assign_at(dst: *mut Self::Storage, src: *mut Self::Storage, index: usize) {
        if index == 0 {
            *Cons::head_mut(dst) = ptr::read(Cons::head_mut(src));
        } else {
            Tail::assign_at(Cons::tail_mut(dst), Cons::tail_mut(src), index - 1);
        }
    }

    fn type_name_at(index: usize) -> Option<&'static str> {
        if index == 0 {
            Some(core::any::type_name::<H>())
        } else {
            Tail::type_name_at(index - 1)
        }
    }
}

/// Position → alternative type.
///
/// `<L as Select<I>>::Alt` is the alternative at position `I` of `L`.
///
/// ```
/// use oneof::{Alts, Select};
/// use oneof::index::U1;
///
/// fn is_char(_: <Alts![i32, char] as Select<U1>>::Alt) {}
/// is_char('a');
/// ```
///
/// Positions past the end of the list do not resolve:
///
/// ```compile_fail
/// use oneof::{Alts, Select};
/// use oneof::index::U2;
///
/// fn nope(_: <Alts![i32, char] as Select<U2>>::Alt) {}
/// ```
pub trait Select<I: Index>: AlternativeList {
    /// The alternative type at position `I`.
    type Alt;

    /// Projects the storage onto the alternative at position `I`.
    ///
    /// Memory behind the returned pointer is only initialized while the
    /// owning container's discriminant equals `I::VALUE`.
    #[doc(hidden)]
    fn project(storage: *const Self::Storage) -> *const Self::Alt;

    #[doc(hidden)]
    fn project_mut(storage: *mut Self::Storage) -> *mut Self::Alt;
}

impl<H, Tail: AlternativeList> Select<UTerm> for (H, Tail) {
    type Alt = H;

    #[inline(always)]
    fn project(storage: *const Self::Storage) -> *const H {
        Cons::head(storage)
    }

    #[inline(always)]
    fn project_mut(storage: *mut Self::Storage) -> *mut H {
        Cons::head_mut(storage)
    }
}

impl<H, Tail: Select<I>, I: Index> Select<UInt<I>> for (H, Tail) {
    type Alt = Tail::Alt;

    #[inline(always)]
    fn project(storage: *const Self::Storage) -> *const Tail::Alt {
        Tail::project(Cons::tail(storage))
    }

    #[inline(always)]
    fn project_mut(storage: *mut Self::Storage) -> *mut Tail::Alt {
        Tail::project_mut(Cons::tail_mut(storage))
    }
}

/// Alternative type → position.
///
/// `L: Locate<T, I>` holds when `T` is the alternative at position `I` of
/// `L`. Leaving `I` to inference finds the position of `T`; inference fails
/// when `T` is absent or listed more than once.
///
/// ```
/// use oneof::{Alts, Locate};
/// use oneof::index::Index;
///
/// fn position<L: Locate<T, I>, T, I: Index>() -> usize {
///     I::VALUE
/// }
/// assert_eq!(position::<Alts![i32, char, u8], char, _>(), 1);
/// ```
///
/// ```compile_fail
/// use oneof::{Alts, Locate};
/// use oneof::index::Index;
///
/// fn position<L: Locate<T, I>, T, I: Index>() -> usize {
///     I::VALUE
/// }
/// position::<Alts![i32, char, i32], i32, _>();
/// ```
pub trait Locate<T, I: Index>: Select<I, Alt = T> {}

impl<H, Tail: AlternativeList> Locate<H, UTerm> for (H, Tail) {}

impl<H, Tail: Locate<T, I>, T, I: Index> Locate<T, UInt<I>> for (H, Tail) {}

/// Best-alternative matching for converting construction and assignment.
///
/// `L: Convertible<V, I>` holds when the alternative at position `I`
/// implements `From<V>`. `From` is only implemented for conversions that
/// lose no information, so narrowing conversions are never eligible. With
/// `I` inferred, exactly one alternative may be eligible; two or more make
/// the conversion ambiguous and it is rejected at compile time:
///
/// ```
/// use oneof::Variant;
///
/// // Only `i64` can be built from an `i32` without narrowing.
/// let v: oneof::Variant![i8, i64] = Variant::convert(7i32);
/// assert_eq!(v.index(), 1);
/// ```
///
/// ```compile_fail
/// use oneof::Variant;
///
/// // `i64: From<i32>` and `f64: From<i32>`: ambiguous.
/// let v: oneof::Variant![i64, f64] = Variant::convert(7i32);
/// ```
///
/// An exact match is also a `From` match, so a list holding both `T` and a
/// widening target of `T` is ambiguous for `convert`; use
/// [`Variant::new`][crate::Variant::new] for exact matches.
pub trait Convertible<V, I: Index>: Select<I> {
    /// Converts `value` into the selected alternative.
    #[doc(hidden)]
    fn convert(value: V) -> Self::Alt;
}

impl<H: From<V>, Tail: AlternativeList, V> Convertible<V, UTerm> for (H, Tail) {
    #[inline]
    fn convert(value: V) -> H {
        H::from(value)
    }
}

impl<H, Tail: Convertible<V, I>, V, I: Index> Convertible<V, UInt<I>> for (H, Tail) {
    #[inline]
    fn convert(value: V) -> Tail::Alt {
        Tail::convert(value)
    }
}

#[cfg(test)]
mod tests {
    use core::mem::{align_of, size_of};

    use super::*;
    use crate::index::{U0, U1, U2};
    use crate::Alts;

    fn alt_at<L: Select<I>, I: Index>() -> &'static str {
        core::any::type_name::<L::Alt>()
    }

    fn locate<L: Locate<T, I>, T, I: Index>() -> usize {
        I::VALUE
    }

    #[test]
    fn counts_and_layout() {
        type L = Alts![u8, u32, [u16; 5]];
        assert_eq!(L::COUNT, 3);
        assert_eq!(L::MAX_SIZE, 10);
        assert_eq!(L::MAX_ALIGN, 4);
        assert!(size_of::<<L as AlternativeList>::Storage>() >= L::MAX_SIZE);
        assert_eq!(align_of::<<L as AlternativeList>::Storage>(), L::MAX_ALIGN);

        assert_eq!(<()>::COUNT, 0);
        assert_eq!(<()>::MAX_SIZE, 0);
    }

    #[test]
    fn select_and_locate() {
        type L = Alts![i32, char, i32];
        assert_eq!(alt_at::<L, U0>(), "i32");
        assert_eq!(alt_at::<L, U1>(), "char");
        assert_eq!(alt_at::<L, U2>(), "i32");
        assert_eq!(locate::<L, char, _>(), 1);
        // Repeated types are still addressable with an explicit position.
        assert_eq!(locate::<L, i32, U2>(), 2);
    }

    #[test]
    fn type_names() {
        type L = Alts![u8, bool];
        assert_eq!(L::type_name_at(0), Some("u8"));
        assert_eq!(L::type_name_at(1), Some("bool"));
        assert_eq!(L::type_name_at(2), None);
        assert_eq!(L::type_name_at(usize::MAX), None);
    }
}
