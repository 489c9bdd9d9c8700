//! The [`Variant`] container: construction, destruction, assignment,
//! emplace, swap and queries.
//!
//! Accessors live in [`crate::access`]; cloning, comparison and visiting in
//! their own modules. Everything is built on the handful of `pub(crate)`
//! primitives at the bottom of this file.

use core::convert::Infallible;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr::{self, NonNull};

use crate::index::{Index, UTerm};
use crate::init::{Initializer, MoveFrom, WithDefault};
use crate::list::{AlternativeList, Convertible, Locate, Select};

/// Discriminant of a variant that holds no value.
///
/// A variant only becomes valueless when the construction of a new
/// alternative fails part way through an emplace or assignment, or when a
/// fallible constructor reported an error.
pub const VARIANT_NPOS: usize = usize::MAX;

/// A value that is exactly one of the alternatives in the list `L`.
///
/// The list is usually spelled with [`Variant!`][crate::Variant!] or, for a
/// named set of alternatives, generated by `#[define_oneof]`.
///
/// ```
/// use oneof::prelude::*;
/// use oneof::index::{U0, U1};
///
/// let mut v: Variant![i32, char] = Variant::new(1);
/// assert_eq!(v.index(), 0);
/// assert_eq!(v.get::<i32, _>(), Ok(&1));
/// assert!(v.try_get_at::<U1>().is_none());
///
/// v.set('x');
/// assert!(v.holds_alternative::<char, _>());
/// assert_eq!(v.get_at::<U1>(), Ok(&'x'));
/// assert_eq!(v.get_at::<U0>(), Err(AccessError::WrongAlternative));
/// ```
///
/// The storage is a union of all alternatives, so the container is as
/// large as its largest alternative plus the discriminant:
///
/// ```
/// use core::mem::size_of;
///
/// assert!(size_of::<oneof::Variant![u8, [u64; 4]]>() <= 5 * size_of::<u64>());
/// ```
///
/// # Variance
///
/// The storage is reached through the list's associated `Storage` type, so
/// `Variant<L>` is invariant in `L`. Where a `Result<&'static str, u8>`
/// coerces to `Result<&'a str, u8>`, the corresponding variant does not:
///
/// ```compile_fail
/// fn shorten<'a>(v: oneof::Variant![&'static str, u8]) -> oneof::Variant![&'a str, u8] {
///     v
/// }
/// ```
///
/// Move the held value into a new variant instead.
pub struct Variant<L: AlternativeList> {
    index: usize,
    storage: MaybeUninit<L::Storage>,
    _owns: PhantomData<L>,
}

#[inline(always)]
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(v) => v,
        Err(never) => match never {},
    }
}

impl<L: AlternativeList> Variant<L> {
    /// Number of alternatives.
    pub const COUNT: usize = L::COUNT;

    /// Constructs the alternative of type `T`.
    ///
    /// `T` must appear exactly once in the list. For repeated types use
    /// [`in_place_index`][Self::in_place_index].
    ///
    /// ```compile_fail
    /// use oneof::Variant;
    ///
    /// // `u16` is not an alternative.
    /// let v: oneof::Variant![u8, u32] = Variant::new(1u16);
    /// ```
    #[inline]
    pub fn new<T, I: Index>(value: T) -> Self
    where
        L: Locate<T, I>,
    {
        Self::in_place_index::<I>(MoveFrom(value))
    }

    /// Constructs the unique alternative that can be built from `value`
    /// through [`From`].
    ///
    /// ```
    /// use oneof::Variant;
    ///
    /// let v: oneof::Variant![bool, f64] = Variant::convert(1.5f32);
    /// assert_eq!(v.index(), 1);
    /// ```
    #[inline]
    pub fn convert<V, I: Index>(value: V) -> Self
    where
        L: Convertible<V, I>,
    {
        Self::in_place_index::<I>(MoveFrom(L::convert(value)))
    }

    /// Constructs the alternative at position `I` in place.
    #[inline]
    pub fn in_place_index<I: Index>(
        init: impl Initializer<<L as Select<I>>::Alt, Error = Infallible>,
    ) -> Self
    where
        L: Select<I>,
    {
        infallible(Self::try_in_place_index::<I, _>(init))
    }

    /// Constructs the alternative at position `I` in place with a fallible
    /// initializer. On error no container is produced.
    ///
    /// ```
    /// use oneof::prelude::*;
    /// use oneof::index::U1;
    ///
    /// let r = <Variant![u8, u32]>::try_in_place_index::<U1, _>(TryFromFn(|| "17".parse()));
    /// assert_eq!(r.unwrap().get_at::<U1>(), Ok(&17));
    ///
    /// let r = <Variant![u8, u32]>::try_in_place_index::<U1, _>(TryFromFn(|| "x".parse()));
    /// assert!(r.is_err());
    /// ```
    pub fn try_in_place_index<I: Index, Init>(init: Init) -> Result<Self, Init::Error>
    where
        L: Select<I>,
        Init: Initializer<<L as Select<I>>::Alt>,
    {
        let mut v = Self::valueless();
        v.construct::<I, _>(init)?;
        Ok(v)
    }

    /// Constructs the alternative of type `T` in place.
    #[inline]
    pub fn in_place_type<T, I: Index>(init: impl Initializer<T, Error = Infallible>) -> Self
    where
        L: Locate<T, I>,
    {
        infallible(Self::try_in_place_type::<T, I, _>(init))
    }

    /// Constructs the alternative of type `T` in place with a fallible
    /// initializer.
    #[inline]
    pub fn try_in_place_type<T, I: Index, Init>(init: Init) -> Result<Self, Init::Error>
    where
        L: Locate<T, I>,
        Init: Initializer<T>,
    {
        Self::try_in_place_index::<I, Init>(init)
    }

    /// Destroys the current alternative and constructs the one at position
    /// `I` in its place.
    ///
    /// If the initializer panics the variant is left valueless.
    ///
    /// ```
    /// use oneof::prelude::*;
    /// use oneof::index::{U1, U2};
    ///
    /// let mut v: Variant![i32, i32, String] = Variant::in_place_index::<U1>(MoveFrom(3));
    /// v.emplace_at::<U2>(FromFn(|| String::from("three"))).push('!');
    /// assert_eq!(v.index(), 2);
    /// assert_eq!(v.get_at::<U2>().unwrap(), "three!");
    /// ```
    #[inline]
    pub fn emplace_at<I: Index>(
        &mut self,
        init: impl Initializer<<L as Select<I>>::Alt, Error = Infallible>,
    ) -> &mut <L as Select<I>>::Alt
    where
        L: Select<I>,
    {
        infallible(self.try_emplace_at::<I, _>(init))
    }

    /// Destroys the current alternative and tries to construct the one at
    /// position `I` in its place.
    ///
    /// The old value is gone whether or not construction succeeds: on error
    /// the variant is left valueless.
    pub fn try_emplace_at<I: Index, Init>(
        &mut self,
        init: Init,
    ) -> Result<&mut <L as Select<I>>::Alt, Init::Error>
    where
        L: Select<I>,
        Init: Initializer<<L as Select<I>>::Alt>,
    {
        self.destroy();
        self.construct::<I, _>(init)?;
        // Safety: `construct` just made `I` the live alternative.
        Ok(unsafe { &mut *L::project_mut(self.storage.as_mut_ptr()) })
    }

    /// Destroys the current alternative and constructs the one of type `T`.
    #[inline]
    pub fn emplace<T, I: Index>(&mut self, init: impl Initializer<T, Error = Infallible>) -> &mut T
    where
        L: Locate<T, I>,
    {
        infallible(self.try_emplace::<T, I, _>(init))
    }

    /// Destroys the current alternative and tries to construct the one of
    /// type `T`.
    #[inline]
    pub fn try_emplace<T, I: Index, Init>(&mut self, init: Init) -> Result<&mut T, Init::Error>
    where
        L: Locate<T, I>,
        Init: Initializer<T>,
    {
        self.try_emplace_at::<I, Init>(init)
    }

    /// Move-assigns from another variant.
    ///
    /// When both hold the same alternative, the alternative's own assignment
    /// is used and the target is never destroyed. Otherwise the target is
    /// destroyed and the source's alternative moved in; a valueless source
    /// leaves the target valueless.
    pub fn assign(&mut self, mut source: Self) {
        match (self.index, source.index) {
            (VARIANT_NPOS, VARIANT_NPOS) => {}
            (_, VARIANT_NPOS) => self.destroy(),
            (dst, src) if dst == src => {
                source.index = VARIANT_NPOS;
                // Safety: both hold `src`; `source` no longer owns its value.
                unsafe {
                    L::assign_at(self.storage.as_mut_ptr(), source.storage.as_mut_ptr(), src)
                }
            }
            (_, src) => {
                self.destroy();
                mem::swap(&mut self.storage, &mut source.storage);
                source.index = VARIANT_NPOS;
                self.index = src;
            }
        }
    }

    /// Assigns a value of one of the alternative types.
    ///
    /// Assigns in place if the variant already holds `T`, otherwise destroys
    /// the current alternative and moves `value` in.
    #[inline]
    pub fn set<T, I: Index>(&mut self, value: T)
    where
        L: Locate<T, I>,
    {
        self.put::<I>(value);
    }

    /// Assigns the unique alternative that can be built from `value` through
    /// [`From`].
    ///
    /// The conversion runs before the current alternative is touched, so a
    /// panicking conversion leaves the variant as it was.
    ///
    /// ```
    /// use oneof::Variant;
    ///
    /// let mut v: oneof::Variant![bool, u64] = Variant::new(true);
    /// v.assign_from(9u8);
    /// assert_eq!(v.get::<u64, _>(), Ok(&9));
    /// ```
    #[inline]
    pub fn assign_from<V, I: Index>(&mut self, value: V)
    where
        L: Convertible<V, I>,
    {
        self.put::<I>(L::convert(value));
    }

    /// Exchanges the contents of two variants.
    ///
    /// Holding the same alternative, the two values are swapped with each
    /// other. Otherwise the whole contents move across, discriminants
    /// included; moves cannot fail, so neither side ends up valueless.
    ///
    /// ```
    /// use oneof::Variant;
    ///
    /// let mut x: oneof::Variant![char, i32] = Variant::new(1);
    /// let mut y: oneof::Variant![char, i32] = Variant::new('a');
    /// x.swap(&mut y);
    /// assert_eq!(y.get::<i32, _>(), Ok(&1));
    /// assert_eq!(x.get::<char, _>(), Ok(&'a'));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        match (self.index, other.index) {
            (VARIANT_NPOS, VARIANT_NPOS) => {}
            (a, b) if a == b => {
                // Safety: both hold alternative `a`.
                unsafe { L::swap_at(self.storage.as_mut_ptr(), other.storage.as_mut_ptr(), a) }
            }
            _ => {
                mem::swap(&mut self.storage, &mut other.storage);
                mem::swap(&mut self.index, &mut other.index);
            }
        }
    }

    /// Position of the held alternative, or [`VARIANT_NPOS`] when valueless.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the variant holds no value.
    #[inline(always)]
    pub fn valueless_by_exception(&self) -> bool {
        self.index == VARIANT_NPOS
    }

    /// Whether the held alternative is the one of type `T`.
    #[inline]
    pub fn holds_alternative<T, I: Index>(&self) -> bool
    where
        L: Locate<T, I>,
    {
        self.index == I::VALUE
    }

    /// Whether the held alternative is the one at position `I`.
    #[inline]
    pub fn holds_at<I: Index>(&self) -> bool
    where
        L: Select<I>,
    {
        self.index == I::VALUE
    }

    /// Number of alternatives, same as [`Self::COUNT`].
    #[inline(always)]
    pub fn alternative_count(&self) -> usize {
        L::COUNT
    }

    /// Type name of the held alternative, `None` when valueless.
    ///
    /// ```
    /// let v: oneof::Variant![u8, bool] = oneof::Variant::new(false);
    /// assert_eq!(v.type_name(), Some("bool"));
    /// ```
    #[inline]
    pub fn type_name(&self) -> Option<&'static str> {
        L::type_name_at(self.index)
    }

    /// Shared reference to the alternative at position `I`, if held.
    ///
    /// Every other accessor is a thin layer over this one or its mutable
    /// twin.
    #[inline]
    pub fn try_get_at<I: Index>(&self) -> Option<&<L as Select<I>>::Alt>
    where
        L: Select<I>,
    {
        if self.index == I::VALUE {
            // Safety: the discriminant says `I` is alive.
            Some(unsafe { &*L::project(self.storage.as_ptr()) })
        } else {
            None
        }
    }

    /// Mutable reference to the alternative at position `I`, if held.
    #[inline]
    pub fn try_get_at_mut<I: Index>(&mut self) -> Option<&mut <L as Select<I>>::Alt>
    where
        L: Select<I>,
    {
        if self.index == I::VALUE {
            // Safety: the discriminant says `I` is alive.
            Some(unsafe { &mut *L::project_mut(self.storage.as_mut_ptr()) })
        } else {
            None
        }
    }

    /// Moves the alternative at position `I` out of the variant, or gives
    /// the variant back if it holds something else.
    ///
    /// ```
    /// use oneof::index::{U0, U1};
    ///
    /// let v: oneof::Variant![u8, String] = oneof::Variant::new(String::from("hi"));
    /// let v = v.into_at::<U0>().unwrap_err();
    /// assert_eq!(v.into_at::<U1>().unwrap(), "hi");
    /// ```
    pub fn into_at<I: Index>(mut self) -> Result<<L as Select<I>>::Alt, Self>
    where
        L: Select<I>,
    {
        if self.index != I::VALUE {
            return Err(self);
        }
        self.index = VARIANT_NPOS;
        // Safety: `I` was alive and is now disowned, so `self` drops nothing.
        Ok(unsafe { ptr::read(L::project(self.storage.as_ptr())) })
    }

    pub(crate) const fn valueless() -> Self {
        Variant {
            index: VARIANT_NPOS,
            storage: MaybeUninit::uninit(),
            _owns: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn raw(&self) -> *const L::Storage {
        self.storage.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn raw_mut(&mut self) -> *mut L::Storage {
        self.storage.as_mut_ptr()
    }

    /// # Safety
    ///
    /// The alternative at `index` must be alive in the storage, and nothing
    /// else may be.
    #[inline(always)]
    pub(crate) unsafe fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Drops the held alternative, leaving the variant valueless.
    ///
    /// The discriminant is cleared first: if the alternative's destructor
    /// panics, the variant is already valueless and nothing is dropped twice.
    pub(crate) fn destroy(&mut self) {
        let index = mem::replace(&mut self.index, VARIANT_NPOS);
        if index != VARIANT_NPOS {
            // Safety: the discriminant said `index` was alive.
            unsafe { L::drop_at(self.storage.as_mut_ptr(), index) }
        }
    }

    /// Writes the alternative at position `I` into empty storage.
    fn construct<I: Index, Init>(&mut self, init: Init) -> Result<(), Init::Error>
    where
        L: Select<I>,
        Init: Initializer<<L as Select<I>>::Alt>,
    {
        debug_assert_eq!(self.index, VARIANT_NPOS);
        // Safety: the projection of a non-null storage pointer is non-null,
        // and the storage holds no live value that could be overwritten.
        unsafe {
            let dst = NonNull::new_unchecked(L::project_mut(self.storage.as_mut_ptr()));
            init.initialize(dst)?;
        }
        self.index = I::VALUE;
        Ok(())
    }

    /// Assigns `value` in place if `I` is held, else replaces the held
    /// alternative with it.
    fn put<I: Index>(&mut self, value: <L as Select<I>>::Alt)
    where
        L: Select<I>,
    {
        match self.try_get_at_mut::<I>() {
            Some(slot) => *slot = value,
            None => {
                self.destroy();
                infallible(self.construct::<I, _>(MoveFrom(value)));
            }
        }
    }
}

impl<L: AlternativeList> Drop for Variant<L> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Default-constructs the first alternative.
///
/// Only the first alternative matters:
///
/// ```
/// use oneof::{Monostate, Variant};
///
/// struct NoDefault(#[allow(dead_code)] i32);
///
/// let v: oneof::Variant![Monostate, NoDefault] = Default::default();
/// assert_eq!(v.index(), 0);
/// ```
///
/// ```compile_fail
/// struct NoDefault(i32);
///
/// let v: oneof::Variant![NoDefault, i32] = Default::default();
/// ```
impl<H: Default, Tail: AlternativeList> Default for Variant<(H, Tail)> {
    #[inline]
    fn default() -> Self {
        Self::in_place_index::<UTerm>(WithDefault)
    }
}

/// Swaps two variants. Same as [`Variant::swap`].
#[inline]
pub fn swap<L: AlternativeList>(a: &mut Variant<L>, b: &mut Variant<L>) {
    a.swap(b)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;
    use std::string::String;

    use super::*;
    use crate::index::{U0, U1, U2};
    use crate::init::{FromFn, TryFromFn};
    use crate::test_type::{Counters, PanicOnDrop, Tracked};
    use crate::{Monostate, Variant};

    #[test]
    fn construct_by_value() {
        let v: Variant![i32, char] = Variant::new(1);
        assert_eq!(v.index(), 0);
        assert_eq!(v.try_get_at::<U0>(), Some(&1));
        assert!(v.try_get_at::<U1>().is_none());
        assert!(!v.valueless_by_exception());
        assert_eq!(v.alternative_count(), 2);
        assert_eq!(<Variant![i32, char]>::COUNT, 2);
    }

    #[test]
    fn repeated_types_by_index() {
        let mut v: Variant![i32, i32, i32] = Variant::in_place_index::<U1>(MoveFrom(5));
        assert_eq!(v.index(), 1);
        assert!(v.holds_at::<U1>());
        assert!(v.try_get_at::<U0>().is_none());
        assert_eq!(v.try_get_at::<U1>(), Some(&5));
        assert!(v.try_get_at::<U2>().is_none());

        *v.emplace_at::<U2>(MoveFrom(6)) += 1;
        assert_eq!(v.index(), 2);
        assert_eq!(v.try_get_at::<U2>(), Some(&7));
    }

    #[test]
    fn default_builds_first_alternative() {
        struct NoDefault;
        let v: Variant![Monostate, NoDefault] = Variant::default();
        assert_eq!(v.index(), 0);
        assert_eq!(v.try_get_at::<U0>(), Some(&Monostate));

        let v: Variant![String, u8] = Default::default();
        assert_eq!(v.try_get_at::<U0>().map(String::as_str), Some(""));
    }

    #[test]
    fn drop_runs_exactly_once() {
        let counters = Counters::new();
        {
            let _v: Variant![u8, Tracked] = Variant::new(Tracked::new(1, &counters));
            assert_eq!(counters.drops(), 0);
        }
        assert_eq!(counters.drops(), 1);
    }

    #[test]
    fn emplace_replaces_and_destroys_old() {
        let counters = Counters::new();
        let mut v: Variant![Tracked, String] = Variant::new(Tracked::new(1, &counters));
        v.emplace::<String, _>(FromFn(|| String::from("x")));
        assert_eq!(counters.drops(), 1);
        assert_eq!(v.type_name(), Some(core::any::type_name::<String>()));
    }

    #[test]
    fn failed_emplace_leaves_valueless() {
        let counters = Counters::new();
        let mut v: Variant![Tracked, u32] = Variant::new(Tracked::new(1, &counters));
        let r = v.try_emplace::<u32, _, _>(TryFromFn(|| "nope".parse::<u32>()));
        assert!(r.is_err());
        assert!(v.valueless_by_exception());
        assert_eq!(v.index(), VARIANT_NPOS);
        assert_eq!(v.type_name(), None);
        assert_eq!(counters.drops(), 1);
        drop(v);
        assert_eq!(counters.drops(), 1);
    }

    #[test]
    fn panicking_emplace_leaves_valueless() {
        let mut v: Variant![i32, String] = Variant::new(String::from("old"));
        let r = catch_unwind(AssertUnwindSafe(|| {
            v.emplace_at::<U0>(FromFn(|| -> i32 { panic!("construct") }));
        }));
        assert!(r.is_err());
        assert!(v.valueless_by_exception());

        // A valueless variant can be reused.
        v.set(3);
        assert_eq!(v.try_get_at::<U0>(), Some(&3));
    }

    #[test]
    fn failed_in_place_construction_yields_nothing() {
        let r = <Variant![u8, u32]>::try_in_place_type::<u32, _, _>(TryFromFn(|| {
            Err::<u32, _>("no")
        }));
        assert!(matches!(r, Err("no")));
    }

    #[test]
    fn panicking_drop_is_not_repeated() {
        let dropped = Rc::new(Cell::new(0));
        let mut v: Variant![PanicOnDrop, u8] = Variant::new(PanicOnDrop(dropped.clone()));
        let r = catch_unwind(AssertUnwindSafe(|| {
            v.emplace::<u8, _>(MoveFrom(1));
        }));
        assert!(r.is_err());
        assert!(v.valueless_by_exception());
        drop(v);
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn set_same_alternative_assigns_in_place() {
        let counters = Counters::new();
        let mut v: Variant![Tracked, u8] = Variant::new(Tracked::new(1, &counters));
        let other = Counters::new();
        v.set(Tracked::new(2, &other));
        // The old value is dropped by the assignment, not by destroying the
        // variant; the discriminant never leaves 0.
        assert_eq!(v.index(), 0);
        assert_eq!(counters.drops(), 1);
        assert_eq!(v.try_get_at::<U0>().map(|t| t.value), Some(2));

        v.set(4u8);
        assert_eq!(other.drops(), 1);
        assert_eq!(v.try_get_at::<U1>(), Some(&4));
    }

    #[test]
    fn assign_follows_state_table() {
        type V = Variant![String, u8];

        let mut empty = V::valueless();
        empty.assign(V::valueless());
        assert!(empty.valueless_by_exception());

        let mut v = V::new(String::from("a"));
        v.assign(V::valueless());
        assert!(v.valueless_by_exception());

        v.assign(V::new(String::from("b")));
        assert_eq!(v.try_get_at::<U0>().map(String::as_str), Some("b"));

        v.assign(V::new(String::from("c")));
        assert_eq!(v.try_get_at::<U0>().map(String::as_str), Some("c"));

        v.assign(V::new(7));
        assert_eq!(v.try_get_at::<U1>(), Some(&7));
    }

    #[test]
    fn assign_same_alternative_keeps_target() {
        let a = Counters::new();
        let b = Counters::new();
        let mut v: Variant![Tracked, u8] = Variant::new(Tracked::new(1, &a));
        v.assign(Variant::new(Tracked::new(2, &b)));
        assert_eq!(a.drops(), 1);
        assert_eq!(b.drops(), 0);
        drop(v);
        assert_eq!(b.drops(), 1);
    }

    #[test]
    fn assign_from_converts() {
        let mut v: Variant![bool, i64] = Variant::new(false);
        v.assign_from(-3i32);
        assert_eq!(v.try_get_at::<U1>(), Some(&-3));
        v.assign_from(5u32);
        assert_eq!(v.try_get_at::<U1>(), Some(&5));
    }

    #[test]
    fn swap_cases() {
        type V = Variant![char, i32];

        let mut x = V::new(1);
        let mut y = V::new('a');
        x.swap(&mut y);
        assert_eq!(y.try_get_at::<U1>(), Some(&1));
        assert_eq!(x.try_get_at::<U0>(), Some(&'a'));

        let mut z = V::new('b');
        swap(&mut x, &mut z);
        assert_eq!(x.try_get_at::<U0>(), Some(&'b'));
        assert_eq!(z.try_get_at::<U0>(), Some(&'a'));

        let mut e = V::valueless();
        x.swap(&mut e);
        assert!(x.valueless_by_exception());
        assert_eq!(e.try_get_at::<U0>(), Some(&'b'));

        let mut f = V::valueless();
        x.swap(&mut f);
        assert!(x.valueless_by_exception() && f.valueless_by_exception());
    }

    #[test]
    fn swap_drops_nothing() {
        let a = Counters::new();
        let b = Counters::new();
        let mut x: Variant![Tracked, String] = Variant::new(Tracked::new(1, &a));
        let mut y: Variant![Tracked, String] = Variant::new(Tracked::new(2, &b));
        x.swap(&mut y);
        let mut z: Variant![Tracked, String] = Variant::new(String::new());
        x.swap(&mut z);
        assert_eq!((a.drops(), b.drops()), (0, 0));
        assert_eq!(z.try_get_at::<U0>().map(|t| t.value), Some(2));
        assert_eq!(y.try_get_at::<U0>().map(|t| t.value), Some(1));
    }

    #[test]
    fn into_at_gives_back_on_mismatch() {
        let counters = Counters::new();
        let v: Variant![u8, Tracked] = Variant::new(Tracked::new(9, &counters));
        let v = match v.into_at::<U0>() {
            Ok(_) => panic!("holds alternative 1"),
            Err(v) => v,
        };
        let t = v.into_at::<U1>().ok().map(|t| t.value);
        assert_eq!(t, Some(9));
        assert_eq!(counters.drops(), 1);
    }
}
