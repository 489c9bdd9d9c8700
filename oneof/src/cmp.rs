//! Comparison, hashing and formatting.
//!
//! Two variants are equal when they hold the same alternative and the held
//! values are equal; two valueless variants are equal. Ordering puts
//! valueless first, then orders by position, then by the held values.
//!
//! ```
//! use oneof::Variant;
//!
//! type V = oneof::Variant![u8, char];
//! assert!(V::new(200u8) < V::new('a'));
//! assert!(V::new('a') < V::new('b'));
//! assert_eq!(V::new(1u8), V::new(1u8));
//! assert_ne!(V::new(1u8), V::new('1'));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::list::AlternativeList;
use crate::macro_support::alternative_out_of_range;
use crate::storage::{Cons, Nil};
use crate::variant::{Variant, VARIANT_NPOS};

/// An alternative list whose alternatives are all [`PartialEq`].
pub trait PartialEqList: AlternativeList {
    /// # Safety
    ///
    /// `index < COUNT` and both storages hold a live alternative at `index`.
    #[doc(hidden)]
    unsafe fn eq_at(a: *const Self::Storage, b: *const Self::Storage, index: usize) -> bool;
}

/// An alternative list whose alternatives are all [`Eq`].
pub trait EqList: PartialEqList {}

/// An alternative list whose alternatives are all [`PartialOrd`].
pub trait PartialOrdList: PartialEqList {
    /// # Safety
    ///
    /// As for [`PartialEqList::eq_at`].
    #[doc(hidden)]
    unsafe fn partial_cmp_at(
        a: *const Self::Storage,
        b: *const Self::Storage,
        index: usize,
    ) -> Option<Ordering>;
}

/// An alternative list whose alternatives are all [`Ord`].
pub trait OrdList: PartialOrdList + EqList {
    /// # Safety
    ///
    /// As for [`PartialEqList::eq_at`].
    #[doc(hidden)]
    unsafe fn cmp_at(a: *const Self::Storage, b: *const Self::Storage, index: usize) -> Ordering;
}

/// An alternative list whose alternatives are all [`Hash`].
pub trait HashList: AlternativeList {
    /// # Safety
    ///
    /// `index < COUNT` and `storage` holds a live alternative at `index`.
    #[doc(hidden)]
    unsafe fn hash_at<S: Hasher>(storage: *const Self::Storage, index: usize, state: &mut S);
}

/// An alternative list whose alternatives are all [`Debug`][fmt::Debug].
pub trait DebugList: AlternativeList {
    /// # Safety
    ///
    /// `index < COUNT` and `storage` holds a live alternative at `index`.
    #[doc(hidden)]
    unsafe fn fmt_at(
        storage: *const Self::Storage,
        index: usize,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result;
}

impl PartialEqList for () {
    unsafe fn eq_at(_a: *const Nil, _b: *const Nil, _index: usize) -> bool {
        alternative_out_of_range()
    }
}

impl EqList for () {}

impl PartialOrdList for () {
    unsafe fn partial_cmp_at(_a: *const Nil, _b: *const Nil, _index: usize) -> Option<Ordering> {
        alternative_out_of_range()
    }
}

impl OrdList for () {
    unsafe fn cmp_at(_a: *const Nil, _b: *const Nil, _index: usize) -> Ordering {
        alternative_out_of_range()
    }
}

impl HashList for () {
    unsafe fn hash_at<S: Hasher>(_storage: *const Nil, _index: usize, _state: &mut S) {
        alternative_out_of_range()
    }
}

impl DebugList for () {
    unsafe fn fmt_at(_storage: *const Nil, _index: usize, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        alternative_out_of_range()
    }
}

impl<H: PartialEq, Tail: PartialEqList> PartialEqList for (H, Tail) {
    #[inline]
    unsafe fn eq_at(a: *const Self::Storage, b: *const Self::Storage, index: usize) -> bool {
        if index == 0 {
            *Cons::head(a) == *Cons::head(b)
        } else {
            Tail::eq_at(Cons::tail(a), Cons::tail(b), index - 1)
        }
    }
}

impl<H: Eq, Tail: EqList> EqList for (H, Tail) {}

impl<H: PartialOrd, Tail: PartialOrdList> PartialOrdList for (H, Tail) {
    #[inline]
    unsafe fn partial_cmp_at(
        a: *const Self::Storage,
        b: *const Self::Storage,
        index: usize,
    ) -> Option<Ordering> {
        if index == 0 {
            (*Cons::head(a)).partial_cmp(&*Cons::head(b))
        } else {
            Tail::partial_cmp_at(Cons::tail(a), Cons::tail(b), index - 1)
        }
    }
}

impl<H: Ord, Tail: OrdList> OrdList for (H, Tail) {
    #[inline]
    unsafe fn cmp_at(a: *const Self::Storage, b: *const Self::Storage, index: usize) -> Ordering {
        if index == 0 {
            (*Cons::head(a)).cmp(&*Cons::head(b))
        } else {
            Tail::cmp_at(Cons::tail(a), Cons::tail(b), index - 1)
        }
    }
}

impl<H: Hash, Tail: HashList> HashList for (H, Tail) {
    #[inline]
    unsafe fn hash_at<S: Hasher>(storage: *const Self::Storage, index: usize, state: &mut S) {
        if index == 0 {
            (*Cons::head(storage)).hash(state)
        } else {
            Tail::hash_at(Cons::tail(storage), index - 1, state)
        }
    }
}

impl<H: fmt::Debug, Tail: DebugList> DebugList for (H, Tail) {
    unsafe fn fmt_at(
        storage: *const Self::Storage,
        index: usize,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if index == 0 {
            fmt::Debug::fmt(&*Cons::head(storage), f)
        } else {
            Tail::fmt_at(Cons::tail(storage), index - 1, f)
        }
    }
}

/// Valueless maps to 0, position `i` to `i + 1`.
#[inline(always)]
fn rank(index: usize) -> usize {
    index.wrapping_add(1)
}

impl<L: PartialEqList> PartialEq for Variant<L> {
    fn eq(&self, other: &Self) -> bool {
        match (self.index(), other.index()) {
            (a, b) if a != b => false,
            (VARIANT_NPOS, _) => true,
            // Safety: both hold alternative `a`.
            (a, _) => unsafe { L::eq_at(self.raw(), other.raw(), a) },
        }
    }
}

impl<L: EqList> Eq for Variant<L> {}

impl<L: PartialOrdList> PartialOrd for Variant<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.index(), other.index()) {
            (a, b) if a != b => Some(rank(a).cmp(&rank(b))),
            (VARIANT_NPOS, _) => Some(Ordering::Equal),
            // Safety: both hold alternative `a`.
            (a, _) => unsafe { L::partial_cmp_at(self.raw(), other.raw(), a) },
        }
    }
}

impl<L: OrdList> Ord for Variant<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.index(), other.index()) {
            (a, b) if a != b => rank(a).cmp(&rank(b)),
            (VARIANT_NPOS, _) => Ordering::Equal,
            // Safety: both hold alternative `a`.
            (a, _) => unsafe { L::cmp_at(self.raw(), other.raw(), a) },
        }
    }
}

impl<L: HashList> Hash for Variant<L> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        let index = self.index();
        index.hash(state);
        if index != VARIANT_NPOS {
            // Safety: the discriminant says `index` is alive.
            unsafe { L::hash_at(self.raw(), index, state) }
        }
    }
}

/// The held alternative, formatted with its own `Debug`.
struct Held<'a, L: AlternativeList>(&'a Variant<L>);

impl<L: DebugList> fmt::Debug for Held<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Safety: only built for a variant that holds a value.
        unsafe { L::fmt_at(self.0.raw(), self.0.index(), f) }
    }
}

struct Valueless;

impl fmt::Debug for Valueless {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<valueless>")
    }
}

/// Formats as `Variant(index, value)`, or `Variant(<valueless>)`.
///
/// ```
/// let v: oneof::Variant![u8, &str] = oneof::Variant::new("hi");
/// assert_eq!(format!("{:?}", v), "Variant(1, \"hi\")");
/// ```
impl<L: DebugList> fmt::Debug for Variant<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.index();
        let mut t = f.debug_tuple("Variant");
        if index == VARIANT_NPOS {
            t.field(&Valueless);
        } else {
            t.field(&index).field(&Held(self));
        }
        t.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::format;
    use std::hash::{Hash, Hasher};
    use std::string::String;

    use crate::index::U1;
    use crate::init::TryFromFn;
    use crate::Variant;

    type V = Variant![i32, String, i32];

    fn valueless() -> V {
        let mut v = V::in_place_index::<U1>(crate::init::MoveFrom(String::new()));
        let _ = v.try_emplace_at::<U1, _>(TryFromFn(|| Err::<String, ()>(())));
        v
    }

    fn hash_of(v: &V) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    fn at2(x: i32) -> V {
        V::in_place_index::<crate::index::U2>(crate::init::MoveFrom(x))
    }

    fn at0(x: i32) -> V {
        V::in_place_index::<crate::index::U0>(crate::init::MoveFrom(x))
    }

    #[test]
    fn equality() {
        assert_eq!(at0(1), at0(1));
        assert_ne!(at0(1), at0(2));
        // Same value, different position.
        assert_ne!(at0(1), at2(1));
        assert_eq!(valueless(), valueless());
        assert_ne!(valueless(), at0(0));
    }

    #[test]
    fn ordering() {
        let mut vs = [
            at2(0),
            V::new(String::from("b")),
            valueless(),
            at0(5),
            V::new(String::from("a")),
            at0(-5),
        ];
        vs.sort();
        assert!(vs[0].valueless_by_exception());
        assert_eq!(vs[1], at0(-5));
        assert_eq!(vs[2], at0(5));
        assert_eq!(vs[3], V::new(String::from("a")));
        assert_eq!(vs[4], V::new(String::from("b")));
        assert_eq!(vs[5], at2(0));
        assert_eq!(valueless().partial_cmp(&valueless()), Some(core::cmp::Ordering::Equal));
    }

    #[test]
    fn partial_ord_passes_through() {
        let a: Variant![f64, u8] = Variant::new(f64::NAN);
        let b: Variant![f64, u8] = Variant::new(1.0);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(b < Variant::new(0u8));
    }

    #[test]
    fn hash_includes_position() {
        assert_eq!(hash_of(&at0(3)), hash_of(&at0(3)));
        assert_ne!(hash_of(&at0(3)), hash_of(&at2(3)));
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", at2(4)), "Variant(2, 4)");
        assert_eq!(format!("{:?}", valueless()), "Variant(<valueless>)");
    }

    #[test]
    fn debug_pretty_prints_the_alternative() {
        let v: Variant![u8, (i32, i32)] = Variant::new((1, 2));
        assert_eq!(
            format!("{:#?}", v),
            "Variant(\n    1,\n    (\n        1,\n        2,\n    ),\n)"
        );
        assert_eq!(format!("{:#?}", valueless()), "Variant(\n    <valueless>,\n)");
    }
}
