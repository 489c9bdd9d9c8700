//! Copy construction and copy assignment.

use core::ptr;

use crate::list::AlternativeList;
use crate::macro_support::alternative_out_of_range;
use crate::storage::{Cons, Nil};
use crate::variant::{Variant, VARIANT_NPOS};

/// An alternative list whose alternatives are all [`Clone`].
pub trait CloneList: AlternativeList {
    /// Writes a clone of the alternative at `index` of `src` into `dst`.
    ///
    /// # Safety
    ///
    /// `index < COUNT`, `src` holds a live alternative at `index` and `dst`
    /// holds no live alternative.
    #[doc(hidden)]
    unsafe fn clone_at(src: *const Self::Storage, dst: *mut Self::Storage, index: usize);

    /// `Clone::clone_from` on the alternatives at `index`.
    ///
    /// # Safety
    ///
    /// `index < COUNT` and both storages hold a live alternative at `index`.
    #[doc(hidden)]
    unsafe fn clone_from_at(dst: *mut Self::Storage, src: *const Self::Storage, index: usize);
}

impl CloneList for () {
    unsafe fn clone_at(_src: *const Nil, _dst: *mut Nil, _index: usize) {
        alternative_out_of_range()
    }

    unsafe fn clone_from_at(_dst: *mut Nil, _src: *const Nil, _index: usize) {
        alternative_out_of_range()
    }
}

impl<H: Clone, Tail: CloneList> CloneList for (H, Tail) {
    #[inline]
    unsafe fn clone_at(src: *const Self::Storage, dst: *mut Self::Storage, index: usize) {
        if index == 0 {
            ptr::write(Cons::head_mut(dst), (*Cons::head(src)).clone());
        } else {
            Tail::clone_at(Cons::tail(src), Cons::tail_mut(dst), index - 1);
        }
    }

    #[inline]
    unsafe fn clone_from_at(dst: *mut Self::Storage, src: *const Self::Storage, index: usize) {
        if index == 0 {
            (*Cons::head_mut(dst)).clone_from(&*Cons::head(src));
        } else {
            Tail::clone_from_at(Cons::tail_mut(dst), Cons::tail(src), index - 1);
        }
    }
}

/// Clones the held alternative. Cloning a valueless variant gives a
/// valueless variant.
///
/// ```
/// use std::rc::Rc;
///
/// let rc = Rc::new(0);
/// let v: oneof::Variant![u8, Rc<i32>] = oneof::Variant::new(rc.clone());
/// let w = v.clone();
/// assert_eq!(Rc::strong_count(&rc), 3);
/// drop((v, w));
/// assert_eq!(Rc::strong_count(&rc), 1);
/// ```
impl<L: CloneList> Clone for Variant<L> {
    fn clone(&self) -> Self {
        let mut out = Variant::valueless();
        let index = self.index();
        if index != VARIANT_NPOS {
            // Safety: `index` is alive in `self` and `out` is empty. The
            // discriminant is only set once the clone is written, so a
            // panicking clone drops nothing.
            unsafe {
                L::clone_at(self.raw(), out.raw_mut(), index);
                out.set_index(index);
            }
        }
        out
    }

    /// Copy assignment.
    ///
    /// Holding the same alternative as `source`, the alternative's own
    /// `clone_from` runs in place. Otherwise `source` is cloned first and the
    /// clone moved in, so a panicking clone leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        match (self.index(), source.index()) {
            (VARIANT_NPOS, VARIANT_NPOS) => {}
            (_, VARIANT_NPOS) => self.destroy(),
            (dst, src) if dst == src => {
                // Safety: both hold `src`.
                unsafe { L::clone_from_at(self.raw_mut(), source.raw(), src) }
            }
            _ => *self = source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;
    use std::string::String;

    use crate::index::{U0, U1};
    use crate::init::TryFromFn;
    use crate::test_type::{Counters, PanicOnClone, Tracked};
    use crate::Variant;

    #[test]
    fn copies_are_independent() {
        let rc = Rc::new(String::from("shared"));
        let v: Variant![u8, Rc<String>] = Variant::new(rc.clone());
        assert_eq!(Rc::strong_count(&rc), 2);

        let copies: std::vec::Vec<_> = (0..3).map(|_| v.clone()).collect();
        assert_eq!(Rc::strong_count(&rc), 5);
        drop(copies);
        assert_eq!(Rc::strong_count(&rc), 2);
        drop(v);
        assert_eq!(Rc::strong_count(&rc), 1);
    }

    #[test]
    fn clone_of_valueless_is_valueless() {
        let mut v: Variant![u8, u32] = Variant::new(0u8);
        let _ = v.try_emplace_at::<U1, _>(TryFromFn(|| "-".parse::<u32>()));
        assert!(v.clone().valueless_by_exception());
    }

    #[test]
    fn clone_from_same_alternative_does_not_destroy() {
        let a = Counters::new();
        let b = Counters::new();
        let mut dst: Variant![Tracked, u8] = Variant::new(Tracked::new(1, &a));
        let src: Variant![Tracked, u8] = Variant::new(Tracked::new(2, &b));
        dst.clone_from(&src);
        assert_eq!(a.drops(), 0);
        assert_eq!(b.clone_froms(), 1);
        assert_eq!(b.clones(), 0);
        assert_eq!(dst.try_get_at::<U0>().map(|t| t.value), Some(2));
    }

    #[test]
    fn clone_from_other_alternative_rebuilds() {
        let a = Counters::new();
        let mut dst: Variant![Tracked, u8] = Variant::new(3u8);
        let src: Variant![Tracked, u8] = Variant::new(Tracked::new(7, &a));
        dst.clone_from(&src);
        assert_eq!(a.clones(), 1);
        assert_eq!(dst.try_get_at::<U0>(), src.try_get_at::<U0>());

        let empty: Variant![Tracked, u8] = {
            let mut e = Variant::new(0u8);
            let _ = e.try_emplace_at::<U1, _>(TryFromFn(|| Err::<u8, ()>(())));
            e
        };
        dst.clone_from(&empty);
        assert!(dst.valueless_by_exception());
        assert_eq!(a.drops(), 1);
    }

    #[test]
    fn panicking_clone_keeps_target() {
        let mut dst: Variant![PanicOnClone, u8] = Variant::new(5u8);
        let src: Variant![PanicOnClone, u8] = Variant::new(PanicOnClone(1));
        let r = catch_unwind(AssertUnwindSafe(|| dst.clone_from(&src)));
        assert!(r.is_err());
        assert_eq!(dst.try_get_at::<U1>(), Some(&5));

        let r = catch_unwind(AssertUnwindSafe(|| src.clone()));
        assert!(r.is_err());
    }
}
