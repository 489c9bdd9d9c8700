//! Dispatching a handler over whichever alternative is held.
//!
//! A visitor handles each alternative separately, keyed by its position, so
//! repeated types stay distinguishable:
//!
//! ```
//! use oneof::index::{U0, U1, U2};
//! use oneof::{MoveFrom, Visitor};
//!
//! struct Describe;
//!
//! impl Visitor<i32, U0, String> for Describe {
//!     fn visit(&mut self, x: &i32) -> String { format!("first {}", x) }
//! }
//! impl Visitor<i32, U1, String> for Describe {
//!     fn visit(&mut self, x: &i32) -> String { format!("second {}", x) }
//! }
//! impl Visitor<char, U2, String> for Describe {
//!     fn visit(&mut self, c: &char) -> String { format!("char {}", c) }
//! }
//!
//! let v = <oneof::Variant![i32, i32, char]>::in_place_index::<U1>(MoveFrom(7));
//! assert_eq!(v.visit(Describe).unwrap(), "second 7");
//! ```
//!
//! Every alternative needs a handler:
//!
//! ```compile_fail
//! use oneof::index::U0;
//! use oneof::Visitor;
//!
//! struct OnlyFirst;
//!
//! impl Visitor<i32, U0, ()> for OnlyFirst {
//!     fn visit(&mut self, _: &i32) {}
//! }
//!
//! let v: oneof::Variant![i32, char] = oneof::Variant::new(1);
//! let _ = v.visit(OnlyFirst);
//! ```

use crate::access::AccessError;
use crate::index::{Index, UInt, UTerm};
use crate::list::AlternativeList;
use crate::macro_support::alternative_out_of_range;
use crate::storage::{Cons, Nil};
use crate::variant::{Variant, VARIANT_NPOS};

/// Handler for the alternative `T` at position `I`, producing an `R`.
pub trait Visitor<T, I: Index, R> {
    fn visit(&mut self, value: &T) -> R;
}

/// Handler for mutable access to the alternative `T` at position `I`.
pub trait VisitorMut<T, I: Index, R> {
    fn visit_mut(&mut self, value: &mut T) -> R;
}

impl<T, I: Index, R, V: Visitor<T, I, R> + ?Sized> Visitor<T, I, R> for &mut V {
    #[inline]
    fn visit(&mut self, value: &T) -> R {
        (**self).visit(value)
    }
}

impl<T, I: Index, R, V: VisitorMut<T, I, R> + ?Sized> VisitorMut<T, I, R> for &mut V {
    #[inline]
    fn visit_mut(&mut self, value: &mut T) -> R {
        (**self).visit_mut(value)
    }
}

/// The list `Self`, from position `I` on, can be visited by `V`.
pub trait VisitList<V, R, I: Index = UTerm>: AlternativeList {
    /// # Safety
    ///
    /// `index < COUNT` and `storage` holds a live alternative at `index`.
    #[doc(hidden)]
    unsafe fn visit_at(storage: *const Self::Storage, index: usize, visitor: &mut V) -> R;
}

/// The list `Self`, from position `I` on, can be visited mutably by `V`.
pub trait VisitMutList<V, R, I: Index = UTerm>: AlternativeList {
    /// # Safety
    ///
    /// `index < COUNT` and `storage` holds a live alternative at `index`.
    #[doc(hidden)]
    unsafe fn visit_mut_at(storage: *mut Self::Storage, index: usize, visitor: &mut V) -> R;
}

impl<V, R, I: Index> VisitList<V, R, I> for () {
    unsafe fn visit_at(_storage: *const Nil, _index: usize, _visitor: &mut V) -> R {
        alternative_out_of_range()
    }
}

impl<V, R, I: Index> VisitMutList<V, R, I> for () {
    unsafe fn visit_mut_at(_storage: *mut Nil, _index: usize, _visitor: &mut V) -> R {
        alternative_out_of_range()
    }
}

impl<H, Tail, V, R, I: Index> VisitList<V, R, I> for (H, Tail)
where
    Tail: VisitList<V, R, UInt<I>>,
    V: Visitor<H, I, R>,
{
    #[inline]
    unsafe fn visit_at(storage: *const Self::Storage, index: usize, visitor: &mut V) -> R {
        if index == 0 {
            visitor.visit(&*Cons::head(storage))
        } else {
            Tail::visit_at(Cons::tail(storage), index - 1, visitor)
        }
    }
}

impl<H, Tail, V, R, I: Index> VisitMutList<V, R, I> for (H, Tail)
where
    Tail: VisitMutList<V, R, UInt<I>>,
    V: VisitorMut<H, I, R>,
{
    #[inline]
    unsafe fn visit_mut_at(storage: *mut Self::Storage, index: usize, visitor: &mut V) -> R {
        if index == 0 {
            visitor.visit_mut(&mut *Cons::head_mut(storage))
        } else {
            Tail::visit_mut_at(Cons::tail_mut(storage), index - 1, visitor)
        }
    }
}

impl<L: AlternativeList> Variant<L> {
    /// Calls the handler of `visitor` for the held alternative.
    ///
    /// Fails with [`AccessError::Valueless`] when there is nothing to visit.
    pub fn visit<V, R>(&self, mut visitor: V) -> Result<R, AccessError>
    where
        L: VisitList<V, R>,
    {
        match self.index() {
            VARIANT_NPOS => Err(AccessError::Valueless),
            // Safety: the discriminant says `index` is alive.
            index => Ok(unsafe { L::visit_at(self.raw(), index, &mut visitor) }),
        }
    }

    /// Calls the mutable handler of `visitor` for the held alternative.
    pub fn visit_mut<V, R>(&mut self, mut visitor: V) -> Result<R, AccessError>
    where
        L: VisitMutList<V, R>,
    {
        match self.index() {
            VARIANT_NPOS => Err(AccessError::Valueless),
            // Safety: the discriminant says `index` is alive.
            index => Ok(unsafe { L::visit_mut_at(self.raw_mut(), index, &mut visitor) }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::string::String;

    use super::*;
    use crate::index::{U0, U1, U2};
    use crate::init::{MoveFrom, TryFromFn};
    use crate::Variant;

    type V = Variant![u8, String, u8];

    /// Sums up how many bytes each alternative accounts for.
    #[derive(Default)]
    struct Bytes {
        calls: usize,
    }

    impl Visitor<u8, U0, usize> for Bytes {
        fn visit(&mut self, _: &u8) -> usize {
            self.calls += 1;
            1
        }
    }

    impl Visitor<String, U1, usize> for Bytes {
        fn visit(&mut self, s: &String) -> usize {
            self.calls += 1;
            s.len()
        }
    }

    impl Visitor<u8, U2, usize> for Bytes {
        fn visit(&mut self, x: &u8) -> usize {
            self.calls += 1;
            *x as usize
        }
    }

    struct Bump;

    impl VisitorMut<u8, U0, ()> for Bump {
        fn visit_mut(&mut self, x: &mut u8) {
            *x += 1;
        }
    }

    impl VisitorMut<String, U1, ()> for Bump {
        fn visit_mut(&mut self, s: &mut String) {
            s.push('+');
        }
    }

    impl VisitorMut<u8, U2, ()> for Bump {
        fn visit_mut(&mut self, x: &mut u8) {
            *x += 2;
        }
    }

    #[test]
    fn visit_dispatches_by_position() {
        let mut bytes = Bytes::default();
        assert_eq!(V::in_place_index::<U0>(MoveFrom(9)).visit(&mut bytes), Ok(1));
        assert_eq!(V::new(String::from("abc")).visit(&mut bytes), Ok(3));
        assert_eq!(V::in_place_index::<U2>(MoveFrom(9)).visit(&mut bytes), Ok(9));
        assert_eq!(bytes.calls, 3);
    }

    #[test]
    fn visit_mut_updates_in_place() {
        let mut v = V::in_place_index::<U2>(MoveFrom(1));
        v.visit_mut(Bump).unwrap();
        assert_eq!(v.try_get_at::<U2>(), Some(&3));

        v.emplace::<String, _>(MoveFrom(String::from("a")));
        v.visit_mut(Bump).unwrap();
        assert_eq!(v.try_get::<String, _>().map(String::as_str), Some("a+"));
    }

    #[test]
    fn valueless_cannot_be_visited() {
        let mut v = V::new(String::new());
        let _ = v.try_emplace_at::<U0, _>(TryFromFn(|| Err::<u8, ()>(())));
        assert_eq!(v.visit(Bytes::default()), Err(AccessError::Valueless));
        assert_eq!(v.visit_mut(Bump), Err(AccessError::Valueless));
    }
}
