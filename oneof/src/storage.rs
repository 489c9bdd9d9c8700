//! Raw storage shared by all alternatives of a list.
//!
//! An alternative list `(A, (B, (C, ())))` is stored in the union nest
//! `Cons<A, Cons<B, Cons<C, Nil>>>`. Every union is `#[repr(C)]`, so every
//! field sits at offset zero and the nest is exactly as large and as
//! aligned as its largest alternative requires.
//!
//! Nothing here knows which alternative is alive. The owner of the storage
//! tracks that with a discriminant and only projects into the storage once
//! the discriminant has been checked.

use core::convert::Infallible;
use core::mem::ManuallyDrop;
use core::ptr;

/// Terminator of the union nest. Never inhabited.
pub struct Nil(#[allow(dead_code)] Infallible);

/// One level of the union nest: either the alternative `H` or one of the
/// alternatives further down in `T`.
#[repr(C)]
pub union Cons<H, T> {
    head: ManuallyDrop<H>,
    tail: ManuallyDrop<T>,
}

impl<H, T> Cons<H, T> {
    /// Pointer to the head alternative.
    ///
    /// The pointer is derived through the union field rather than cast from
    /// the storage address, so it carries the provenance of the field it
    /// names. The memory behind it may be uninitialized.
    #[inline(always)]
    pub(crate) fn head(this: *const Self) -> *const H {
        // Safety: `addr_of!` only computes the place; nothing is read.
        unsafe { ptr::addr_of!((*this).head) }.cast::<H>()
    }

    #[inline(always)]
    pub(crate) fn head_mut(this: *mut Self) -> *mut H {
        unsafe { ptr::addr_of_mut!((*this).head) }.cast::<H>()
    }

    #[inline(always)]
    pub(crate) fn tail(this: *const Self) -> *const T {
        unsafe { ptr::addr_of!((*this).tail) }.cast::<T>()
    }

    #[inline(always)]
    pub(crate) fn tail_mut(this: *mut Self) -> *mut T {
        unsafe { ptr::addr_of_mut!((*this).tail) }.cast::<T>()
    }
}
