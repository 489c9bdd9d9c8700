//! An [`Initializer<T>`] is an object that knows how to construct a `T`
//! directly into a given slot. [`Variant`][crate::Variant] uses initializers
//! for in-place construction and for emplace, so the new alternative is
//! written straight into the variant's storage.
//!
//! Constructor arguments are forwarded by capturing them:
//!
//! ```
//! use oneof::prelude::*;
//! use oneof::index::U1;
//!
//! let v = <Variant![u8, String]>::in_place_index::<U1>(FromFn(|| "ab".repeat(2)));
//! assert_eq!(v.get_at::<U1>().unwrap(), "abab");
//! ```
//!
//! Fallible constructors report their error through [`Initializer::Error`]:
//!
//! ```
//! use oneof::prelude::*;
//!
//! let mut v: Variant![u8, u32] = Variant::new(1u8);
//! let r = v.try_emplace::<u32, _, _>(TryFromFn(|| "12x".parse::<u32>()));
//! assert!(r.is_err());
//! assert!(v.valueless_by_exception());
//! ```

use core::convert::Infallible;
use core::ptr::NonNull;

/// A type that knows how to construct a `T` in place.
///
/// # Examples
///
/// An initializer that builds a vector of squares:
///
/// ```
/// use oneof::prelude::*;
/// use oneof::index::U1;
/// use core::convert::Infallible;
/// use core::ptr::NonNull;
///
/// struct Squares(usize);
///
/// unsafe impl Initializer<Vec<usize>> for Squares {
///     type Error = Infallible;
///
///     unsafe fn initialize(self, dst: NonNull<Vec<usize>>) -> Result<(), Infallible> {
///         dst.as_ptr().write((0..self.0).map(|i| i * i).collect());
///         Ok(())
///     }
/// }
///
/// let v = <Variant![u8, Vec<usize>]>::in_place_index::<U1>(Squares(4));
/// assert_eq!(v.get_at::<U1>().unwrap(), &[0, 1, 4, 9]);
/// ```
///
/// # Safety
///
/// An implementor of this trait is required to ensure:
///  * When `initialize(dst)` returns `Ok(())`, `dst` holds a valid `T`.
///  * When `initialize(dst)` returns `Err(_)` or unwinds, `dst` holds no live
///    value: nothing written into it needs dropping.
pub unsafe trait Initializer<T> {
    /// Error reported when construction fails.
    type Error;

    /// Populates the destination pointer.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes and properly aligned for `T`, and must
    /// not hold a live value that would be overwritten.
    unsafe fn initialize(self, dst: NonNull<T>) -> Result<(), Self::Error>;
}

/// Moves an already constructed value into place.
///
/// ```
/// use oneof::prelude::*;
///
/// let v = <Variant![u8, char]>::in_place_type::<char, _>(MoveFrom('x'));
/// assert_eq!(v.get::<char, _>(), Ok(&'x'));
/// ```
pub struct MoveFrom<T>(pub T);

unsafe impl<T> Initializer<T> for MoveFrom<T> {
    type Error = Infallible;

    #[inline]
    unsafe fn initialize(self, dst: NonNull<T>) -> Result<(), Infallible> {
        dst.as_ptr().write(self.0);
        Ok(())
    }
}

/// Constructs the value by calling a closure. A panic in the closure
/// propagates to the caller.
pub struct FromFn<F>(pub F);

unsafe impl<T, F: FnOnce() -> T> Initializer<T> for FromFn<F> {
    type Error = Infallible;

    #[inline]
    unsafe fn initialize(self, dst: NonNull<T>) -> Result<(), Infallible> {
        dst.as_ptr().write((self.0)());
        Ok(())
    }
}

/// Constructs the value by calling a fallible closure.
pub struct TryFromFn<F>(pub F);

unsafe impl<T, E, F: FnOnce() -> Result<T, E>> Initializer<T> for TryFromFn<F> {
    type Error = E;

    #[inline]
    unsafe fn initialize(self, dst: NonNull<T>) -> Result<(), E> {
        dst.as_ptr().write((self.0)()?);
        Ok(())
    }
}

/// Constructs the value by cloning a borrowed one.
///
/// ```
/// use oneof::prelude::*;
///
/// let s = String::from("hello");
/// let v = <Variant![u8, String]>::in_place_type::<String, _>(CloneFrom(&s));
/// assert_eq!(v.get::<String, _>().unwrap(), &s);
/// ```
pub struct CloneFrom<'a, T>(pub &'a T);

unsafe impl<'a, T: Clone> Initializer<T> for CloneFrom<'a, T> {
    type Error = Infallible;

    #[inline]
    unsafe fn initialize(self, dst: NonNull<T>) -> Result<(), Infallible> {
        dst.as_ptr().write(self.0.clone());
        Ok(())
    }
}

/// Constructs the value with [`From`].
///
/// ```
/// use oneof::prelude::*;
/// use oneof::index::U1;
///
/// let v = <Variant![u8, u64]>::in_place_index::<U1>(ConvertFrom(7u16));
/// assert_eq!(v.get_at::<U1>(), Ok(&7u64));
/// ```
pub struct ConvertFrom<V>(pub V);

unsafe impl<T: From<V>, V> Initializer<T> for ConvertFrom<V> {
    type Error = Infallible;

    #[inline]
    unsafe fn initialize(self, dst: NonNull<T>) -> Result<(), Infallible> {
        dst.as_ptr().write(T::from(self.0));
        Ok(())
    }
}

/// Constructs the value with [`Default`].
pub struct WithDefault;

unsafe impl<T: Default> Initializer<T> for WithDefault {
    type Error = Infallible;

    #[inline]
    unsafe fn initialize(self, dst: NonNull<T>) -> Result<(), Infallible> {
        dst.as_ptr().write(T::default());
        Ok(())
    }
}
