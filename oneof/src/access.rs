//! Checked access to the held alternative.
//!
//! There is one canonical accessor, [`Variant::try_get_at`], and its mutable
//! twin. Everything here is a thin layer over those two: by-type forms
//! resolve the position with [`Locate`], `get` forms turn a miss into an
//! [`AccessError`], and the free functions only use public methods.
//!
//! By-type access needs the type to be listed once:
//!
//! ```compile_fail
//! use oneof::index::U1;
//!
//! let v = <oneof::Variant![i32, i32, i32]>::in_place_index::<U1>(oneof::MoveFrom(0));
//! let _ = v.get::<i32, _>();
//! ```

use core::fmt;

use crate::index::Index;
use crate::list::{AlternativeList, Locate, Select};
use crate::variant::{Variant, VARIANT_NPOS};

/// Failure of a checked access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessError {
    /// The variant holds a different alternative.
    WrongAlternative,
    /// The variant holds no value.
    Valueless,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccessError::WrongAlternative => "variant holds a different alternative",
            AccessError::Valueless => "variant is valueless",
        })
    }
}

impl core::error::Error for AccessError {}

impl<L: AlternativeList> Variant<L> {
    #[inline]
    fn miss(&self) -> AccessError {
        if self.index() == VARIANT_NPOS {
            AccessError::Valueless
        } else {
            AccessError::WrongAlternative
        }
    }

    /// Reference to the alternative of type `T`, if held.
    #[inline]
    pub fn try_get<T, I: Index>(&self) -> Option<&T>
    where
        L: Locate<T, I>,
    {
        self.try_get_at::<I>()
    }

    /// Mutable reference to the alternative of type `T`, if held.
    #[inline]
    pub fn try_get_mut<T, I: Index>(&mut self) -> Option<&mut T>
    where
        L: Locate<T, I>,
    {
        self.try_get_at_mut::<I>()
    }

    /// Reference to the alternative at position `I`.
    #[inline]
    pub fn get_at<I: Index>(&self) -> Result<&<L as Select<I>>::Alt, AccessError>
    where
        L: Select<I>,
    {
        self.try_get_at::<I>().ok_or_else(|| self.miss())
    }

    /// Mutable reference to the alternative at position `I`.
    #[inline]
    pub fn get_at_mut<I: Index>(&mut self) -> Result<&mut <L as Select<I>>::Alt, AccessError>
    where
        L: Select<I>,
    {
        let miss = self.miss();
        self.try_get_at_mut::<I>().ok_or(miss)
    }

    /// Reference to the alternative of type `T`.
    #[inline]
    pub fn get<T, I: Index>(&self) -> Result<&T, AccessError>
    where
        L: Locate<T, I>,
    {
        self.get_at::<I>()
    }

    /// Mutable reference to the alternative of type `T`.
    ///
    /// ```
    /// let mut v: oneof::Variant![u8, Vec<u8>] = oneof::Variant::new(vec![1]);
    /// v.get_mut::<Vec<u8>, _>().unwrap().push(2);
    /// assert_eq!(v.get::<Vec<u8>, _>().unwrap(), &[1, 2]);
    /// ```
    #[inline]
    pub fn get_mut<T, I: Index>(&mut self) -> Result<&mut T, AccessError>
    where
        L: Locate<T, I>,
    {
        self.get_at_mut::<I>()
    }

    /// Moves the alternative of type `T` out, or gives the variant back.
    #[inline]
    pub fn into_inner<T, I: Index>(self) -> Result<T, Self>
    where
        L: Locate<T, I>,
    {
        self.into_at::<I>()
    }

    /// Moves the alternative at position `I` out, leaving its default value
    /// behind. The discriminant does not change.
    ///
    /// ```
    /// use oneof::index::U1;
    ///
    /// let mut v: oneof::Variant![u8, String] = oneof::Variant::new(String::from("x"));
    /// assert_eq!(v.take_at::<U1>().unwrap(), "x");
    /// assert_eq!(v.index(), 1);
    /// assert_eq!(v.get_at::<U1>().unwrap(), "");
    /// ```
    #[inline]
    pub fn take_at<I: Index>(&mut self) -> Result<<L as Select<I>>::Alt, AccessError>
    where
        L: Select<I>,
        <L as Select<I>>::Alt: Default,
    {
        self.get_at_mut::<I>().map(core::mem::take)
    }

    /// Moves the alternative of type `T` out, leaving its default value
    /// behind.
    #[inline]
    pub fn take<T: Default, I: Index>(&mut self) -> Result<T, AccessError>
    where
        L: Locate<T, I>,
    {
        self.take_at::<I>()
    }
}

/// Reference to the alternative at position `I`, if held.
#[inline]
pub fn get_if<I: Index, L: Select<I>>(v: &Variant<L>) -> Option<&L::Alt> {
    v.try_get_at::<I>()
}

/// Mutable reference to the alternative at position `I`, if held.
#[inline]
pub fn get_if_mut<I: Index, L: Select<I>>(v: &mut Variant<L>) -> Option<&mut L::Alt> {
    v.try_get_at_mut::<I>()
}

/// Reference to the alternative at position `I`.
///
/// ```
/// use oneof::index::{U0, U1};
/// use oneof::{get, AccessError};
///
/// let v: oneof::Variant![char, i32] = oneof::Variant::new(1);
/// assert_eq!(get::<U1, _>(&v), Ok(&1));
/// assert_eq!(get::<U0, _>(&v), Err(AccessError::WrongAlternative));
/// ```
#[inline]
pub fn get<I: Index, L: Select<I>>(v: &Variant<L>) -> Result<&L::Alt, AccessError> {
    v.get_at::<I>()
}

/// Mutable reference to the alternative at position `I`.
#[inline]
pub fn get_mut<I: Index, L: Select<I>>(v: &mut Variant<L>) -> Result<&mut L::Alt, AccessError> {
    v.get_at_mut::<I>()
}

/// Whether `v` holds the alternative of type `T`.
#[inline]
pub fn holds_alternative<T, I: Index, L: Locate<T, I>>(v: &Variant<L>) -> bool {
    v.holds_alternative::<T, I>()
}

/// Number of alternatives in the list `L`.
///
/// ```
/// assert_eq!(oneof::variant_size::<oneof::Alts![u8, u16, u32]>(), 3);
/// ```
#[inline]
pub const fn variant_size<L: AlternativeList>() -> usize {
    L::COUNT
}
