#![doc = crate::doc_macro::svgbob_doc!(
//! # `oneof`
//! A tagged union over a closed list of alternative types.
//!
//! 1. [Summary](#summary)
//! 1. [Examples](#examples)
//! 1. [Memory layout](#memory-layout)
//! 1. [Failure and the valueless state](#failure-and-the-valueless-state)
//! 1. [Feature flags](#feature-flags)
//!
//! # Summary
//!
//! A [`Variant<L>`] holds exactly one value out of the list of alternative
//! types `L`, and remembers which one. The list is fixed at compile time and
//! may repeat a type: `Variant![i32, i32, String]` has three alternatives, two
//! of which happen to be `i32`.
//!
//! Alternatives are addressed either by position ([`index::U0`],
//! [`index::U1`], ...) or by type. Positions always work; a type can only be
//! used when it appears once in the list, and anything else is rejected at
//! compile time rather than at runtime.
//!
//! Besides the container itself the crate provides placement
//! [initializers](crate::init), checked [access](crate::access), copy
//! construction and assignment, comparisons, hashing, and a position-keyed
//! [visitor](crate::visit). With the `macro` feature,
//! [`#[define_oneof]`][crate::define_oneof] turns an `enum`-like declaration
//! into a named variant type with constructors and a closure-based visitor.
//!
//! # Examples
//!
//! ```
//! use oneof::prelude::*;
//! use oneof::index::{U0, U1, U2};
//!
//! type Token = Variant![i64, i64, String];
//!
//! // Positions disambiguate the two `i64`s.
//! let mut t = Token::in_place_index::<U1>(MoveFrom(42));
//! assert_eq!(t.index(), 1);
//! assert_eq!(t.get_at::<U1>(), Ok(&42));
//! assert_eq!(t.get_at::<U0>(), Err(AccessError::WrongAlternative));
//!
//! // `String` is listed once, so it can be used by type.
//! t.set(String::from("ident"));
//! assert!(t.holds_alternative::<String, _>());
//! assert_eq!(t.get::<String, _>().map(String::as_str), Ok("ident"));
//!
//! // Construct a new alternative in place.
//! t.emplace_at::<U2>(FromFn(|| "ab".repeat(3)));
//! assert_eq!(t.try_get::<String, _>().map(String::len), Some(6));
//!
//! let u = t.clone();
//! assert_eq!(t, u);
//! ```
//!
//! # Memory layout
//!
//! A `Variant![u8, u64, [u8; 12]]` stores all alternatives in the same
//! union, followed by the discriminant:
//!
//! ```svgbob
//! "Variant![u8, u64, [u8; 12]]"
//! +--------------------------------------------+-------------+
//! | "storage: largest alternative (16 bytes)"  | "index"     |
//! +--------------------------------------------+-------------+
//!   |
//!   +-- "u8"        +----+
//!   |               |    |
//!   |               +----+
//!   +-- "u64"       +----------+
//!   |               |          |
//!   |               +----------+
//!   '-- "[u8; 12]"  +----------------+
//!                   |                |
//!                   +----------------+
//! ```
//!
//! The storage is sized and aligned for the largest alternative, so the
//! variant never allocates.
//!
//! # Failure and the valueless state
//!
//! Replacing the held alternative first destroys the old one and then
//! constructs the new one in place. If that construction fails, either by
//! returning an error from a fallible [`Initializer`] or by panicking, there
//! is no old value to go back to: the variant is left *valueless*.
//!
//! ```
//! use oneof::prelude::*;
//! use oneof::index::U1;
//!
//! let mut v: Variant![String, u32] = Variant::new(String::from("old"));
//! assert!(v.try_emplace_at::<U1, _>(TryFromFn(|| "x".parse::<u32>())).is_err());
//! assert!(v.valueless_by_exception());
//! assert_eq!(v.index(), oneof::VARIANT_NPOS);
//! assert_eq!(v.get_at::<U1>(), Err(AccessError::Valueless));
//! ```
//!
//! A valueless variant can still be assigned, emplaced, swapped, cloned,
//! compared and dropped.
//!
//! # Feature flags
//!
//! This crate has no *required* dependencies. The following feature flags exist, which can turn
//! on some dependencies.
//!
//! * `macro`. Enables [`#[define_oneof]`][crate::define_oneof]. Adds a dependency on `oneof_macro`, `syn` and `quote`.
//! * `doc`. Renders the diagrams in this documentation. Adds a dependency on `svgbobdoc`.
//!
)]
#![no_std]

#[cfg(test)]
extern crate std;

pub mod access;
pub mod clone;
pub mod cmp;
pub mod index;
pub mod init;
pub mod list;
#[doc(hidden)]
pub mod macro_support;
pub mod prelude;
pub mod storage;
pub mod variant;
pub mod visit;

mod doc_macro;
mod monostate;

#[cfg(test)]
mod test_type;

pub use access::{get, get_if, get_if_mut, get_mut, holds_alternative, variant_size, AccessError};
pub use init::{CloneFrom, ConvertFrom, FromFn, Initializer, MoveFrom, TryFromFn, WithDefault};
pub use list::{AlternativeList, Convertible, Locate, Select};
pub use monostate::Monostate;
#[cfg(feature = "macro")]
pub use oneof_macro::define_oneof;
pub use variant::{swap, Variant, VARIANT_NPOS};
pub use visit::{Visitor, VisitorMut};
