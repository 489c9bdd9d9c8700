//! Single module with almost all `oneof` exports
//!
//! # Examples
//!
//! Import all into current scope:
//!
//! ```
//! use oneof::prelude::*;
//!
//! let v: Variant![Monostate, u8] = Variant::default();
//! assert_eq!(v.index(), 0);
//! ```
//!
//! Import all, named:
//!
//! ```
//! use oneof::prelude as o;
//!
//! let v = <o::Variant![u8, char]>::new('c');
//! assert_eq!(v.get::<char, _>(), Ok(&'c'));
//! ```

#[cfg(feature = "macro")]
pub use crate::define_oneof;
pub use crate::init::{
    CloneFrom, ConvertFrom, FromFn, Initializer, MoveFrom, TryFromFn, WithDefault,
};
pub use crate::{
    AccessError, Alts, AlternativeList, Monostate, Variant, Visitor, VisitorMut, VARIANT_NPOS,
};
