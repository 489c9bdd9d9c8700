/// An alternative with no data.
///
/// Putting it first in a list makes the variant default-constructible even
/// when none of the other alternatives are.
///
/// ```
/// use oneof::Monostate;
///
/// struct Socket(#[allow(dead_code)] u32);
///
/// let mut v: oneof::Variant![Monostate, Socket] = Default::default();
/// assert!(v.holds_alternative::<Monostate, _>());
/// v.set(Socket(3));
/// assert_eq!(v.index(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monostate;
