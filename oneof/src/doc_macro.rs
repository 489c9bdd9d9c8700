/// Turns the crate-level doc comment into a doc string, rendering its
/// `svgbob` blocks when the `doc` feature is on.
#[cfg(feature = "doc")]
macro_rules! svgbob_doc {
    ($($t:tt)*) => (svgbobdoc::transform!($($t)*))
}

#[cfg(not(feature = "doc"))]
macro_rules! svgbob_doc {
    ($( #![doc = $d:literal] )*) => (core::concat!($( $d, '\n' ),*));
}

pub(crate) use svgbob_doc;
