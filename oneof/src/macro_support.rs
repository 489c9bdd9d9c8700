#[inline(always)]
pub const fn max(x: usize, y: usize) -> usize {
    if x > y { x } else { y }
}

#[inline(never)]
#[cold]
pub fn alternative_out_of_range() -> ! {
    panic!("alternative index out of range")
}
