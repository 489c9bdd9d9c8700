#![allow(dead_code)]

mod inner {
    #[oneof::define_oneof]
    pub(in crate::inner) enum Odd {
        A(u8),
    }
}

fn main() {}
