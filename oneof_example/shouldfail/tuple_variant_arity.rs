#![allow(dead_code)]
use oneof::define_oneof;

#[define_oneof]
enum Pair {
    Both(u8, u16),
}

fn main() {}
