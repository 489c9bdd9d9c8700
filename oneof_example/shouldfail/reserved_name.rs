#![allow(dead_code)]
use oneof::define_oneof;

#[define_oneof]
enum Scope {
    Local(u8),
    Crate(u8),
}

fn main() {}
