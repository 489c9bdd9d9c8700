#![allow(dead_code)]
use oneof::define_oneof;

#[define_oneof]
enum Guarded
where
    u8: Copy,
{
    A(u8),
}

fn main() {}
