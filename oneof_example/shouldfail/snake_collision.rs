#![allow(dead_code, non_camel_case_types)]
use oneof::define_oneof;

#[define_oneof]
enum Pair {
    FooBar(u8),
    Foo_bar(u16),
}

fn main() {}
