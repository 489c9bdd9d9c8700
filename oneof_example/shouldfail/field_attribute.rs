#![allow(dead_code)]
use oneof::define_oneof;

#[define_oneof]
enum Counter {
    Count(#[allow(unused)] u32),
}

fn main() {}
