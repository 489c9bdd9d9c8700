#![allow(dead_code)]
use oneof::define_oneof;

#[define_oneof(named)]
enum Unit {
    A,
}

fn main() {}
