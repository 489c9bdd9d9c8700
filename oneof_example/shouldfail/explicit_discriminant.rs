#![allow(dead_code)]
use oneof::define_oneof;

#[define_oneof]
enum Switch {
    Off = 0,
    On,
}

fn main() {}
