#![allow(dead_code)]
use oneof::define_oneof;

#[define_oneof]
#[derive(Debug)]
enum Flag {
    On(u8),
    Off,
}

fn main() {}
