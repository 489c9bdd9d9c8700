#![allow(dead_code)]
use oneof::define_oneof;

#[define_oneof]
struct Point(u8, u8);

fn main() {}
