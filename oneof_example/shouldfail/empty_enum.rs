#![allow(dead_code)]
use oneof::define_oneof;

#[define_oneof]
enum Never {}

fn main() {}
