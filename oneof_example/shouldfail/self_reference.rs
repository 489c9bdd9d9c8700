#![allow(dead_code)]
use oneof::define_oneof;

#[define_oneof]
enum Tree {
    Leaf(u8),
    Node(Box<Self>),
}

fn main() {}
