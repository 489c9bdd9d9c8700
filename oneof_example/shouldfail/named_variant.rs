#![allow(dead_code)]
use oneof::define_oneof;

#[define_oneof]
enum Shape {
    Circle(f64),
    Rect { w: f64, h: f64 },
}

fn main() {}
