#![allow(dead_code)]
use oneof::define_oneof;

#[define_oneof]
enum Either<T> {
    Left(T),
    Right(u8),
}

fn main() {}
