#![allow(dead_code)]
//! Example of the code generated by `#[define_oneof]`.
use oneof::prelude::*;

#[define_oneof]
/// A scalar value of a small configuration language.
pub enum Scalar {
    /// No value.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// A UTF-8 string.
    Text(String),
}

#[define_oneof]
/// A reading in one of two units. Both units share a representation, so only
/// the position tells them apart.
pub enum Temperature {
    Celsius(f64),
    Fahrenheit(f64),
}

/// Field types named like the items `#[define_oneof]` generates.
pub mod clashing {
    use oneof::define_oneof;

    #[derive(Debug, PartialEq)]
    pub struct Match(pub u8);

    #[derive(Debug, PartialEq)]
    pub struct Alternatives;

    #[derive(Debug, PartialEq)]
    pub struct MatchOutput(pub i32);

    #[define_oneof]
    pub enum Shape {
        Tagged(Match),
        Listed(Alternatives),
        Output(MatchOutput),
        Plain(u8),
    }
}

/// Converts any reading to degrees Celsius.
pub fn to_celsius(t: &Temperature) -> f64 {
    t.visit(temperature::Match {
        celsius: |c: &f64| *c,
        fahrenheit: |f: &f64| (*f - 32.0) * 5.0 / 9.0,
    })
    .unwrap_or(f64::NAN)
}
