//! Solutions to Advent of Code 2017 puzzles, and the code they share.

pub mod captcha;

pub use crate::captcha::{checksum, solve, CaptchaError, Digits, Rule, Sums};
