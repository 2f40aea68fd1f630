//! The "inverse captcha": sum the digits of a circular sequence that match
//! the digit some fixed distance further around.

use failure::{Error, Fail};
use itertools::Itertools;
use log::trace;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Fail, Eq, PartialEq)]
pub enum CaptchaError {
    #[fail(display = "no digits supplied")]
    MissingInput,

    #[fail(display = "not a decimal digit: {:?} at position {}", ch, position)]
    Format { ch: char, position: usize },
}

/// A non-empty sequence of decimal digits, treated as circular: the digit
/// after the last one is the first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Digits(Vec<u8>);

impl Digits {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().cloned()
    }

    pub fn checksum(&self, rule: Rule) -> u64 {
        checksum(self, rule.offset(self.len()))
    }

    pub fn sums(&self) -> Sums {
        Sums {
            next: self.checksum(Rule::Next),
            halfway: self.checksum(Rule::Halfway),
        }
    }
}

impl FromStr for Digits {
    type Err = CaptchaError;
    fn from_str(s: &str) -> Result<Digits, CaptchaError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CaptchaError::MissingInput);
        }

        s.chars()
            .enumerate()
            .map(|(position, ch)| match ch.to_digit(10) {
                Some(d) => Ok(d as u8),
                None => Err(CaptchaError::Format { ch, position }),
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Digits)
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(""))
    }
}

/// Which partner each digit is compared against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rule {
    /// The very next digit.
    Next,
    /// The digit halfway around the circle. For an odd-length sequence this
    /// rounds down.
    Halfway,
}

impl Rule {
    pub const ALL: [Rule; 2] = [Rule::Next, Rule::Halfway];

    pub fn offset(self, len: usize) -> usize {
        match self {
            Rule::Next => 1,
            Rule::Halfway => len / 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rule::Next => "P1",
            Rule::Halfway => "P2",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Sums {
    pub next: u64,
    pub halfway: u64,
}

impl Sums {
    pub fn get(&self, rule: Rule) -> u64 {
        match rule {
            Rule::Next => self.next,
            Rule::Halfway => self.halfway,
        }
    }
}

/// Return the sum of every digit in `digits` that is equal to the digit
/// `offset` places after it, wrapping around the end of the sequence.
///
/// The result is at most `9 * digits.len()`.
pub fn checksum(digits: &Digits, offset: usize) -> u64 {
    let digits = &digits.0;
    let len = digits.len();
    let offset = offset % len;

    (0..len)
        .filter(|&i| digits[i] == digits[(i + offset) % len])
        .inspect(|&i| trace!("digit {} at {} matches at {}", digits[i], i, (i + offset) % len))
        .map(|i| u64::from(digits[i]))
        .sum()
}

/// Parse `input` and compute the checksum under both rules.
pub fn solve(input: &str) -> Result<Sums, Error> {
    let digits = Digits::from_str(input)?;
    Ok(digits.sums())
}
