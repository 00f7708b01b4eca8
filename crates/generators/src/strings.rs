use behave_core::{Examples, Generator, Source};
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::repeat;

const DEFAULT_MAX_LEN: usize = 32;

/// Strings of printable ASCII characters (`' '..='~'`).
#[derive(Debug, Clone, Copy)]
pub struct AsciiStrings {
    max_len: usize,
}

pub fn ascii_strings() -> AsciiStrings {
    ascii_strings_up_to(DEFAULT_MAX_LEN)
}

/// Printable ASCII strings of length `0..=max_len`.
pub fn ascii_strings_up_to(max_len: usize) -> AsciiStrings {
    AsciiStrings { max_len }
}

impl Generator<String> for AsciiStrings {
    fn examples(&self, source: Source) -> Examples<'_, String> {
        repeat(source, move |source| {
            let len = source.range(0..=self.max_len);
            (0..len).map(|_| char::from(source.range(b' '..=b'~'))).collect()
        })
    }
}

/// Strings of `[A-Za-z0-9]`.
#[derive(Debug, Clone, Copy)]
pub struct AlphanumericStrings {
    max_len: usize,
}

pub fn alphanumeric_strings() -> AlphanumericStrings {
    AlphanumericStrings {
        max_len: DEFAULT_MAX_LEN,
    }
}

impl Generator<String> for AlphanumericStrings {
    fn examples(&self, source: Source) -> Examples<'_, String> {
        repeat(source, move |source| {
            let len = source.range(0..=self.max_len);
            (0..len)
                .map(|_| char::from(source.rng().sample(Alphanumeric)))
                .collect()
        })
    }
}
