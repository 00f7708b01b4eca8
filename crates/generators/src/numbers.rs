use std::ops::RangeInclusive;

use behave_core::{Examples, Generator, Source};

use crate::repeat;

/// Uniform integers from an inclusive range.
#[derive(Debug, Clone)]
pub struct Integers {
    range: RangeInclusive<i64>,
}

/// Integers in `0..=max`.
pub fn integers_up_to(max: i64) -> Integers {
    integers_in(0..=max)
}

/// Integers in `range`. An empty range yields no examples.
pub fn integers_in(range: RangeInclusive<i64>) -> Integers {
    Integers { range }
}

impl Generator<i64> for Integers {
    fn examples(&self, source: Source) -> Examples<'_, i64> {
        if self.range.is_empty() {
            return Box::new(std::iter::empty());
        }
        repeat(source, move |source| source.range(self.range.clone()))
    }
}

/// Fair coin flips.
#[derive(Debug, Clone, Copy)]
pub struct Booleans;

pub fn booleans() -> Booleans {
    Booleans
}

impl Generator<bool> for Booleans {
    fn examples(&self, source: Source) -> Examples<'_, bool> {
        repeat(source, |source| source.chance(0.5))
    }
}
