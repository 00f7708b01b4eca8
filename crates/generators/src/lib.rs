//! behave-generators: example generators for generated specifications.
//!
//! Every generator here is unbounded; the driver decides how many examples
//! to draw with `it.requires(n)`.
//!
//! ```
//! use behave_core::{run_only, Described, RegistrationError, Registry};
//! use behave_generators::ascii_strings;
//!
//! struct Strings;
//!
//! impl Described for Strings {
//!     fn describe(registry: &mut Registry) -> Result<(), RegistrationError> {
//!         registry.describe("a String", |it| {
//!             it.requires(100).example(ascii_strings()).to_show(
//!                 "reversing a String twice returns the original String",
//!                 |expect, s: String| {
//!                     let same: String = s.chars().rev().collect::<String>().chars().rev().collect();
//!                     expect.that(same).is_equal_to(s)
//!                 },
//!             );
//!         })?;
//!         Ok(())
//!     }
//! }
//!
//! assert!(run_only::<Strings>().unwrap().summary().all_passed());
//! ```

mod numbers;
mod strings;

use std::iter;

use behave_core::{Examples, Generator, Source};
use rand::seq::SliceRandom;

pub use numbers::{booleans, integers_in, integers_up_to, Booleans, Integers};
pub use strings::{
    alphanumeric_strings, ascii_strings, ascii_strings_up_to, AlphanumericStrings, AsciiStrings,
};

/// Endless examples, each drawn from `source` by `next`.
pub(crate) fn repeat<'a, T, F>(mut source: Source, mut next: F) -> Examples<'a, T>
where
    T: 'a,
    F: FnMut(&mut Source) -> T + 'a,
{
    Box::new(iter::repeat_with(move || next(&mut source)))
}

/// Picks uniformly from a fixed set of values, forever.
#[derive(Debug, Clone)]
pub struct OneOf<T> {
    values: Vec<T>,
}

/// Random choice among `values`. An empty set yields no examples.
pub fn one_of<T: Clone + Send + Sync>(values: impl IntoIterator<Item = T>) -> OneOf<T> {
    OneOf {
        values: values.into_iter().collect(),
    }
}

impl<T: Clone + Send + Sync> Generator<T> for OneOf<T> {
    fn examples(&self, mut source: Source) -> Examples<'_, T> {
        Box::new(iter::from_fn(move || {
            self.values.choose(source.rng()).cloned()
        }))
    }
}

/// A generator built from a closure drawing one value at a time.
pub struct FromFn<F> {
    next: F,
}

pub fn from_fn<T, F>(next: F) -> FromFn<F>
where
    F: Fn(&mut Source) -> T + Send + Sync,
{
    FromFn { next }
}

impl<T, F> Generator<T> for FromFn<F>
where
    T: 'static,
    F: Fn(&mut Source) -> T + Send + Sync,
{
    fn examples(&self, source: Source) -> Examples<'_, T> {
        repeat(source, move |source| (self.next)(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw<T, G: Generator<T>>(generator: &G, n: usize) -> Vec<T> {
        generator.examples(Source::seeded(1)).take(n).collect()
    }

    #[test]
    fn one_of_only_yields_given_values() {
        let values = draw(&one_of(["red", "green"]), 50);
        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|v| *v == "red" || *v == "green"));
    }

    #[test]
    fn one_of_nothing_is_finite() {
        assert!(draw(&one_of(Vec::<u8>::new()), 10).is_empty());
    }

    #[test]
    fn from_fn_draws_from_the_source() {
        let dice = from_fn(|source: &mut Source| source.range(1..=6u8));
        let rolls = draw(&dice, 100);
        assert!(rolls.iter().all(|r| (1..=6).contains(r)));
        assert_eq!(rolls, draw(&dice, 100));
    }
}
