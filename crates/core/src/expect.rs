//! The expectation capability handed to every specification body.
//!
//! Mismatch messages follow the two-line "Expected / but" layout, leading
//! newline included:
//!
//! ```text
//!
//! Expected: is <false>
//!      but: was <true>
//! ```

use std::fmt;

use crate::failure::{SpecFailure, SpecResult};

/// Entry point for assertions inside a body: `expect.that(actual).is_equal_to(expected)`.
#[derive(Debug, Default)]
pub struct Expect {
    _private: (),
}

impl Expect {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn that<T>(&self, actual: T) -> That<T> {
        That { actual }
    }

    /// Fails the specification unconditionally with `message`.
    pub fn failure(&self, message: impl Into<String>) -> SpecResult {
        Err(SpecFailure::assertion(message))
    }
}

/// An actual value waiting for a matcher.
#[must_use = "an expectation does nothing until a matcher is applied"]
#[derive(Debug)]
pub struct That<T> {
    actual: T,
}

impl<T: fmt::Debug> That<T> {
    #[must_use = "propagate the result with `?`"]
    pub fn is_equal_to<U>(self, expected: U) -> SpecResult
    where
        T: PartialEq<U>,
        U: fmt::Debug,
    {
        if self.actual == expected {
            Ok(())
        } else {
            Err(mismatch(&format!("is {}", describe(&expected)), &self.actual))
        }
    }

    #[must_use = "propagate the result with `?`"]
    pub fn is_not_equal_to<U>(self, unexpected: U) -> SpecResult
    where
        T: PartialEq<U>,
        U: fmt::Debug,
    {
        if self.actual != unexpected {
            Ok(())
        } else {
            Err(mismatch(
                &format!("not {}", describe(&unexpected)),
                &self.actual,
            ))
        }
    }

    /// Passes when `predicate` holds; `description` names the expectation
    /// in the failure message.
    #[must_use = "propagate the result with `?`"]
    pub fn satisfies<P>(self, description: &str, predicate: P) -> SpecResult
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&self.actual) {
            Ok(())
        } else {
            Err(mismatch(description, &self.actual))
        }
    }
}

impl That<bool> {
    #[must_use = "propagate the result with `?`"]
    pub fn is_true(self) -> SpecResult {
        self.is_equal_to(true)
    }

    #[must_use = "propagate the result with `?`"]
    pub fn is_false(self) -> SpecResult {
        self.is_equal_to(false)
    }
}

impl<T: fmt::Debug> That<Option<T>> {
    #[must_use = "propagate the result with `?`"]
    pub fn is_some(self) -> SpecResult {
        self.satisfies("a value", Option::is_some)
    }

    #[must_use = "propagate the result with `?`"]
    pub fn is_none(self) -> SpecResult {
        self.satisfies("no value", Option::is_none)
    }
}

fn mismatch<A: fmt::Debug>(expected: &str, actual: &A) -> SpecFailure {
    SpecFailure::assertion(format!(
        "\nExpected: {}\n     but: was {}",
        expected,
        describe(actual)
    ))
}

/// Strings keep their quotes, everything else is wrapped in angle brackets.
fn describe<V: fmt::Debug + ?Sized>(value: &V) -> String {
    let rendered = format!("{:?}", value);
    if rendered.starts_with('"') || rendered.starts_with('\'') {
        rendered
    } else {
        format!("<{}>", rendered)
    }
}
