//! Property-based examples.
//!
//! A [`Generator`] turns a [`Source`] of randomness into a lazy, possibly
//! unbounded, iterator of values. The driver pulls at most `iterations`
//! values from it and stops at the first one the body rejects.

use std::fmt;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::behaviour::{SpecContext, Specification};
use crate::expect::Expect;
use crate::failure::{capture, SpecResult};

/// Deterministic randomness handed to generators.
pub struct Source {
    rng: StdRng,
}

impl Source {
    /// The same seed always yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A uniformly random `u64`.
    pub fn next_u64(&mut self) -> u64 {
        self.rng.gen()
    }

    /// A uniform draw from `range`. Panics if the range is empty.
    pub fn range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// `true` with probability `p`, clamped to `[0, 1]`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Direct access for generators that need the full `rand` API.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source").finish_non_exhaustive()
    }
}

/// A lazy sequence of examples.
pub type Examples<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// Produces example values for a generated specification.
pub trait Generator<T>: Send + Sync {
    fn examples(&self, source: Source) -> Examples<'_, T>;
}

/// A fixed, finite list of examples, replayed in order.
impl<T> Generator<T> for Vec<T>
where
    T: Clone + Send + Sync,
{
    fn examples(&self, _source: Source) -> Examples<'_, T> {
        Box::new(self.iter().cloned())
    }
}

/// Runs `body` once per example, for at most `iterations` examples.
///
/// The first failing example ends the run; its failure (assertion or error)
/// becomes the result, with the example appended to the message.
pub fn run_generated<T, G, F>(
    generator: &G,
    iterations: NonZeroUsize,
    body: F,
    ctx: &SpecContext,
) -> SpecResult
where
    T: fmt::Debug,
    G: Generator<T> + ?Sized,
    F: Fn(&Expect, T) -> SpecResult,
{
    let examples = generator.examples(ctx.source()).take(iterations.get());
    for (index, value) in examples.enumerate() {
        let shown = format!("{:?}", value);
        if let Err(failure) = capture(|| body(ctx.expect(), value)) {
            tracing::debug!(iteration = index + 1, example = %shown, "generated example failed");
            return Err(failure.with_example(&shown));
        }
    }
    Ok(())
}

/// A body bound to its generator and iteration count.
pub(crate) struct Generated<T, G, F> {
    generator: G,
    iterations: NonZeroUsize,
    body: F,
    _example: PhantomData<fn() -> T>,
}

impl<T, G, F> Generated<T, G, F> {
    pub(crate) fn new(generator: G, iterations: NonZeroUsize, body: F) -> Self {
        Self {
            generator,
            iterations,
            body,
            _example: PhantomData,
        }
    }
}

impl<T, G, F> Specification for Generated<T, G, F>
where
    T: fmt::Debug,
    G: Generator<T>,
    F: Fn(&Expect, T) -> SpecResult + Send + Sync,
{
    fn run(&self, ctx: &SpecContext) -> SpecResult {
        run_generated(&self.generator, self.iterations, &self.body, ctx)
    }
}
