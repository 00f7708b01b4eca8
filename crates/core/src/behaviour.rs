//! Behaviours and the seam every runnable specification goes through.

use std::fmt;

use crate::expect::Expect;
use crate::failure::SpecResult;
use crate::generator::Source;

/// Everything a specification run is handed by the engine.
#[derive(Debug)]
pub struct SpecContext {
    expect: Expect,
    seed: u64,
}

impl SpecContext {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            expect: Expect::new(),
            seed,
        }
    }

    /// The expectation capability for this run.
    pub fn expect(&self) -> &Expect {
        &self.expect
    }

    /// A fresh randomness source; every call with the same run seed yields
    /// the same sequence.
    pub fn source(&self) -> Source {
        Source::seeded(self.seed)
    }
}

/// Something that can be run as one specification.
pub trait Specification: Send + Sync {
    fn run(&self, ctx: &SpecContext) -> SpecResult;
}

/// A plain body: `|expect| { ... }`.
pub(crate) struct Body<F>(pub(crate) F);

impl<F> Specification for Body<F>
where
    F: Fn(&Expect) -> SpecResult + Send + Sync,
{
    fn run(&self, ctx: &SpecContext) -> SpecResult {
        (self.0)(ctx.expect())
    }
}

/// A specification with its associated description.
pub struct Behaviour {
    description: String,
    specification: Box<dyn Specification>,
}

impl Behaviour {
    pub fn new(description: impl Into<String>, specification: Box<dyn Specification>) -> Self {
        Self {
            description: description.into(),
            specification,
        }
    }

    /// What this behaviour claims, as registered.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn has_description(&self, description: &str) -> bool {
        self.description == description
    }

    /// The body run for this behaviour.
    pub fn specification(&self) -> &dyn Specification {
        self.specification.as_ref()
    }
}

impl fmt::Debug for Behaviour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behaviour")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
