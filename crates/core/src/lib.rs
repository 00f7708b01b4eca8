//! behave-core: behaviour specification engine.
//!
//! Suites are described into a [`Registry`], then run. Each behaviour runs
//! inside its own setup/teardown bracket, optionally once per generated
//! example, and ends up as exactly one [`SpecificationReport`] with a
//! SUCCESS, FAILURE or ERROR [`Outcome`].
//!
//! A panic inside a body, fixture or hook is caught and reported as ERROR.
//! The process panic hook still sees it first, so the default hook prints
//! its usual `thread ... panicked at` message to stderr. Replace it with
//! [`std::panic::set_hook`] for quiet runs.
//!
//! ```
//! use behave_core::{run_only, Described, Outcome, RegistrationError, Registry};
//!
//! struct Arithmetic;
//!
//! impl Described for Arithmetic {
//!     fn describe(registry: &mut Registry) -> Result<(), RegistrationError> {
//!         registry.describe("arithmetic", |it| {
//!             it.should("add", |expect| expect.that(2 + 2).is_equal_to(4));
//!             it.uses((1, 2, 3))
//!                 .and((2, 2, 4))
//!                 .to_show("{} plus {} is {}", |expect, (a, b, sum)| {
//!                     expect.that(a + b).is_equal_to(sum)
//!                 });
//!         })?;
//!         Ok(())
//!     }
//! }
//!
//! let report = run_only::<Arithmetic>().unwrap();
//! let suite = report.suite("arithmetic").unwrap();
//! assert_eq!(suite.specifications().len(), 3);
//! assert!(suite.specifications().iter().all(|s| s.result() == Outcome::Success));
//! ```

mod behaviour;
mod config;
mod engine;
mod error;
mod expect;
mod failure;
mod fixture;
mod generator;
mod registry;
mod report;
mod suite;
mod table;

pub use behaviour::{Behaviour, SpecContext, Specification};
pub use config::{RunConfig, DEFAULT_SEED};
pub use engine::{classify, Engine};
pub use error::{ConfigError, RegistrationError, ReportError};
pub use expect::{Expect, That};
pub use failure::{SpecFailure, SpecResult};
pub use fixture::{Action, FixtureController};
pub use generator::{run_generated, Examples, Generator, Source};
pub use registry::{run_only, run_only_with, Described, Registry};
pub use report::{Outcome, Report, SpecificationReport, SuiteReport, Summary, NO_MESSAGE};
pub use suite::{ExampleBuilder, Requirement, Suite, SuiteBuilder, Table};
pub use table::{describe_row, Row};
