//! Suites and the builder used to describe them.
//!
//! Describing a suite only records behaviours; nothing runs until the
//! [`Registry`](crate::Registry) runs.

use std::fmt;
use std::marker::PhantomData;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::behaviour::{Behaviour, Body};
use crate::error::RegistrationError;
use crate::expect::Expect;
use crate::failure::SpecResult;
use crate::fixture::{Action, FixtureController};
use crate::generator::{Generated, Generator};
use crate::table::{describe_row, Row};

/// A named, ordered group of behaviours sharing one fixture declaration.
pub struct Suite {
    name: String,
    fixture: FixtureController,
    initializer: Option<Action>,
    completer: Option<Action>,
    behaviours: Vec<Behaviour>,
}

impl Suite {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn behaviours(&self) -> &[Behaviour] {
        &self.behaviours
    }

    pub fn behaviour(&self, description: &str) -> Option<&Behaviour> {
        self.behaviours.iter().find(|b| b.has_description(description))
    }

    pub fn fixture(&self) -> &FixtureController {
        &self.fixture
    }

    pub(crate) fn initializer(&self) -> Option<&Action> {
        self.initializer.as_ref()
    }

    pub(crate) fn completer(&self) -> Option<&Action> {
        self.completer.as_ref()
    }
}

impl fmt::Debug for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite")
            .field("name", &self.name)
            .field("behaviours", &self.behaviours)
            .finish_non_exhaustive()
    }
}

/// The `it` of `describe("a String", |it| ...)`.
pub struct SuiteBuilder {
    suite: Suite,
    errors: Vec<RegistrationError>,
}

impl SuiteBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            suite: Suite {
                name: name.into(),
                fixture: FixtureController::new(),
                initializer: None,
                completer: None,
                behaviours: Vec::new(),
            },
            errors: Vec::new(),
        }
    }

    /// Registers a plain behaviour.
    pub fn should<F>(&mut self, description: impl Into<String>, body: F) -> &mut Self
    where
        F: Fn(&Expect) -> SpecResult + Send + Sync + 'static,
    {
        self.push(Behaviour::new(description, Box::new(Body(body))));
        self
    }

    /// Registers a behaviour built around a custom [`Specification`](crate::Specification).
    pub fn add(&mut self, behaviour: Behaviour) -> &mut Self {
        self.push(behaviour);
        self
    }

    /// Runs before every behaviour of this suite.
    pub fn should_setup<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn() -> SpecResult + Send + Sync + 'static,
    {
        self.suite.fixture.set_setup(Box::new(action));
        self
    }

    /// Runs after every behaviour of this suite, whatever its outcome.
    pub fn should_tear_down<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn() -> SpecResult + Send + Sync + 'static,
    {
        self.suite.fixture.set_teardown(Box::new(action));
        self
    }

    /// Runs once, before the first behaviour of this suite.
    pub fn should_initialize<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn() -> SpecResult + Send + Sync + 'static,
    {
        self.suite.initializer = Some(Box::new(action));
        self
    }

    /// Runs once, after the last behaviour of this suite.
    pub fn should_complete<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn() -> SpecResult + Send + Sync + 'static,
    {
        self.suite.completer = Some(Box::new(action));
        self
    }

    /// Starts a generated behaviour that draws `iterations` examples.
    pub fn requires(&mut self, iterations: usize) -> Requirement<'_> {
        Requirement {
            builder: self,
            iterations,
        }
    }

    /// Starts a generated behaviour that draws a single example.
    pub fn example<T, G>(&mut self, generator: G) -> ExampleBuilder<'_, T, G>
    where
        G: Generator<T> + 'static,
    {
        self.requires(1).example(generator)
    }

    /// Starts a data table with its first row.
    pub fn uses<R: Row>(&mut self, row: R) -> Table<'_, R> {
        Table {
            builder: self,
            rows: vec![row],
        }
    }

    /// Starts a data table from any number of rows.
    pub fn uses_all<R, I>(&mut self, rows: I) -> Table<'_, R>
    where
        R: Row,
        I: IntoIterator<Item = R>,
    {
        Table {
            builder: self,
            rows: rows.into_iter().collect(),
        }
    }

    fn push(&mut self, behaviour: Behaviour) {
        self.suite.behaviours.push(behaviour);
    }

    fn reject(&mut self, error: RegistrationError) {
        tracing::debug!(suite = %self.suite.name, %error, "registration rejected");
        self.errors.push(error);
    }

    /// The first registration error wins; any later ones are logged.
    pub(crate) fn finish(self) -> Result<Suite, RegistrationError> {
        let mut errors = self.errors.into_iter();
        match errors.next() {
            None => Ok(self.suite),
            Some(first) => {
                for dropped in errors {
                    tracing::debug!(
                        suite = %self.suite.name,
                        error = %dropped,
                        "additional registration error dropped"
                    );
                }
                Err(first)
            }
        }
    }
}

/// `it.requires(n)`: the iteration count is checked when the behaviour is registered.
pub struct Requirement<'a> {
    builder: &'a mut SuiteBuilder,
    iterations: usize,
}

impl<'a> Requirement<'a> {
    pub fn example<T, G>(self, generator: G) -> ExampleBuilder<'a, T, G>
    where
        G: Generator<T> + 'static,
    {
        ExampleBuilder {
            builder: self.builder,
            iterations: self.iterations,
            generator,
            _example: PhantomData,
        }
    }
}

pub struct ExampleBuilder<'a, T, G> {
    builder: &'a mut SuiteBuilder,
    iterations: usize,
    generator: G,
    _example: PhantomData<fn() -> T>,
}

impl<T, G> ExampleBuilder<'_, T, G>
where
    T: fmt::Debug + 'static,
    G: Generator<T> + 'static,
{
    /// Registers the body, run once per generated example.
    pub fn to_show<F>(self, description: impl Into<String>, body: F)
    where
        F: Fn(&Expect, T) -> SpecResult + Send + Sync + 'static,
    {
        let description = description.into();
        match NonZeroUsize::new(self.iterations) {
            Some(iterations) => {
                let generated = Generated::new(self.generator, iterations, body);
                self.builder
                    .push(Behaviour::new(description, Box::new(generated)));
            }
            None => {
                let suite = self.builder.suite.name.clone();
                self.builder
                    .reject(RegistrationError::InvalidIterationCount {
                        suite,
                        description,
                        count: self.iterations,
                    });
            }
        }
    }
}

/// `it.uses(row).and(row)...`: each row becomes its own behaviour.
pub struct Table<'a, R> {
    builder: &'a mut SuiteBuilder,
    rows: Vec<R>,
}

impl<R: Row> Table<'_, R> {
    pub fn and(mut self, row: R) -> Self {
        self.rows.push(row);
        self
    }

    /// Registers one behaviour per row, described by filling the `{}`
    /// placeholders of `template` with the row's columns.
    pub fn to_show<F>(self, template: &str, body: F)
    where
        F: Fn(&Expect, R) -> SpecResult + Send + Sync + 'static,
    {
        if self.rows.is_empty() {
            let suite = self.builder.suite.name.clone();
            self.builder.reject(RegistrationError::EmptyTable {
                suite,
                template: template.to_string(),
            });
            return;
        }

        let body = Arc::new(body);
        for row in self.rows {
            let description = describe_row(template, &row.columns());
            let body = Arc::clone(&body);
            let spec = Body(move |expect: &Expect| body(expect, row.clone()));
            self.builder.push(Behaviour::new(description, Box::new(spec)));
        }
    }
}
