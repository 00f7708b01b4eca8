//! Setup/teardown bracketing of a single behaviour.
//!
//! Every behaviour gets its own bracket: `setup, body, teardown`. Teardown
//! runs whenever setup was attempted, whatever the body did.

use crate::behaviour::{Behaviour, SpecContext};
use crate::failure::{capture, SpecResult};

/// A zero-argument fixture or hook action.
pub type Action = Box<dyn Fn() -> SpecResult + Send + Sync>;

#[derive(Default)]
pub struct FixtureController {
    setup: Option<Action>,
    teardown: Option<Action>,
}

impl FixtureController {
    /// A controller with neither setup nor teardown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the action run before each behaviour.
    pub fn set_setup(&mut self, action: Action) {
        self.setup = Some(action);
    }

    /// Replaces the action run after each behaviour.
    pub fn set_teardown(&mut self, action: Action) {
        self.teardown = Some(action);
    }

    /// Runs `behaviour` inside one fresh setup/teardown bracket.
    ///
    /// A failing setup skips the body and makes the run an error. A failing
    /// teardown only decides the result when the body succeeded.
    pub fn run(&self, behaviour: &Behaviour, ctx: &SpecContext) -> SpecResult {
        if let Some(setup) = &self.setup {
            if let Err(failure) = capture(|| setup()) {
                if let Err(teardown_failure) = self.tear_down() {
                    tracing::warn!(
                        behaviour = behaviour.description(),
                        error = %teardown_failure,
                        "teardown failed after failed setup"
                    );
                }
                return Err(failure.into_error());
            }
        }

        let body = capture(|| behaviour.specification().run(ctx));

        match (body, self.tear_down()) {
            (Ok(()), teardown) => teardown,
            (Err(failure), Ok(())) => Err(failure),
            (Err(failure), Err(teardown_failure)) => {
                tracing::warn!(
                    behaviour = behaviour.description(),
                    error = %teardown_failure,
                    "teardown failed after failed specification"
                );
                Err(failure)
            }
        }
    }

    fn tear_down(&self) -> SpecResult {
        match &self.teardown {
            Some(teardown) => capture(|| teardown()).map_err(|f| f.into_error()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviour::Body;
    use crate::expect::Expect;
    use crate::failure::SpecFailure;
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<&'static str>>>;

    fn logging(log: &Log, name: &'static str, result: SpecResult) -> Action {
        let log = Arc::clone(log);
        Box::new(move || {
            log.lock().unwrap().push(name);
            result.clone()
        })
    }

    fn behaviour<F>(log: &Log, body: F) -> Behaviour
    where
        F: Fn(&Expect) -> SpecResult + Send + Sync + 'static,
    {
        let log = Arc::clone(log);
        Behaviour::new(
            "behaviour",
            Box::new(Body(move |expect: &Expect| {
                log.lock().unwrap().push("body");
                body(expect)
            })),
        )
    }

    fn controller(log: &Log, setup: SpecResult, teardown: SpecResult) -> FixtureController {
        let mut fixture = FixtureController::new();
        fixture.set_setup(logging(log, "setup", setup));
        fixture.set_teardown(logging(log, "teardown", teardown));
        fixture
    }

    #[test]
    fn brackets_the_body() {
        let log = Log::default();
        let fixture = controller(&log, Ok(()), Ok(()));
        let result = fixture.run(&behaviour(&log, |_| Ok(())), &SpecContext::new(0));
        assert_eq!(result, Ok(()));
        assert_eq!(*log.lock().unwrap(), vec!["setup", "body", "teardown"]);
    }

    #[test]
    fn tears_down_after_panicking_body() {
        let log = Log::default();
        let fixture = controller(&log, Ok(()), Ok(()));
        let erroring = behaviour(&log, |_| panic!("EPIC FAIL"));
        let result = fixture.run(&erroring, &SpecContext::new(0));
        assert_eq!(result, Err(SpecFailure::Error("EPIC FAIL".into())));
        assert_eq!(*log.lock().unwrap(), vec!["setup", "body", "teardown"]);
    }

    #[test]
    fn failed_setup_skips_body_but_tears_down() {
        let log = Log::default();
        let fixture = controller(&log, Err(SpecFailure::assertion("no db")), Ok(()));
        let result = fixture.run(&behaviour(&log, |_| Ok(())), &SpecContext::new(0));
        assert_eq!(result, Err(SpecFailure::Error("no db".into())));
        assert_eq!(*log.lock().unwrap(), vec!["setup", "teardown"]);
    }

    #[test]
    fn failed_teardown_errors_a_passing_body() {
        let log = Log::default();
        let fixture = controller(&log, Ok(()), Err(SpecFailure::error("leak")));
        let result = fixture.run(&behaviour(&log, |_| Ok(())), &SpecContext::new(0));
        assert_eq!(result, Err(SpecFailure::Error("leak".into())));
    }

    #[test]
    fn body_failure_wins_over_teardown_failure() {
        let log = Log::default();
        let fixture = controller(&log, Ok(()), Err(SpecFailure::error("leak")));
        let result = fixture.run(
            &behaviour(&log, |expect| expect.that(1).is_equal_to(2)),
            &SpecContext::new(0),
        );
        assert_eq!(
            result,
            Err(SpecFailure::Assertion("\nExpected: is <2>\n     but: was <1>".into()))
        );
    }

    #[test]
    fn no_fixture_runs_only_the_body() {
        let log = Log::default();
        let fixture = FixtureController::new();
        let result = fixture.run(&behaviour(&log, |_| Ok(())), &SpecContext::new(0));
        assert_eq!(result, Ok(()));
        assert_eq!(*log.lock().unwrap(), vec!["body"]);
    }
}
