use steepest_core::Observer;
use steepest_observers::{ProgressPrinter, TracingObserver};
use steepest_solvers::least_squares::gradient_descent::{self, Action, Config, Event, Solution};

use super::{State, TrigExpSystem};

/// Options for [`gradient_descent_loop`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Solver parameters.
    pub config: Config,

    /// Print one progress line per iteration, and a final line, to stdout.
    pub verbose: bool,
}

impl Default for Options {
    /// Reference parameters with progress output enabled.
    fn default() -> Self {
        Self {
            config: Config::default(),
            verbose: true,
        }
    }
}

/// Runs gradient descent on [`TrigExpSystem`] starting from `state`.
///
/// The final iterate is written back into `state`. The returned [`Solution`]
/// tells a converged run apart from one that hit the iteration cap or
/// diverged.
pub fn gradient_descent_loop(state: &mut State, options: &Options) -> Solution<3> {
    gradient_descent_loop_with(state, options, ())
}

/// Runs [`gradient_descent_loop`] with an additional observer.
///
/// The observer sees every event after the progress printer and may stop the
/// run early with [`Action::StopEarly`].
pub fn gradient_descent_loop_with<Obs>(
    state: &mut State,
    options: &Options,
    mut observer: Obs,
) -> Solution<3>
where
    Obs: Observer<Event<3>, Action>,
{
    let mut printer = options.verbose.then(ProgressPrinter::stdout);
    let mut tracer = TracingObserver;

    let combined = |event: &Event<3>| {
        if let Some(printer) = printer.as_mut() {
            let _: Option<Action> = printer.observe(event);
        }
        let _: Option<Action> = tracer.observe(event);
        observer.observe(event)
    };

    let Ok(solution) = gradient_descent::solve(&TrigExpSystem, *state, &options.config, combined);

    if let Some(Err(err)) = printer.map(ProgressPrinter::finish) {
        tracing::warn!(%err, "failed to write progress output");
    }

    *state = solution.x;
    solution
}
