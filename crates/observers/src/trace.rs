use steepest_core::Observer;
use steepest_solvers::least_squares::gradient_descent::{Event, Status};

/// Emits a `tracing` event for every gradient descent event.
///
/// Iterations are logged at `DEBUG` with the iteration index, objective,
/// gradient norm, and iterate. The final event is logged at `INFO`, or at
/// `WARN` when the run did not converge.
///
/// With no subscriber installed this observer does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<A, const N: usize> Observer<Event<N>, A> for TracingObserver {
    fn observe(&mut self, event: &Event<N>) -> Option<A> {
        match event {
            Event::Iterate {
                iter, x, objective, ..
            } => {
                tracing::debug!(
                    iter,
                    objective,
                    gradient_norm = event.gradient_norm(),
                    x = ?x,
                    "gradient descent iteration"
                );
            }
            Event::Finished {
                iter,
                x,
                objective,
                status: Status::Converged,
            } => {
                tracing::info!(iters = iter, objective, x = ?x, "gradient descent converged");
            }
            Event::Finished {
                iter,
                x,
                objective,
                status,
            } => {
                tracing::warn!(
                    iters = iter,
                    objective,
                    x = ?x,
                    ?status,
                    "gradient descent did not converge"
                );
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_returns_an_action() {
        let mut observer = TracingObserver;

        let iterate: Option<()> = observer.observe(&Event::Iterate {
            iter: 0,
            x: [1.0, 2.0],
            objective: 3.0,
            gradient: [0.5, 0.5],
        });
        assert!(iterate.is_none());

        for status in [
            Status::Converged,
            Status::MaxIters,
            Status::Diverged,
            Status::StoppedByObserver,
        ] {
            let finished: Option<()> = observer.observe(&Event::Finished {
                iter: 1,
                x: [1.0, 2.0],
                objective: 3.0,
                status,
            });
            assert!(finished.is_none());
        }
    }
}
