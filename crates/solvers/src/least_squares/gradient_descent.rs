//! Fixed-step gradient descent on the least-squares objective.
//!
//! # Algorithm
//!
//! Starting from `x₀`, each iteration computes the gradient of
//! `g(x) = ½·‖F(x)‖²` and takes a fixed step against it:
//!
//! ```text
//! x_{k+1} = x_k − γ · Jᵀ(x_k) · F(x_k)
//! ```
//!
//! All components are updated simultaneously from the same `x_k`. After each
//! update the objective is re-evaluated and the run stops when:
//!
//! - `g(x) ≤ tolerance` → [`Status::Converged`]
//! - `g(x)` is infinite or NaN → [`Status::Diverged`]
//! - the update count reaches `max_iters` → [`Status::MaxIters`]
//!
//! Termination is only tested after an update, so every run applies at least
//! one step, even from a state that already meets the tolerance.
//!
//! # Limitations
//!
//! - No line search or adaptive step: `γ` must be small relative to the local
//!   curvature of `g` or the iterates diverge
//! - Converges to a stationary point of `g`, which need not be a root of `F`
//!
//! # Observer Events
//!
//! The solver emits [`Event::Iterate`] before every update and one
//! [`Event::Finished`] after the loop ends. Observers can return
//! [`Action::StopEarly`] from an `Iterate` event to end the run with
//! [`Status::StoppedByObserver`] before that update is applied. Actions
//! returned from `Finished` are ignored.
//!
//! Residuals are evaluated once per iterate and shared by the termination
//! test, the reported objective, and the next gradient.

mod action;
mod config;
mod error;
mod event;
mod solution;
mod step;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use steepest_core::{EquationSystem, Observer};

use super::{evaluate, gradient};
use step::{descend, termination};

/// Minimises `½·‖F(x)‖²` by fixed-step gradient descent from `x0`.
///
/// See the [module docs](self) for the update rule, termination, and event
/// timing.
///
/// # Errors
///
/// Returns an error if the system fails to evaluate its residuals or
/// Jacobian. Non-convergence is reported through [`Solution::status`].
pub fn solve<S, Obs, const N: usize>(
    system: &S,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error<S::Error>>
where
    S: EquationSystem<N>,
    Obs: Observer<Event<N>, Action>,
{
    let mut current = evaluate(system, x0).map_err(|source| Error::System { iter: 0, source })?;
    let mut iter = 0;

    let status = loop {
        let jacobian = system
            .jacobian(&current.x)
            .map_err(|source| Error::System { iter, source })?;
        let grad = gradient(&jacobian, &current.residuals);

        let event = Event::Iterate {
            iter,
            x: current.x,
            objective: current.objective,
            gradient: grad,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }

        let next = descend(&current.x, &grad, config.step_size());
        iter += 1;
        current = evaluate(system, next).map_err(|source| Error::System { iter, source })?;

        if let Some(status) = termination(&current, iter, config) {
            break status;
        }
    };

    observer.observe(&Event::Finished {
        iter,
        x: current.x,
        objective: current.objective,
        status,
    });

    Ok(Solution {
        status,
        x: current.x,
        objective: current.objective,
        iters: iter,
    })
}

/// Minimises `½·‖F(x)‖²` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the system fails to evaluate its residuals or Jacobian.
pub fn solve_unobserved<S, const N: usize>(
    system: &S,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error<S::Error>>
where
    S: EquationSystem<N>,
{
    solve(system, x0, config, ())
}
