use super::{Config, Status};
use crate::least_squares::Evaluation;

/// Applies one simultaneous update `x − γ·∇g(x)`.
///
/// Every component reads the same pre-update `x` and `gradient`, so no
/// component sees another's new value.
pub(super) fn descend<const N: usize>(
    x: &[f64; N],
    gradient: &[f64; N],
    step_size: f64,
) -> [f64; N] {
    std::array::from_fn(|j| x[j] - step_size * gradient[j])
}

/// Decides whether the run ends after `iters` updates landed on `eval`.
///
/// Tolerance is tested first, so reaching it on the last allowed update still
/// counts as converged.
pub(super) fn termination<const N: usize>(
    eval: &Evaluation<N>,
    iters: usize,
    config: &Config,
) -> Option<Status> {
    if eval.objective <= config.tolerance() {
        Some(Status::Converged)
    } else if !eval.objective.is_finite() {
        Some(Status::Diverged)
    } else if iters >= config.max_iters() {
        Some(Status::MaxIters)
    } else {
        None
    }
}
