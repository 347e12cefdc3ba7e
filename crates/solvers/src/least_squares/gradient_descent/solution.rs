/// Indicates how gradient descent terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The objective fell to or below the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The objective became infinite or NaN.
    Diverged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a gradient descent run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<const N: usize> {
    /// How the solver terminated.
    pub status: Status,

    /// Final iterate.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Number of updates applied to the initial state.
    pub iters: usize,
}

impl<const N: usize> Solution<N> {
    /// Returns `true` if the objective reached the tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
