use super::Status;

/// Events emitted by the gradient descent solver.
///
/// Every iteration emits one [`Event::Iterate`] before its update, and the run
/// ends with exactly one [`Event::Finished`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<const N: usize> {
    /// About to update the iterate.
    Iterate {
        /// Zero-based iteration index, equal to the updates applied so far.
        iter: usize,

        /// Iterate before the update.
        x: [f64; N],

        /// Objective at `x`.
        objective: f64,

        /// Objective gradient at `x`, used for this update.
        gradient: [f64; N],
    },

    /// The run terminated.
    Finished {
        /// Total updates applied.
        iter: usize,

        /// Final iterate.
        x: [f64; N],

        /// Objective at `x`.
        objective: f64,

        /// How the run terminated.
        status: Status,
    },
}

impl<const N: usize> Event<N> {
    /// Returns the iteration index.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Iterate { iter, .. } | Self::Finished { iter, .. } => *iter,
        }
    }

    /// Returns the iterate carried by this event.
    #[must_use]
    pub fn x(&self) -> &[f64; N] {
        match self {
            Self::Iterate { x, .. } | Self::Finished { x, .. } => x,
        }
    }

    /// Returns the objective at [`x`](Self::x).
    #[must_use]
    pub fn objective(&self) -> f64 {
        match self {
            Self::Iterate { objective, .. } | Self::Finished { objective, .. } => *objective,
        }
    }

    /// Returns the Euclidean norm of the gradient, if this event carries one.
    #[must_use]
    pub fn gradient_norm(&self) -> Option<f64> {
        match self {
            Self::Iterate { gradient, .. } => {
                Some(gradient.iter().map(|g| g * g).sum::<f64>().sqrt())
            }
            Self::Finished { .. } => None,
        }
    }
}
