/// Errors that can occur during gradient descent.
///
/// Failing to converge is not an error; see [`Status`](super::Status).
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    #[error("system evaluation failed at iteration {iter}")]
    System {
        /// Iteration whose state could not be evaluated.
        iter: usize,

        #[source]
        source: E,
    },
}

