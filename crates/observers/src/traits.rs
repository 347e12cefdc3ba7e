//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event types, so observers such
//! as [`History`](crate::History) can work with any solver whose events
//! expose the needed data.
//!
//! # Example
//!
//! ```rust
//! use steepest_core::Observer;
//! use steepest_observers::traits::{HasIteration, HasObjective};
//!
//! /// Remembers the first iteration whose objective fell below a threshold.
//! struct FirstBelow {
//!     threshold: f64,
//!     hit: Option<usize>,
//! }
//!
//! impl<E: HasIteration + HasObjective, A> Observer<E, A> for FirstBelow {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if self.hit.is_none() && event.objective() < self.threshold {
//!             self.hit = Some(event.iteration());
//!         }
//!         None
//!     }
//! }
//! ```

use steepest_solvers::least_squares::gradient_descent;

/// An event tied to a solver iteration.
pub trait HasIteration {
    /// Returns the zero-based iteration index for this event.
    fn iteration(&self) -> usize;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

impl<const N: usize> HasIteration for gradient_descent::Event<N> {
    fn iteration(&self) -> usize {
        self.iter()
    }
}

impl<const N: usize> HasObjective for gradient_descent::Event<N> {
    fn objective(&self) -> f64 {
        gradient_descent::Event::objective(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gradient_descent::{Event, Status};

    #[test]
    fn gradient_descent_events_expose_iteration_and_objective() {
        let iterate = Event::Iterate {
            iter: 7,
            x: [1.0, 2.0, 3.0],
            objective: 0.5,
            gradient: [0.0; 3],
        };
        let finished = Event::Finished {
            iter: 8,
            x: [1.0, 2.0, 3.0],
            objective: 0.25,
            status: Status::MaxIters,
        };

        assert_eq!(iterate.iteration(), 7);
        assert_eq!(HasObjective::objective(&iterate), 0.5);
        assert_eq!(finished.iteration(), 8);
        assert_eq!(HasObjective::objective(&finished), 0.25);
    }
}
