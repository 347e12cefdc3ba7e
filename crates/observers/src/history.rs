use steepest_core::Observer;

use crate::traits::{HasIteration, HasObjective};

/// Records the objective reported by every solver event.
///
/// Works with any event type that implements [`HasIteration`] and
/// [`HasObjective`]. Pass `&mut History` to the solver to inspect the record
/// after the run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    points: Vec<(usize, f64)>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded `(iteration, objective)` pairs in event order.
    #[must_use]
    pub fn points(&self) -> &[(usize, f64)] {
        &self.points
    }

    /// Returns the recorded objective values in event order.
    pub fn objectives(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, objective)| objective)
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if no objective exceeds its predecessor by more than
    /// `margin`.
    ///
    /// A NaN objective makes the history non-monotone.
    #[must_use]
    pub fn is_non_increasing(&self, margin: f64) -> bool {
        self.points
            .windows(2)
            .all(|pair| pair[1].1 <= pair[0].1 + margin)
    }
}

impl<E: HasIteration + HasObjective, A> Observer<E, A> for History {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.points.push((event.iteration(), event.objective()));
        None
    }
}

impl<E: HasIteration + HasObjective, A> Observer<E, A> for &mut History {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use steepest_solvers::least_squares::gradient_descent::{Event, Status};

    fn iterate(iter: usize, objective: f64) -> Event<1> {
        Event::Iterate {
            iter,
            x: [0.0],
            objective,
            gradient: [0.0],
        }
    }

    fn record(history: &mut History, events: &[Event<1>]) {
        for event in events {
            let _: Option<()> = history.observe(event);
        }
    }

    #[test]
    fn records_points_in_event_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        record(
            &mut history,
            &[
                iterate(0, 4.0),
                iterate(1, 2.0),
                Event::Finished {
                    iter: 2,
                    x: [0.0],
                    objective: 1.0,
                    status: Status::Converged,
                },
            ],
        );

        assert_eq!(history.len(), 3);
        assert_eq!(history.points(), [(0, 4.0), (1, 2.0), (2, 1.0)]);
        assert_eq!(history.objectives().collect::<Vec<_>>(), [4.0, 2.0, 1.0]);
    }

    #[test]
    fn detects_increases_beyond_margin() {
        let mut history = History::new();
        record(&mut history, &[iterate(0, 1.0), iterate(1, 1.0 + 1e-9)]);

        assert!(!history.is_non_increasing(0.0));
        assert!(history.is_non_increasing(1e-6));
    }

    #[test]
    fn nan_breaks_monotonicity() {
        let mut history = History::new();
        record(&mut history, &[iterate(0, 1.0), iterate(1, f64::NAN)]);

        assert!(!history.is_non_increasing(1.0));
    }

    #[test]
    fn empty_and_single_point_histories_are_non_increasing() {
        let mut history = History::new();
        assert!(history.is_non_increasing(0.0));

        record(&mut history, &[iterate(0, 3.0)]);
        assert!(history.is_non_increasing(0.0));
    }
}
