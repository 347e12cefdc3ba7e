/// Actions an observer can take during gradient descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop before the next update and return the current iterate.
    StopEarly,
}
