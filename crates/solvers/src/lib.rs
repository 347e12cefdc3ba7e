//! Numerical solvers for the Steepest workspace.
//!
//! - [`least_squares`]: treat `F(x) = 0` as the minimisation of
//!   `½·‖F(x)‖²` and descend its gradient

pub mod least_squares;
