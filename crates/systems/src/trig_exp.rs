//! A fixed system of three nonlinear equations in three unknowns.
//!
//! ```text
//! f₀(x) = 3·x₀ − cos(x₁·x₂) − 3/2
//! f₁(x) = 4·x₀² − 625·x₁² + 2·x₁ − 1
//! f₂(x) = e^(−x₀·x₁) + 20·x₂ + (10π − 3)/3
//! ```
//!
//! The analytic Jacobian is hand-derived from these expressions and must be
//! changed in lock-step with them.
//!
//! [`gradient_descent_loop`] drives a caller-owned [`State`] toward a root by
//! minimising `½·Σfᵢ(x)²` with fixed-step gradient descent, optionally
//! printing one progress line per iteration.
//!
//! # Example
//!
//! ```rust
//! use steepest_systems::trig_exp::{INITIAL_GUESS, Options, gradient_descent_loop};
//!
//! let mut state = INITIAL_GUESS;
//! let options = Options { verbose: false, ..Options::default() };
//!
//! let solution = gradient_descent_loop(&mut state, &options);
//!
//! assert!(solution.converged());
//! assert!(solution.objective <= 0.1);
//! assert_eq!(state, solution.x);
//! ```

mod descent;
mod equations;
mod jacobian;


pub use descent::{Options, gradient_descent_loop, gradient_descent_loop_with};
pub use equations::{EQUATIONS, f0, f1, f2};
pub use jacobian::JACOBIAN;

use std::convert::Infallible;

use steepest_core::EquationSystem;

/// The three unknowns `[x₀, x₁, x₂]`.
pub type State = [f64; 3];

/// Reference step size `γ`.
pub const STEP_SIZE: f64 = 1e-4;

/// Reference iteration cap.
pub const MAX_ITERS: usize = 100_000;

/// Reference objective tolerance.
pub const TOLERANCE: f64 = 0.1;

/// Reference starting point.
pub const INITIAL_GUESS: State = [0.0, 0.0, 0.0];

/// The trig-exp system as an [`EquationSystem`].
///
/// Every expression is defined for all real inputs, so evaluation never
/// fails. Large inputs may still overflow to infinity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrigExpSystem;

impl EquationSystem<3> for TrigExpSystem {
    type Error = Infallible;

    fn residuals(&self, x: &State) -> Result<[f64; 3], Self::Error> {
        Ok(EQUATIONS.map(|f| f(x)))
    }

    fn jacobian(&self, x: &State) -> Result<[[f64; 3]; 3], Self::Error> {
        Ok(JACOBIAN.map(|row| row.map(|df| df(x))))
    }
}
