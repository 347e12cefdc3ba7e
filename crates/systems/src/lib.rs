//! Concrete equation systems for Steepest.
//!
//! Each module fixes one square system `F(x) = 0` together with its analytic
//! Jacobian and wires it to the
//! [`gradient_descent`](steepest_solvers::least_squares::gradient_descent)
//! solver.
//!
//! # Systems
//!
//! - [`trig_exp`]: three equations in three unknowns with trigonometric and
//!   exponential terms

pub mod trig_exp;
