//! Least-squares formulation of equation systems.
//!
//! An [`EquationSystem`] supplies residuals `F(x)` and their Jacobian `J(x)`.
//! This module turns them into the scalar objective
//!
//! ```text
//! g(x) = ½ · Σ fᵢ(x)²
//! ```
//!
//! and its gradient `∇g(x) = Jᵀ(x) · F(x)`. A root of the system is a global
//! minimum of `g` with value zero.
//!
//! # Solvers
//!
//! - [`gradient_descent`]: fixed-step descent along `−∇g`
//!
//! [`EquationSystem`]: steepest_core::EquationSystem

mod evaluate;

pub use evaluate::{Evaluation, evaluate, gradient, gradient_at, objective};

pub mod gradient_descent;
pub mod jacobian_check;
