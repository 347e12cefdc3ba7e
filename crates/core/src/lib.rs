//! Core traits for the Steepest workspace.
//!
//! This crate defines the shared abstractions that solvers, systems, and
//! observers build on:
//!
//! - [`EquationSystem`]: a square system of equations `F(x) = 0` with an
//!   analytic Jacobian
//! - [`Observer`]: receives solver events and optionally returns control actions

mod observer;
mod system;

pub use observer::Observer;
pub use system::EquationSystem;
