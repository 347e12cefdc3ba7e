//! Reusable observers for Steepest solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits for
//! watching a solver run without changing its API.
//!
//! # Modules
//!
//! - [`traits`] : Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasObjective`])
//!
//! # Observers
//!
//! - [`ProgressPrinter`] : one formatted line per iteration, for verbose runs
//! - [`TracingObserver`] : structured `tracing` events per iteration
//! - [`History`] : records the objective trajectory for later inspection
//!
//! # Features
//!
//! - `plot` : Enables [`PlotObserver`] for visualizing the objective via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: steepest_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasObjective`]: traits::HasObjective

pub mod traits;

mod history;
mod progress;
mod trace;

pub use history::History;
pub use progress::ProgressPrinter;
pub use trace::TracingObserver;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, ShowConfig};
