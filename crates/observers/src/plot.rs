//! Objective-versus-iteration plotting.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use steepest_core::Observer;

use crate::traits::{HasIteration, HasObjective};

/// Options for the window opened by [`PlotObserver::show`].
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Trig-exp descent").log_y())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a config with no title and a linear y-axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Plots log₁₀ of the objective.
    ///
    /// Non-positive objectives are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

/// Collects the objective at every iteration and displays it in an egui
/// window.
///
/// ```ignore
/// let mut plot = PlotObserver::new();
/// gradient_descent::solve(&system, x0, &config, &mut plot)?;
/// plot.show(ShowConfig::new().log_y())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlotObserver {
    points: Vec<[f64; 2]>,
}

impl PlotObserver {
    /// Creates an observer with no recorded points.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one `(iteration, objective)` point.
    ///
    /// Non-finite objectives are not recorded.
    #[allow(clippy::cast_precision_loss)]
    pub fn record(&mut self, iteration: usize, objective: f64) {
        if objective.is_finite() {
            self.points.push([iteration as f64, objective]);
        }
    }

    /// Opens a blocking window with the recorded trajectory.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.unwrap_or_else(|| "objective".to_owned());
        let points = if config.log_y {
            self.points
                .into_iter()
                .filter(|p| p[1] > 0.0)
                .map(|p| [p[0], p[1].log10()])
                .collect()
        } else {
            self.points
        };

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    points,
                    log_y: config.log_y,
                }))
            }),
        )
    }
}

impl<E: HasIteration + HasObjective, A> Observer<E, A> for PlotObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.iteration(), event.objective());
        None
    }
}

impl<E: HasIteration + HasObjective, A> Observer<E, A> for &mut PlotObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

struct PlotApp {
    points: Vec<[f64; 2]>,
    log_y: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let y_label = if self.log_y { "log₁₀ F(x)" } else { "F(x)" };
            Plot::new("objective")
                .x_axis_label("iteration")
                .y_axis_label(y_label)
                .show(ui, |plot_ui| {
                    let points: PlotPoints = self.points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name("F(x)"));
                });
        });
    }
}
