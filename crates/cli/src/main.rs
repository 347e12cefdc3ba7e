use anyhow::Context;
use clap::Parser;
use steepest_solvers::least_squares::gradient_descent::{Config, Solution};
use steepest_systems::trig_exp::{
    INITIAL_GUESS, MAX_ITERS, Options, STEP_SIZE, State, TOLERANCE, gradient_descent_loop,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "steepest", version, about, long_about = None)]
struct Cli {
    /// Initial guess as three numbers `X0 X1 X2`. Defaults to the origin.
    #[arg(num_args = 3, value_names = ["X0", "X1", "X2"], allow_negative_numbers = true)]
    x0: Option<Vec<f64>>,

    /// Fixed gradient step size.
    #[arg(long, default_value_t = STEP_SIZE)]
    step_size: f64,

    /// Maximum number of updates.
    #[arg(long, default_value_t = MAX_ITERS)]
    max_iters: usize,

    /// Objective value at or below which the run has converged.
    #[arg(long, default_value_t = TOLERANCE)]
    tolerance: f64,

    /// Skip the per-iteration progress lines.
    #[arg(short, long)]
    quiet: bool,

    /// Show the objective trajectory in a window after the run.
    #[cfg(feature = "plot")]
    #[arg(long)]
    plot: bool,
}

impl Cli {
    fn initial_guess(&self) -> anyhow::Result<State> {
        match &self.x0 {
            None => Ok(INITIAL_GUESS),
            Some(values) => State::try_from(values.as_slice())
                .with_context(|| format!("expected three initial values, got {}", values.len())),
        }
    }

    fn options(&self) -> anyhow::Result<Options> {
        let config = Config::new(self.step_size, self.max_iters, self.tolerance)
            .context("invalid solver parameters")?;
        Ok(Options {
            config,
            verbose: !self.quiet,
        })
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut state = cli.initial_guess()?;
    let options = cli.options()?;

    tracing::info!(x0 = ?state, ?options, "starting gradient descent");

    #[cfg(feature = "plot")]
    if cli.plot {
        use steepest_observers::{PlotObserver, ShowConfig};

        let mut plot = PlotObserver::new();
        let solution =
            steepest_systems::trig_exp::gradient_descent_loop_with(&mut state, &options, &mut plot);
        println!("{}", summary(&solution));
        return plot
            .show(ShowConfig::new().title("steepest").log_y())
            .map_err(|err| anyhow::anyhow!("failed to open plot window: {err}"));
    }

    let solution = gradient_descent_loop(&mut state, &options);
    println!("{}", summary(&solution));

    Ok(())
}

/// Logs go to stderr so stdout carries only progress lines and the result.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn summary(solution: &Solution<3>) -> String {
    let [x0, x1, x2] = solution.x;
    format!(
        "status: {:?}\niterations: {}\nx: [{x0:.6}, {x1:.6}, {x2:.6}]\nF(x) = {:.6}",
        solution.status, solution.iters, solution.objective
    )
}
