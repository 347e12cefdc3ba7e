use std::f64::consts::PI;

use super::State;

/// The residual functions in row order.
pub const EQUATIONS: [fn(&State) -> f64; 3] = [f0, f1, f2];

/// `f₀(x) = 3·x₀ − cos(x₁·x₂) − 3/2`
#[must_use]
pub fn f0(x: &State) -> f64 {
    3.0 * x[0] - (x[1] * x[2]).cos() - 1.5
}

/// `f₁(x) = 4·x₀² − 625·x₁² + 2·x₁ − 1`
#[must_use]
pub fn f1(x: &State) -> f64 {
    4.0 * x[0] * x[0] - 625.0 * x[1] * x[1] + 2.0 * x[1] - 1.0
}

/// `f₂(x) = e^(−x₀·x₁) + 20·x₂ + (10π − 3)/3`
#[must_use]
pub fn f2(x: &State) -> f64 {
    (-x[0] * x[1]).exp() + 20.0 * x[2] + (10.0 * PI - 3.0) / 3.0
}
