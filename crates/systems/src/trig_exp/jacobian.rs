use super::State;

/// Partial derivatives `∂fᵢ/∂xⱼ`, indexed `[i][j]`.
pub const JACOBIAN: [[fn(&State) -> f64; 3]; 3] = [
    [df0_dx0, df0_dx1, df0_dx2],
    [df1_dx0, df1_dx1, df1_dx2],
    [df2_dx0, df2_dx1, df2_dx2],
];

fn df0_dx0(_x: &State) -> f64 {
    3.0
}

fn df0_dx1(x: &State) -> f64 {
    x[2] * (x[1] * x[2]).sin()
}

fn df0_dx2(x: &State) -> f64 {
    x[1] * (x[1] * x[2]).sin()
}

fn df1_dx0(x: &State) -> f64 {
    8.0 * x[0]
}

fn df1_dx1(x: &State) -> f64 {
    -1250.0 * x[1] + 2.0
}

fn df1_dx2(_x: &State) -> f64 {
    0.0
}

fn df2_dx0(x: &State) -> f64 {
    -x[1] * (-x[0] * x[1]).exp()
}

fn df2_dx1(x: &State) -> f64 {
    -x[0] * (-x[0] * x[1]).exp()
}

fn df2_dx2(_x: &State) -> f64 {
    20.0
}
