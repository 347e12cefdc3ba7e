use steepest_core::EquationSystem;

/// The result of evaluating a system's residuals at a given `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<const N: usize> {
    pub x: [f64; N],

    pub residuals: [f64; N],

    /// Least-squares objective `½·Σfᵢ²` of `residuals`.
    pub objective: f64,
}

/// Evaluates the residuals and the least-squares objective at `x`.
///
/// # Errors
///
/// Returns the system's error if the residuals cannot be computed.
pub fn evaluate<S, const N: usize>(system: &S, x: [f64; N]) -> Result<Evaluation<N>, S::Error>
where
    S: EquationSystem<N>,
{
    let residuals = system.residuals(&x)?;
    Ok(Evaluation {
        x,
        residuals,
        objective: objective(&residuals),
    })
}

/// Computes the least-squares objective `½·Σfᵢ²`.
///
/// The squares are independent; the sum is accumulated in index order.
#[must_use]
pub fn objective<const N: usize>(residuals: &[f64; N]) -> f64 {
    let squares = residuals.map(|f| f * f);
    0.5 * squares.iter().sum::<f64>()
}

/// Computes the objective gradient `∇g = Jᵀ·F` from a Jacobian and residuals.
///
/// Component `j` is `Σᵢ J[i][j]·fᵢ`, the dot product of column `j` with the
/// residuals.
#[must_use]
pub fn gradient<const N: usize>(jacobian: &[[f64; N]; N], residuals: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|j| {
        jacobian
            .iter()
            .zip(residuals)
            .map(|(row, f)| row[j] * f)
            .sum()
    })
}

/// Evaluates the objective gradient at `x`.
///
/// Residuals and the Jacobian are each evaluated once and shared across all
/// gradient components.
///
/// # Errors
///
/// Returns the system's error if residuals or the Jacobian cannot be computed.
pub fn gradient_at<S, const N: usize>(system: &S, x: &[f64; N]) -> Result<[f64; N], S::Error>
where
    S: EquationSystem<N>,
{
    let residuals = system.residuals(x)?;
    let jacobian = system.jacobian(x)?;
    Ok(gradient(&jacobian, &residuals))
}
