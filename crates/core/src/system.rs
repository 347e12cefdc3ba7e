/// A square system of equations `F(x) = 0` with an analytic Jacobian.
///
/// The const generic `N` is both the number of unknowns and the number of
/// equations. Implementations must keep [`residuals`](Self::residuals) and
/// [`jacobian`](Self::jacobian) in lock-step: row `i` of the Jacobian holds
/// the partial derivatives of residual `i` with respect to each unknown.
///
/// Both methods must be pure functions of `x`. Solvers rely on this to reuse
/// an evaluation across the steps of one iteration.
pub trait EquationSystem<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the residuals `[f₀(x), …, f_{N-1}(x)]`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed at `x`.
    fn residuals(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error>;

    /// Evaluates the Jacobian matrix, where entry `[i][j]` is `∂fᵢ/∂xⱼ`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Jacobian cannot be computed at `x`.
    fn jacobian(&self, x: &[f64; N]) -> Result<[[f64; N]; N], Self::Error>;
}

impl<const N: usize, S: EquationSystem<N>> EquationSystem<N> for &S {
    type Error = S::Error;

    fn residuals(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
        (**self).residuals(x)
    }

    fn jacobian(&self, x: &[f64; N]) -> Result<[[f64; N]; N], Self::Error> {
        (**self).jacobian(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    /// F(x) = [x₀ + x₁ − 3, x₀ − x₁ − 1], root at (2, 1).
    struct Linear;

    impl EquationSystem<2> for Linear {
        type Error = Infallible;

        fn residuals(&self, x: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
            Ok([x[0] + x[1] - 3.0, x[0] - x[1] - 1.0])
        }

        fn jacobian(&self, _x: &[f64; 2]) -> Result<[[f64; 2]; 2], Self::Error> {
            Ok([[1.0, 1.0], [1.0, -1.0]])
        }
    }

    fn residuals_of<S: EquationSystem<2>>(system: S, x: [f64; 2]) -> [f64; 2] {
        match system.residuals(&x) {
            Ok(r) => r,
            Err(_) => panic!("linear system cannot fail"),
        }
    }

    #[test]
    fn references_forward_to_the_system() {
        let system = Linear;

        assert_eq!(residuals_of(&system, [2.0, 1.0]), [0.0, 0.0]);
        assert_eq!(residuals_of(&system, [0.0, 0.0]), [-3.0, -1.0]);

        let by_ref = &system;
        let Ok(jacobian) = by_ref.jacobian(&[5.0, -5.0]);
        assert_eq!(jacobian, [[1.0, 1.0], [1.0, -1.0]]);
    }
}
