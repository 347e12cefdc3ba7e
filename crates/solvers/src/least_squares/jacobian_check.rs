//! Numerical verification of analytic Jacobians.
//!
//! A system's [`jacobian`](EquationSystem::jacobian) must be the exact
//! derivative of its [`residuals`](EquationSystem::residuals). These helpers
//! approximate the Jacobian with central differences so the pairing can be
//! checked at sample points.

use steepest_core::EquationSystem;

/// Approximates the Jacobian at `x` with central differences of width `2h`.
///
/// Entry `[i][j]` is `(fᵢ(x + h·eⱼ) − fᵢ(x − h·eⱼ)) / 2h`.
///
/// # Errors
///
/// Returns the system's error if any perturbed residual evaluation fails.
pub fn central_difference<S, const N: usize>(
    system: &S,
    x: &[f64; N],
    h: f64,
) -> Result<[[f64; N]; N], S::Error>
where
    S: EquationSystem<N>,
{
    let mut jacobian = [[0.0; N]; N];

    for j in 0..N {
        let mut forward = *x;
        let mut backward = *x;
        forward[j] += h;
        backward[j] -= h;

        let f_forward = system.residuals(&forward)?;
        let f_backward = system.residuals(&backward)?;

        for (row, (plus, minus)) in jacobian.iter_mut().zip(f_forward.iter().zip(&f_backward)) {
            row[j] = (plus - minus) / (2.0 * h);
        }
    }

    Ok(jacobian)
}

/// Returns the largest entrywise error between two Jacobians.
///
/// Each error is `|a − n| / max(|a|, floor)`, so entries smaller than `floor`
/// are compared absolutely rather than relatively.
#[must_use]
pub fn max_relative_error<const N: usize>(
    analytic: &[[f64; N]; N],
    numeric: &[[f64; N]; N],
    floor: f64,
) -> f64 {
    analytic
        .iter()
        .flatten()
        .zip(numeric.iter().flatten())
        .map(|(a, n)| (a - n).abs() / a.abs().max(floor))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// F(x) = [sin(x₀)·x₁, x₀³ + eˣ¹].
    struct Smooth {
        wrong_jacobian: bool,
    }

    impl EquationSystem<2> for Smooth {
        type Error = Infallible;

        fn residuals(&self, x: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
            Ok([x[0].sin() * x[1], x[0].powi(3) + x[1].exp()])
        }

        fn jacobian(&self, x: &[f64; 2]) -> Result<[[f64; 2]; 2], Self::Error> {
            let d_cubic = if self.wrong_jacobian {
                2.0 * x[0]
            } else {
                3.0 * x[0] * x[0]
            };
            Ok([
                [x[0].cos() * x[1], x[0].sin()],
                [d_cubic, x[1].exp()],
            ])
        }
    }

    #[test]
    fn central_difference_matches_analytic_jacobian() {
        let system = Smooth {
            wrong_jacobian: false,
        };
        let x = [0.7, -1.3];

        let Ok(analytic) = system.jacobian(&x);
        let Ok(numeric) = central_difference(&system, &x, 1e-6);

        for (a_row, n_row) in analytic.iter().zip(&numeric) {
            for (a, n) in a_row.iter().zip(n_row) {
                assert_relative_eq!(*a, *n, epsilon = 1e-8, max_relative = 1e-6);
            }
        }
        assert!(max_relative_error(&analytic, &numeric, 1e-8) < 1e-6);
    }

    #[test]
    fn mismatched_jacobian_is_detected() {
        let system = Smooth {
            wrong_jacobian: true,
        };
        let x = [0.7, -1.3];

        let Ok(analytic) = system.jacobian(&x);
        let Ok(numeric) = central_difference(&system, &x, 1e-6);

        // 2·0.7 vs 3·0.49 differ by about 5%.
        assert!(max_relative_error(&analytic, &numeric, 1e-8) > 1e-2);
    }

    #[test]
    fn floor_makes_tiny_entries_absolute() {
        let analytic = [[0.0, 1.0], [2.0, 3.0]];
        let numeric = [[1e-9, 1.0], [2.0, 3.0]];

        assert_relative_eq!(
            max_relative_error(&analytic, &numeric, 1e-6),
            1e-3,
            max_relative = 1e-12
        );
    }
}
