use nalgebra::DVector;

use crate::error::InterpolantError;

/// Numerical differentiation of samples taken at unit spacing.
///
/// Implementors are sized for a fixed number of samples, given by [DerivativeEstimator::size],
/// and return derivative estimates at every sample. Scaling to a physical grid is left to the
/// caller.
pub trait DerivativeEstimator {
    fn size(&self) -> usize;

    fn differentiate(&self, values: &[f64]) -> Result<Vec<f64>, InterpolantError>;
}

/// Derivative of the natural cubic spline passing through the samples.
///
/// With unit spacing the second derivatives `m` of the spline satisfy
/// `m[i-1] + 4 m[i] + m[i+1] = 6 (v[i+1] - 2 v[i] + v[i-1])` with `m[0] = m[n-1] = 0`.
/// The matrix of that system depends only on the number of samples, so its forward sweep pivots
/// are computed once in [CubicSplineDerivative::new] and reused by every call to `differentiate`.
///
/// # Example
/// ```
/// use equispaced_linear::{CubicSplineDerivative, DerivativeEstimator};
/// use assert_approx_eq::assert_approx_eq;
///
/// let estimator = CubicSplineDerivative::new(4).unwrap();
/// let derivative = estimator.differentiate(&[1.0, 3.0, 5.0, 7.0]).unwrap();
///
/// for d in derivative {
///     assert_approx_eq!(2.0, d, 1e-12);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineDerivative {
    pivots: DVector<f64>,
}

impl CubicSplineDerivative {
    pub fn new(size: usize) -> Result<Self, InterpolantError> {
        if size < 2 {
            return Err(InterpolantError::InvalidConfiguration(format!(
                "spline derivative needs at least 2 samples, got {}",
                size
            )));
        }

        let mut pivots = DVector::<f64>::zeros(size);
        let mut previous_pivot = f64::INFINITY;
        for i in 1..size - 1 {
            pivots[i] = 4.0 - 1.0 / previous_pivot;
            previous_pivot = pivots[i];
        }

        Ok(CubicSplineDerivative { pivots })
    }

    fn second_derivatives(&self, values: &[f64]) -> DVector<f64> {
        let size = self.size();
        let mut forward = DVector::<f64>::zeros(size);
        let mut second = DVector::<f64>::zeros(size);

        for i in 1..size - 1 {
            let rhs = 6.0 * (values[i + 1] - 2.0 * values[i] + values[i - 1]);
            forward[i] = (rhs - forward[i - 1]) / self.pivots[i];
        }
        for i in (1..size - 1).rev() {
            second[i] = forward[i] - second[i + 1] / self.pivots[i];
        }
        second
    }
}

impl DerivativeEstimator for CubicSplineDerivative {
    fn size(&self) -> usize {
        self.pivots.len()
    }

    fn differentiate(&self, values: &[f64]) -> Result<Vec<f64>, InterpolantError> {
        check_length(self.size(), values)?;

        let last = self.size() - 1;
        let m = self.second_derivatives(values);

        let mut derivative: Vec<f64> = (0..last)
            .map(|i| values[i + 1] - values[i] - (2.0 * m[i] + m[i + 1]) / 6.0)
            .collect();
        derivative.push(values[last] - values[last - 1] + (m[last - 1] + 2.0 * m[last]) / 6.0);

        Ok(derivative)
    }
}

/// Second order finite differences: central inside, one sided at both ends.
/// With only two samples both ends get the single forward difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CentralDifference {
    size: usize,
}

impl CentralDifference {
    pub fn new(size: usize) -> Result<Self, InterpolantError> {
        if size < 2 {
            return Err(InterpolantError::InvalidConfiguration(format!(
                "finite differences need at least 2 samples, got {}",
                size
            )));
        }
        Ok(CentralDifference { size })
    }
}

impl DerivativeEstimator for CentralDifference {
    fn size(&self) -> usize {
        self.size
    }

    fn differentiate(&self, values: &[f64]) -> Result<Vec<f64>, InterpolantError> {
        check_length(self.size, values)?;

        let n = self.size;
        if n == 2 {
            let slope = values[1] - values[0];
            return Ok(vec![slope, slope]);
        }

        let mut derivative = Vec::with_capacity(n);
        derivative.push((-3.0 * values[0] + 4.0 * values[1] - values[2]) / 2.0);
        derivative.extend(values.windows(3).map(|w| (w[2] - w[0]) / 2.0));
        derivative.push((3.0 * values[n - 1] - 4.0 * values[n - 2] + values[n - 3]) / 2.0);

        Ok(derivative)
    }
}

fn check_length(expected: usize, values: &[f64]) -> Result<(), InterpolantError> {
    if values.len() != expected {
        return Err(InterpolantError::LengthMismatch { expected, got: values.len() });
    }
    Ok(())
}
