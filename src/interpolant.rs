use tracing::debug;

use crate::{
    derivative::{CubicSplineDerivative, DerivativeEstimator},
    error::InterpolantError,
    grid::{Bracket, UniformGrid},
};

/// Selects one of the sample arrays held by [EquispacedLinear].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sample {
    Value,
    FirstDerivative,
    SecondDerivative,
    ThirdDerivative,
    /// Integral type auxiliary samples, always supplied by the caller.
    Integral,
}

/// Piecewise linear interpolant of a function tabulated on an equispaced grid.
///
/// Besides function values it holds first, second and third derivative samples and an
/// integral type auxiliary array, all aligned with the grid nodes. Every array is evaluated
/// the same way: linear interpolation inside the grid and a common policy outside of it.
/// - with a null value configured, any `x` at or beyond either bound gives the null value,
/// - otherwise the first or last sample is returned (flat extrapolation).
///
/// Sample arrays start zero filled and are populated by the caller, see
/// [EquispacedLinear::set_samples], [EquispacedLinear::samples_mut] and
/// [EquispacedLinear::tabulate]. Derivative samples may instead be estimated from function
/// values with [EquispacedLinear::initialize_derivatives].
///
/// # Example
/// ```
/// use equispaced_linear::{EquispacedLinear, Sample};
///
/// let mut interpolant = EquispacedLinear::new(5, 0.0, 4.0, None).unwrap();
/// interpolant.set_samples(Sample::Value, &[0.0, 1.0, 4.0, 9.0, 16.0]).unwrap();
///
/// assert_eq!(2.5, interpolant.value(1.5, None));
/// assert_eq!(0.0, interpolant.value(-1.0, None));
/// assert_eq!(16.0, interpolant.value(10.0, None));
///
/// let bracket = interpolant.precompute(1.5);
/// assert_eq!(2.5, interpolant.value(1.5, Some(bracket)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EquispacedLinear {
    grid: UniformGrid,
    y: Vec<f64>,
    yp: Vec<f64>,
    ypp: Vec<f64>,
    yppp: Vec<f64>,
    yint: Vec<f64>,
    null_value: Option<f64>,
}

impl EquispacedLinear {
    /// Creates interpolant over `num_points` nodes between `x_initial` and `x_final` with all
    /// samples set to zero. When `null_value` is given it is returned for every query at or
    /// outside grid bounds.
    /// # Errors
    /// Error is returned when grid cannot be constructed, see [UniformGrid::new].
    /// ```
    /// use equispaced_linear::EquispacedLinear;
    ///
    /// assert!(EquispacedLinear::new(1, 0.0, 1.0, None).is_err());
    /// assert!(EquispacedLinear::new(3, 1.0, 1.0, Some(0.0)).is_err());
    /// ```
    pub fn new(
        num_points: usize,
        x_initial: f64,
        x_final: f64,
        null_value: Option<f64>,
    ) -> Result<Self, InterpolantError> {
        let grid = UniformGrid::new(num_points, x_initial, x_final)?;

        debug!(
            num_points,
            x_initial,
            x_final,
            grid_width = grid.grid_width(),
            has_null_value = null_value.is_some(),
            "created equispaced linear interpolant"
        );

        Ok(EquispacedLinear {
            grid,
            y: vec![0.0; num_points],
            yp: vec![0.0; num_points],
            ypp: vec![0.0; num_points],
            yppp: vec![0.0; num_points],
            yint: vec![0.0; num_points],
            null_value,
        })
    }

    /// Discards grid and all samples and starts over as [EquispacedLinear::new] would.
    /// On error `self` is left unchanged.
    pub fn reinitialize(
        &mut self,
        num_points: usize,
        x_initial: f64,
        x_final: f64,
        null_value: Option<f64>,
    ) -> Result<(), InterpolantError> {
        *self = EquispacedLinear::new(num_points, x_initial, x_final, null_value)?;
        Ok(())
    }

    pub fn grid(&self) -> &UniformGrid {
        &self.grid
    }

    pub fn num_points(&self) -> usize {
        self.grid.num_points()
    }

    pub fn x_initial(&self) -> f64 {
        self.grid.x_initial()
    }

    pub fn x_final(&self) -> f64 {
        self.grid.x_final()
    }

    pub fn grid_width(&self) -> f64 {
        self.grid.grid_width()
    }

    pub fn has_null_value(&self) -> bool {
        self.null_value.is_some()
    }

    /// Configured null value, `0.0` when none is set.
    pub fn null_value(&self) -> f64 {
        self.null_value.unwrap_or(0.0)
    }

    pub fn samples(&self, sample: Sample) -> &[f64] {
        match sample {
            Sample::Value => &self.y,
            Sample::FirstDerivative => &self.yp,
            Sample::SecondDerivative => &self.ypp,
            Sample::ThirdDerivative => &self.yppp,
            Sample::Integral => &self.yint,
        }
    }

    pub fn samples_mut(&mut self, sample: Sample) -> &mut [f64] {
        match sample {
            Sample::Value => &mut self.y,
            Sample::FirstDerivative => &mut self.yp,
            Sample::SecondDerivative => &mut self.ypp,
            Sample::ThirdDerivative => &mut self.yppp,
            Sample::Integral => &mut self.yint,
        }
    }

    /// Copies `values` into the selected array.
    /// # Errors
    /// Error is returned when `values` length differs from number of grid points.
    pub fn set_samples(&mut self, sample: Sample, values: &[f64]) -> Result<(), InterpolantError> {
        let num_points = self.num_points();
        if values.len() != num_points {
            return Err(InterpolantError::LengthMismatch {
                expected: num_points,
                got: values.len(),
            });
        }
        self.samples_mut(sample).copy_from_slice(values);
        Ok(())
    }

    /// Fills function values by evaluating `function` at every grid node.
    /// # Example
    /// ```
    /// use equispaced_linear::EquispacedLinear;
    ///
    /// let mut interpolant = EquispacedLinear::new(3, 0.0, 2.0, None).unwrap();
    /// interpolant.tabulate(|x| x * x);
    ///
    /// assert_eq!(2.5, interpolant.value(1.5, None));
    /// ```
    pub fn tabulate<F>(&mut self, function: F)
    where
        F: Fn(f64) -> f64,
    {
        for (y, x) in self.y.iter_mut().zip(self.grid.nodes()) {
            *y = function(*x);
        }
    }

    /// Bracketing cell and interpolation coefficient of `x`, see [UniformGrid::precompute].
    pub fn precompute(&self, x: f64) -> Bracket {
        self.grid.precompute(x)
    }

    /// Evaluates selected sample array at `x`.
    ///
    /// A `bracket` from [EquispacedLinear::precompute] for the same `x` skips the cell lookup.
    /// It is only consulted for interior points and only when it addresses a cell of the grid,
    /// otherwise the cell is looked up again. The out of range sentinel is therefore ignored,
    /// also for `NaN`, which yields `NaN`. A bracket computed for a different interior point is
    /// not detected: the result is the interpolation inside that bracket.
    pub fn evaluate(&self, sample: Sample, x: f64, bracket: Option<Bracket>) -> f64 {
        let samples = self.samples(sample);

        if x <= self.grid.x_initial() || x >= self.grid.x_final() {
            if let Some(null_value) = self.null_value {
                return null_value;
            }
            if x <= self.grid.x_initial() {
                return samples[0];
            }
            return samples[samples.len() - 1];
        }

        let Bracket { index, coefficient } = bracket
            .filter(|bracket| self.grid.is_usable(bracket))
            .unwrap_or_else(|| self.grid.find_bracket(x));

        samples[index] * (1.0 - coefficient) + samples[index + 1] * coefficient
    }

    pub fn value(&self, x: f64, bracket: Option<Bracket>) -> f64 {
        self.evaluate(Sample::Value, x, bracket)
    }

    pub fn first_derivative(&self, x: f64, bracket: Option<Bracket>) -> f64 {
        self.evaluate(Sample::FirstDerivative, x, bracket)
    }

    pub fn second_derivative(&self, x: f64, bracket: Option<Bracket>) -> f64 {
        self.evaluate(Sample::SecondDerivative, x, bracket)
    }

    pub fn third_derivative(&self, x: f64, bracket: Option<Bracket>) -> f64 {
        self.evaluate(Sample::ThirdDerivative, x, bracket)
    }

    pub fn integral(&self, x: f64, bracket: Option<Bracket>) -> f64 {
        self.evaluate(Sample::Integral, x, bracket)
    }

    /// Function value followed by first, second and third derivative at `x`, sharing one cell
    /// lookup.
    pub fn derivatives(&self, x: f64) -> [f64; 4] {
        let bracket = self.grid.is_interior(x).then(|| self.grid.find_bracket(x));
        [
            Sample::Value,
            Sample::FirstDerivative,
            Sample::SecondDerivative,
            Sample::ThirdDerivative,
        ]
        .map(|sample| self.evaluate(sample, x, bracket))
    }

    pub fn evaluate_many(&self, sample: Sample, x_values: &[f64]) -> Vec<f64> {
        x_values.iter().map(|x| self.evaluate(sample, *x, None)).collect()
    }

    /// Estimates first, second and third derivative samples from function values with
    /// [CubicSplineDerivative]. See [EquispacedLinear::initialize_derivatives_with].
    pub fn initialize_derivatives(
        &mut self,
        jacobian: Option<&[f64]>,
    ) -> Result<(), InterpolantError> {
        let estimator = CubicSplineDerivative::new(self.num_points())?;
        self.initialize_derivatives_with(&estimator, jacobian)
    }

    /// Estimates derivative samples by applying `estimator` three times, starting from function
    /// values.
    ///
    /// Each estimate is divided by grid width, as estimators work with unit spacing, and the next
    /// order is estimated from that result. When `jacobian` is given, every stored order is
    /// additionally multiplied by it element by element, which supports a change of independent
    /// variable.
    /// Integral samples are not touched.
    ///
    /// # Example
    /// ```
    /// use equispaced_linear::{EquispacedLinear, Sample};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let mut interpolant = EquispacedLinear::new(11, 0.0, 5.0, None).unwrap();
    /// interpolant.tabulate(|x| 1.0 + 3.0 * x);
    /// interpolant.initialize_derivatives(None).unwrap();
    ///
    /// assert_approx_eq!(3.0, interpolant.first_derivative(2.2, None), 1e-9);
    /// assert_approx_eq!(0.0, interpolant.second_derivative(2.2, None), 1e-9);
    /// ```
    /// # Errors
    /// Error is returned when estimator or `jacobian` size differs from number of grid points,
    /// or estimator fails. In that case no samples are modified.
    pub fn initialize_derivatives_with<E>(
        &mut self,
        estimator: &E,
        jacobian: Option<&[f64]>,
    ) -> Result<(), InterpolantError>
    where
        E: DerivativeEstimator + ?Sized,
    {
        let num_points = self.num_points();
        if estimator.size() != num_points {
            return Err(InterpolantError::LengthMismatch {
                expected: num_points,
                got: estimator.size(),
            });
        }
        if let Some(jacobian) = jacobian {
            if jacobian.len() != num_points {
                return Err(InterpolantError::LengthMismatch {
                    expected: num_points,
                    got: jacobian.len(),
                });
            }
        }

        debug!(
            num_points,
            has_jacobian = jacobian.is_some(),
            "initializing derivative samples"
        );

        let grid_width = self.grid.grid_width();
        let first = scaled_derivative(estimator, &self.y, grid_width)?;
        let second = scaled_derivative(estimator, &first, grid_width)?;
        let third = scaled_derivative(estimator, &second, grid_width)?;

        self.yp = apply_jacobian(first, jacobian);
        self.ypp = apply_jacobian(second, jacobian);
        self.yppp = apply_jacobian(third, jacobian);
        Ok(())
    }
}

fn scaled_derivative<E>(
    estimator: &E,
    values: &[f64],
    grid_width: f64,
) -> Result<Vec<f64>, InterpolantError>
where
    E: DerivativeEstimator + ?Sized,
{
    let mut derivative = estimator.differentiate(values)?;
    if derivative.len() != values.len() {
        return Err(InterpolantError::LengthMismatch {
            expected: values.len(),
            got: derivative.len(),
        });
    }
    derivative.iter_mut().for_each(|d| *d /= grid_width);
    Ok(derivative)
}

fn apply_jacobian(mut derivative: Vec<f64>, jacobian: Option<&[f64]>) -> Vec<f64> {
    if let Some(jacobian) = jacobian {
        derivative.iter_mut().zip(jacobian).for_each(|(d, j)| *d *= j);
    }
    derivative
}
