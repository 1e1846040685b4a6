use crate::error::InterpolantError;

/// Equispaced, strictly increasing grid of `num_points` nodes spanning `[x_initial, x_final]`.
/// - `x_initial` - first node,
/// - `x_final` - last node,
/// - `grid_width` - distance between consecutive nodes,
/// - `nodes` - node coordinates, `nodes[i] = x_initial + i * grid_width`.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformGrid {
    x_initial: f64,
    x_final: f64,
    grid_width: f64,
    nodes: Vec<f64>,
}

/// Cell containing a query point together with the fractional position inside it.
///
/// `index` is the 0-based node starting the cell, so the point lies in
/// `[x[index], x[index + 1]]` and `coefficient` is its relative position in that cell.
/// A bracket returned by [UniformGrid::precompute] for a point outside the open interior is a
/// sentinel (`index == num_points`, `coefficient == 0`) and must not be used for interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub index: usize,
    pub coefficient: f64,
}

impl UniformGrid {
    /// Creates grid of `num_points` nodes between `x_initial` and `x_final`.
    /// # Example
    /// ```
    /// use equispaced_linear::UniformGrid;
    ///
    /// let grid = UniformGrid::new(5, 0.0, 4.0).unwrap();
    /// assert_eq!(1.0, grid.grid_width());
    /// assert_eq!(&[0.0, 1.0, 2.0, 3.0, 4.0], grid.nodes());
    /// ```
    /// # Errors
    /// Error is returned when grid has less than 2 nodes or bounds are not finite and increasing.
    /// ```
    /// use equispaced_linear::UniformGrid;
    ///
    /// assert!(UniformGrid::new(1, 0.0, 4.0).is_err());
    /// assert!(UniformGrid::new(5, 4.0, 4.0).is_err());
    /// ```
    pub fn new(num_points: usize, x_initial: f64, x_final: f64) -> Result<Self, InterpolantError> {
        if num_points < 2 {
            return Err(InterpolantError::InvalidConfiguration(format!(
                "grid must have at least 2 points, got {}",
                num_points
            )));
        }
        if !x_initial.is_finite() || !x_final.is_finite() {
            return Err(InterpolantError::InvalidConfiguration(
                "grid bounds must be finite".to_string(),
            ));
        }
        if x_final <= x_initial {
            return Err(InterpolantError::InvalidConfiguration(format!(
                "x_final ({}) must be greater than x_initial ({})",
                x_final, x_initial
            )));
        }

        let grid_width = (x_final - x_initial) / (num_points - 1) as f64;
        let nodes = (0..num_points)
            .map(|i| x_initial + i as f64 * grid_width)
            .collect();

        Ok(UniformGrid { x_initial, x_final, grid_width, nodes })
    }

    pub fn num_points(&self) -> usize {
        self.nodes.len()
    }

    pub fn x_initial(&self) -> f64 {
        self.x_initial
    }

    pub fn x_final(&self) -> f64 {
        self.x_final
    }

    pub fn grid_width(&self) -> f64 {
        self.grid_width
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// True when `x` lies strictly between the first and the last node.
    pub fn is_interior(&self, x: f64) -> bool {
        self.x_initial < x && x < self.x_final
    }

    /// Finds bracketing cell and interpolation coefficient of `x`, so that repeated evaluations
    /// at the same point can skip the lookup.
    ///
    /// Points at or beyond either bound give the out of range sentinel, see [Bracket].
    /// # Example
    /// ```
    /// use equispaced_linear::UniformGrid;
    ///
    /// let grid = UniformGrid::new(5, 0.0, 4.0).unwrap();
    /// let bracket = grid.precompute(1.5);
    /// assert_eq!(1, bracket.index);
    /// assert_eq!(0.5, bracket.coefficient);
    ///
    /// assert!(!grid.is_usable(&grid.precompute(4.0)));
    /// ```
    pub fn precompute(&self, x: f64) -> Bracket {
        if self.is_interior(x) {
            self.find_bracket(x)
        } else {
            Bracket { index: self.num_points(), coefficient: 0.0 }
        }
    }

    /// True when `bracket` addresses an existing cell of this grid.
    pub fn is_usable(&self, bracket: &Bracket) -> bool {
        bracket.index < self.num_points() - 1
    }

    // Floor may land on the last node when x is a rounding error away from x_final.
    pub(crate) fn find_bracket(&self, x: f64) -> Bracket {
        let relative_x = (x - self.x_initial) / self.grid_width;
        let index = (relative_x.floor() as usize).min(self.num_points() - 2);
        let coefficient = (x - self.nodes[index]) / (self.nodes[index + 1] - self.nodes[index]);

        Bracket { index, coefficient }
    }
}
