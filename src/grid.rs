//! Uniform 1D grid over a closed spatial domain.

use crate::error::Error;
use crate::util::*;

/// `n_points` samples spaced evenly over `[x_min, x_max]`,
/// both endpoints included.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Grid {
    n_points: usize,
    x_min: f64,
    x_max: f64,
}

impl Grid {
    /// A grid needs at least two points for the spacing to be defined,
    /// and a domain of positive length.
    pub fn new(n_points: usize, x_min: f64, x_max: f64) -> Result<Self, Error> {
        if n_points < 2 {
            return Err(Error::GridTooSmall {
                n_points,
                required: 2,
            });
        }
        if x_max <= x_min {
            return Err(Error::EmptyDomain { x_min, x_max });
        }
        Ok(Grid {
            n_points,
            x_min,
            x_max,
        })
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Constant spacing between adjacent samples.
    pub fn spacing(&self) -> f64 {
        (self.x_max - self.x_min) / (self.n_points - 1) as f64
    }

    /// Index range covered by a state buffer on this grid.
    pub fn interval(&self) -> Interval {
        Interval::new(0, self.n_points as i32 - 1)
    }

    pub fn coord(&self, i: i32) -> f64 {
        self.x_min + i as f64 * self.spacing()
    }

    /// The x-axis sample points, for plotting against a state vector.
    pub fn coords(&self) -> Vec<f64> {
        self.interval().coord_iter().map(|i| self.coord(i)).collect()
    }
}
