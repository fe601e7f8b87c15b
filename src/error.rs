use crate::util::Interval;
use thiserror::Error;

/// Precondition failures rejected at public entry points.
/// The per-step arithmetic itself performs no checks.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("grid has {n_points} points, the scheme needs at least {required}")]
    GridTooSmall { n_points: usize, required: usize },

    #[error("domain [{x_min}, {x_max}] has non-positive length")]
    EmptyDomain { x_min: f64, x_max: f64 },

    #[error("spatial step must be positive, got {dx}")]
    NonPositiveSpacing { dx: f64 },

    #[error("input covers {input} but output covers {output}")]
    IntervalMismatch { input: Interval, output: Interval },
}
