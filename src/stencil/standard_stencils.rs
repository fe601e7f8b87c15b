use crate::error::Error;
use crate::stencil::*;

/// Forward-time, backward-space update for the linear convection
/// equation du/dt + c * du/dx = 0.
///
/// Backward differencing is upwind for c > 0, which is what the
/// explicit scheme needs to stay stable under the Courant condition
/// |c * dt / dx| <= 1. The bound is documented, not enforced; outside
/// it the scheme is known to blow up. For c < 0 the same stencil is
/// downwind and unstable regardless of step sizes.
pub fn linear_convection_1d(
    dt: f64,
    dx: f64,
    c: f64,
) -> Result<Stencil<2>, Error> {
    if dx <= 0.0 {
        return Err(Error::NonPositiveSpacing { dx });
    }
    Ok(Stencil::new([-1, 0], move |args: &[f64; 2]| {
        let left = args[0];
        let middle = args[1];
        middle - (c * dt / dx) * (middle - left)
    }))
}

/// Dimensionless ratio c * dt / dx. The explicit upwind scheme is
/// stable for magnitudes up to 1.
pub fn courant_number(c: f64, dt: f64, dx: f64) -> f64 {
    c * dt / dx
}
