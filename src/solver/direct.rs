//! Explicit time marching.
//!
//! Each step reads exclusively from the previous level's buffer and
//! writes into a second buffer, swapped between steps. In-place
//! updates over a single buffer would feed already-advanced left
//! neighbors into later reads and silently change the scheme's
//! stencil, so the two buffers are the correctness mechanism here,
//! not an optimization.

use crate::domain::*;
use crate::error::Error;
use crate::par_stencil;
use crate::stencil::*;

/// Advance `input` by one time level into `output`.
///
/// Coords within the stencil's reach of an end of the interval have no
/// defined update and carry the previous level through unchanged. For
/// the backward-space convection stencil that is exactly the leftmost
/// point, which acts as a fixed boundary for the whole run.
pub fn step<const NEIGHBORHOOD_SIZE: usize, DomainType: DomainView>(
    stencil: &Stencil<NEIGHBORHOOD_SIZE>,
    input: &DomainType,
    output: &mut DomainType,
    chunk_size: usize,
) {
    debug_assert_eq!(input.interval(), output.interval());
    let interval = *input.interval();
    let (left, right) = stencil.slopes();
    let interior = interval.shrink(left, right);

    for coord in interval.min()..interior.min() {
        output.set_coord(coord, input.view(coord));
    }
    for coord in (interior.max() + 1)..=interval.max() {
        output.set_coord(coord, input.view(coord));
    }

    let offset = interval.coord_to_linear(interior.min());
    let mut interior_output =
        SliceDomain::new(interior, &mut output.buffer_mut()[offset..]);
    par_stencil::apply(stencil, input, &mut interior_output, chunk_size);
}

/// Advance `input` by `n_steps` time levels, leaving the result in
/// `output` and using `input` as scratch.
///
/// `n_steps = 0` copies the input through unchanged. Preconditions are
/// checked here, before any arithmetic; the stepping itself is the
/// unchecked update rule.
pub fn march<const NEIGHBORHOOD_SIZE: usize, DomainType: DomainView>(
    stencil: &Stencil<NEIGHBORHOOD_SIZE>,
    input: &mut DomainType,
    output: &mut DomainType,
    n_steps: usize,
    chunk_size: usize,
) -> Result<(), Error> {
    if input.interval() != output.interval() {
        return Err(Error::IntervalMismatch {
            input: *input.interval(),
            output: *output.interval(),
        });
    }
    let (left, right) = stencil.slopes();
    let required = (left + right + 1) as usize;
    let n_points = input.interval().buffer_size();
    if n_points < required {
        return Err(Error::GridTooSmall { n_points, required });
    }

    if n_steps == 0 {
        output.buffer_mut().copy_from_slice(input.buffer());
        return Ok(());
    }
    for _ in 0..n_steps - 1 {
        step(stencil, input, output, chunk_size);
        std::mem::swap(input, output);
    }
    step(stencil, input, output, chunk_size);
    Ok(())
}
