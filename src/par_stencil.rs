use crate::domain::*;
use crate::stencil::*;
use rayon::prelude::*;

fn gather_args<const NEIGHBORHOOD_SIZE: usize, DomainType: DomainView>(
    stencil: &Stencil<NEIGHBORHOOD_SIZE>,
    input: &DomainType,
    coord: i32,
) -> [f64; NEIGHBORHOOD_SIZE] {
    let mut result = [0.0; NEIGHBORHOOD_SIZE];
    for (i, offset) in stencil.offsets().iter().enumerate() {
        result[i] = input.view(coord + offset);
    }
    result
}

/// Write one stencil application into every coord of `output`,
/// reading exclusively from `input`. The output interval must be far
/// enough inside the input interval that all neighbor reads resolve.
pub fn apply<
    const NEIGHBORHOOD_SIZE: usize,
    InputType: DomainView,
    OutputType: DomainView,
>(
    stencil: &Stencil<NEIGHBORHOOD_SIZE>,
    input: &InputType,
    output: &mut OutputType,
    chunk_size: usize,
) {
    let (left, right) = stencil.slopes();
    debug_assert!(input.interval().contains(output.interval().min() - left));
    debug_assert!(input.interval().contains(output.interval().max() + right));
    output
        .par_modify_access(chunk_size)
        .for_each(|mut d: DomainChunk<'_>| {
            d.coord_iter_mut().for_each(
                |(coord, value_mut): (i32, &mut f64)| {
                    let args = gather_args(stencil, input, coord);
                    *value_mut = stencil.apply(&args);
                },
            )
        })
}
