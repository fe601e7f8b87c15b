/// For linear stencils, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<
    const NEIGHBORHOOD_SIZE: usize,
    F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
>(
    f: F,
) -> [f64; NEIGHBORHOOD_SIZE] {
    let mut weights = [0.0; NEIGHBORHOOD_SIZE];
    let mut arg_buffer = [0.0; NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = 1.0;
        weights[n] = f(&arg_buffer);
        arg_buffer[n] = 0.0;
    }
    weights
}

/// A linear 1D stencil, viewed as a combination of
/// neighbor offsets and weights.
#[derive(Debug)]
pub struct Stencil<const NEIGHBORHOOD_SIZE: usize> {
    weights: [f64; NEIGHBORHOOD_SIZE],
    offsets: [i32; NEIGHBORHOOD_SIZE],
}

impl<const NEIGHBORHOOD_SIZE: usize> Stencil<NEIGHBORHOOD_SIZE> {
    pub fn new<F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64>(
        offsets: [i32; NEIGHBORHOOD_SIZE],
        operation: F,
    ) -> Self {
        let weights = extract_weights(operation);
        Stencil { offsets, weights }
    }

    pub fn weights(&self) -> &[f64; NEIGHBORHOOD_SIZE] {
        &self.weights
    }

    pub fn offsets(&self) -> &[i32; NEIGHBORHOOD_SIZE] {
        &self.offsets
    }

    /// How far the stencil reaches to the left and to the right
    /// of the point it updates.
    pub fn slopes(&self) -> (i32, i32) {
        let mut left = 0;
        let mut right = 0;
        for neighbor in self.offsets {
            if neighbor > 0 {
                right = right.max(neighbor);
            } else {
                left = left.max(-neighbor);
            }
        }
        (left, right)
    }

    pub fn apply(&self, args: &[f64; NEIGHBORHOOD_SIZE]) -> f64 {
        let mut result = 0.0;
        for n in 0..NEIGHBORHOOD_SIZE {
            result += self.weights[n] * args[n];
        }
        result
    }
}
