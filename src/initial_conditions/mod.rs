//! Initial-condition profiles.
//!
//! Use `DomainView::par_set_values` for custom needs.

use crate::domain::*;
use rand::prelude::*;
use rayon::prelude::*;

/// Square wave: `baseline` everywhere, `elevated` on the coordinate
/// range covering `[x_lo, x_hi]` given spacing `dx`. The index range is
/// floor(x_lo / dx) ..= floor(x_hi / dx), so on 41 points over [0, 2]
/// the classic hat of 2.0 between x = 0.5 and x = 1.0 lands on
/// indices 10 through 20 inclusive.
pub fn step_ic_1d<DomainType: DomainView>(
    domain: &mut DomainType,
    baseline: f64,
    elevated: f64,
    x_lo: f64,
    x_hi: f64,
    dx: f64,
    chunk_size: usize,
) {
    let lo = (x_lo / dx).floor() as i32;
    let hi = (x_hi / dx).floor() as i32;
    domain.par_set_values(
        |coord| {
            if coord >= lo && coord <= hi {
                elevated
            } else {
                baseline
            }
        },
        chunk_size,
    );
}

/// Generate normal like distribution over the interval with a spike in
/// the middle, all values in [0, 1].
pub fn normal_ic_1d<DomainType: DomainView>(
    domain: &mut DomainType,
    chunk_size: usize,
) {
    let n_f = domain.interval().buffer_size() as f64;
    let sigma_sq: f64 = (n_f / 25.0) * (n_f / 25.0);
    let min = domain.interval().min();
    let ic_gen = move |coord: i32| {
        let x = (coord - min) as f64 - (n_f / 2.0);
        let exp = -x * x / (2.0 * sigma_sq);
        exp.exp()
    };
    domain.par_set_values(ic_gen, chunk_size);
}

/// Uniform noise in [lo, hi), handy for exposing how the scheme treats
/// content at every frequency.
pub fn noise_ic_1d<DomainType: DomainView>(
    domain: &mut DomainType,
    lo: f64,
    hi: f64,
    chunk_size: usize,
) {
    domain.par_modify_access(chunk_size).for_each(
        |mut d: DomainChunk<'_>| {
            let mut rng = rand::thread_rng();
            d.coord_iter_mut().for_each(|(_, value_mut)| {
                *value_mut = lo + (hi - lo) * rng.gen::<f64>();
            })
        },
    );
}
