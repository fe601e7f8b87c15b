mod chunk;
mod owned;
mod slice;

pub use chunk::*;
pub use owned::*;
pub use slice::*;

use crate::util::*;
use rayon::prelude::*;

pub trait DomainView: Sync {
    fn interval(&self) -> &Interval;

    fn buffer(&self) -> &[f64];

    fn buffer_mut(&mut self) -> &mut [f64];

    fn interval_buffer_mut(&mut self) -> (&Interval, &mut [f64]);

    fn view(&self, coord: i32) -> f64;

    fn set_coord(&mut self, coord: i32, value: f64);

    fn par_modify_access<'a>(
        &'a mut self,
        chunk_size: usize,
    ) -> impl ParallelIterator<Item = DomainChunk<'a>> {
        let (interval, buffer) = self.interval_buffer_mut();
        par_modify_access_impl(buffer, interval, chunk_size)
    }

    fn par_set_values<F: Fn(i32) -> f64 + Send + Sync>(
        &mut self,
        f: F,
        chunk_size: usize,
    ) {
        self.par_modify_access(chunk_size).for_each(
            |mut d: DomainChunk<'_>| {
                d.coord_iter_mut().for_each(|(coord, value_mut)| {
                    *value_mut = f(coord);
                })
            },
        );
    }
}

/// Why not just put this into DomainView::par_modify_access?
/// Rust compiler can't figure out how to borrow interval and buffer
/// at the same time in this way.
/// By putting their borrows into one function call first we work around it.
fn par_modify_access_impl<'a>(
    buffer: &'a mut [f64],
    interval: &'a Interval,
    chunk_size: usize,
) -> impl ParallelIterator<Item = DomainChunk<'a>> + 'a {
    buffer[0..interval.buffer_size()]
        .par_chunks_mut(chunk_size)
        .enumerate()
        .map(move |(i, buffer_chunk): (usize, &mut [f64])| {
            let offset = i * chunk_size;
            DomainChunk::new(offset, interval, buffer_chunk)
        })
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn par_set_values_test() {
        let mut domain = OwnedDomain::new(Interval::new(0, 40));
        domain.par_set_values(|coord| coord as f64, 7);
        for coord in domain.interval().coord_iter() {
            assert_approx_eq!(f64, domain.view(coord), coord as f64);
        }
    }

    #[test]
    fn set_and_view_test() {
        let mut domain = OwnedDomain::new(Interval::new(0, 9));
        domain.set_coord(3, 2.0);
        assert_approx_eq!(f64, domain.view(3), 2.0);
        assert_approx_eq!(f64, domain.view(2), 0.0);
        assert_approx_eq!(f64, domain.buffer()[3], 2.0);
    }
}
