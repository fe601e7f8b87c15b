use crate::util::*;

/// A chunk of a domain's buffer handed to one rayon task,
/// remembering where in the interval it starts.
pub struct DomainChunk<'a> {
    offset: usize,
    interval: &'a Interval,
    buffer: &'a mut [f64],
}

impl<'a> DomainChunk<'a> {
    pub fn new(
        offset: usize,
        interval: &'a Interval,
        buffer: &'a mut [f64],
    ) -> Self {
        DomainChunk {
            offset,
            interval,
            buffer,
        }
    }

    pub fn coord_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (i32, &mut f64)> {
        self.buffer
            .iter_mut()
            .enumerate()
            .map(|(i, v): (usize, &mut f64)| {
                let linear_index = self.offset + i;
                let coord = self.interval.linear_to_coord(linear_index);
                (coord, v)
            })
    }
}
