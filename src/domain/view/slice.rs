use super::*;
use crate::util::*;

pub struct SliceDomain<'a> {
    interval: Interval,
    buffer: &'a mut [f64],
}

impl<'a> SliceDomain<'a> {
    pub fn new(interval: Interval, buffer: &'a mut [f64]) -> Self {
        debug_assert!(buffer.len() >= interval.buffer_size());
        SliceDomain { interval, buffer }
    }
}

impl DomainView for SliceDomain<'_> {
    fn interval(&self) -> &Interval {
        &self.interval
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer[0..self.interval.buffer_size()]
    }

    fn buffer_mut(&mut self) -> &mut [f64] {
        let range = 0..self.interval.buffer_size();
        &mut self.buffer[range]
    }

    fn interval_buffer_mut(&mut self) -> (&Interval, &mut [f64]) {
        (&self.interval, self.buffer)
    }

    #[track_caller]
    fn view(&self, coord: i32) -> f64 {
        debug_assert!(
            self.interval.contains(coord),
            "{} does not contain {}",
            self.interval,
            coord
        );
        let index = self.interval.coord_to_linear(coord);
        self.buffer[index]
    }

    #[track_caller]
    fn set_coord(&mut self, coord: i32, value: f64) {
        debug_assert!(
            self.interval.contains(coord),
            "{} does not contain {}",
            self.interval,
            coord
        );
        let index = self.interval.coord_to_linear(coord);
        self.buffer[index] = value;
    }
}
