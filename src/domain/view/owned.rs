use super::*;
use crate::util::*;

pub struct OwnedDomain {
    interval: Interval,
    buffer: Vec<f64>,
}

impl OwnedDomain {
    pub fn new(interval: Interval) -> Self {
        let buffer = vec![0.0; interval.buffer_size()];
        OwnedDomain { interval, buffer }
    }
}

impl DomainView for OwnedDomain {
    fn interval(&self) -> &Interval {
        &self.interval
    }

    fn buffer(&self) -> &[f64] {
        let range = 0..self.interval.buffer_size();
        &self.buffer[range]
    }

    fn buffer_mut(&mut self) -> &mut [f64] {
        let range = 0..self.interval.buffer_size();
        &mut self.buffer[range]
    }

    fn interval_buffer_mut(&mut self) -> (&Interval, &mut [f64]) {
        let range = 0..self.interval.buffer_size();
        (&self.interval, &mut self.buffer[range])
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
