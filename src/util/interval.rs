/// Inclusive index range for a 1D sample buffer.
/// Both ends are part of the range.
/// This type is responsible for the indexing operations,
/// where we map between a linear buffer and grid coordinates.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct Interval {
    min: i32,
    max: i32,
}

impl std::fmt::Display for Interval {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl Interval {
    /// Create an interval from inclusive ends.
    #[inline]
    pub fn new(min: i32, max: i32) -> Self {
        debug_assert!(max >= min);
        Interval { min, max }
    }

    #[inline]
    pub fn min(&self) -> i32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        (self.max - self.min + 1) as usize
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: i32) -> bool {
        coord >= self.min && coord <= self.max
    }

    /// Remove `left` coordinates from the low end and `right` from the
    /// high end, e.g. the region a stencil can update without reading
    /// outside the instance.
    pub fn shrink(&self, left: i32, right: i32) -> Self {
        debug_assert!(left >= 0 && right >= 0);
        Interval::new(self.min + left, self.max - right)
    }

    /// Return the linear index for a coord in the instance.
    pub fn coord_to_linear(&self, coord: i32) -> usize {
        debug_assert!(self.contains(coord));
        (coord - self.min) as usize
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(&self, index: usize) -> i32 {
        self.min + index as i32
    }

    pub fn coord_iter(&self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn buffer_size_test() {
        assert_eq!(Interval::new(0, 40).buffer_size(), 41);
        assert_eq!(Interval::new(0, 0).buffer_size(), 1);
        assert_eq!(Interval::new(-3, 3).buffer_size(), 7);
    }

    #[test]
    fn indexing_round_trip() {
        let interval = Interval::new(-2, 7);
        for (i, c) in interval.coord_iter().enumerate() {
            assert_eq!(interval.coord_to_linear(c), i);
            assert_eq!(interval.linear_to_coord(i), c);
        }
    }

    #[test]
    fn contains_test() {
        let interval = Interval::new(0, 40);
        assert!(interval.contains(0));
        assert!(interval.contains(40));
        assert!(!interval.contains(-1));
        assert!(!interval.contains(41));
    }

    #[test]
    fn shrink_test() {
        let interval = Interval::new(0, 40);
        assert_eq!(interval.shrink(1, 0), Interval::new(1, 40));
        assert_eq!(interval.shrink(0, 2), Interval::new(0, 38));
    }
}
