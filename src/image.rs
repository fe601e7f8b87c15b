//! PNG output for the before/after line plots and for stacked
//! time-history rasters of a run.

use crate::util::*;

/// One row of pixels per recorded time level, colored by value.
pub struct TimeHistory {
    img_buffer: image::RgbImage,
    lo: f64,
    hi: f64,
}

impl TimeHistory {
    /// `lo` and `hi` fix the value range mapped onto the gradient so
    /// that every line is colored consistently.
    pub fn new(interval: Interval, lines: u32, lo: f64, hi: f64) -> Self {
        debug_assert!(hi > lo);
        TimeHistory {
            img_buffer: image::RgbImage::new(
                interval.buffer_size() as u32,
                lines,
            ),
            lo,
            hi,
        }
    }

    pub fn add_line(&mut self, l: u32, v: &[f64]) {
        debug_assert!(l < self.img_buffer.height());
        debug_assert_eq!(v.len(), self.img_buffer.width() as usize);
        let gradient = colorous::TURBO;
        for x in 0..self.img_buffer.width() {
            let r = ((v[x as usize] - self.lo) / (self.hi - self.lo))
                .clamp(0.0, 1.0);
            let c = gradient.eval_continuous(r);
            self.img_buffer.put_pixel(x, l, image::Rgb(c.as_array()));
        }
    }

    pub fn write<F: AsRef<std::path::Path>>(self, s: &F) {
        self.img_buffer.save(s).expect("Couldn't save image");
    }
}

/// Render one or more state vectors as curves over the x samples.
/// Series share the y scale and are colored from CATEGORY10.
pub fn line_plot<F: AsRef<std::path::Path>>(
    s: &F,
    xs: &[f64],
    series: &[&[f64]],
    width: u32,
    height: u32,
) {
    debug_assert!(xs.len() >= 2);
    let margin = 8.0;

    let x_lo = xs[0];
    let x_hi = xs[xs.len() - 1];
    let mut y_lo = f64::INFINITY;
    let mut y_hi = f64::NEG_INFINITY;
    for v in series {
        debug_assert_eq!(v.len(), xs.len());
        for y in *v {
            y_lo = y_lo.min(*y);
            y_hi = y_hi.max(*y);
        }
    }
    // Pad so flat profiles don't collapse the scale.
    let pad = 0.05 * (y_hi - y_lo).max(1.0);
    y_lo -= pad;
    y_hi += pad;

    let to_px = |x: f64, y: f64| -> (f64, f64) {
        let px = margin
            + (x - x_lo) / (x_hi - x_lo) * (width as f64 - 2.0 * margin);
        let py = margin
            + (y_hi - y) / (y_hi - y_lo) * (height as f64 - 2.0 * margin);
        (px, py)
    };

    let mut img_buffer = image::RgbImage::from_pixel(
        width,
        height,
        image::Rgb([255, 255, 255]),
    );
    for (k, v) in series.iter().enumerate() {
        let color = colorous::CATEGORY10[k % colorous::CATEGORY10.len()];
        let rgb = image::Rgb(color.as_array());
        for i in 1..xs.len() {
            let (x0, y0) = to_px(xs[i - 1], v[i - 1]);
            let (x1, y1) = to_px(xs[i], v[i]);
            let n = (x1 - x0).abs().max((y1 - y0).abs()).ceil() as usize + 1;
            for j in 0..=n {
                let t = j as f64 / n as f64;
                let px = (x0 + t * (x1 - x0)).round() as u32;
                let py = (y0 + t * (y1 - y0)).round() as u32;
                if px < width && py < height {
                    img_buffer.put_pixel(px, py, rgb);
                }
            }
        }
    }
    img_buffer.save(s).expect("Couldn't save image");
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn time_history_dimensions() {
        let hist = TimeHistory::new(Interval::new(0, 40), 26, 1.0, 2.0);
        assert_eq!(hist.img_buffer.width(), 41);
        assert_eq!(hist.img_buffer.height(), 26);
    }

    #[test]
    fn add_line_clamps_out_of_range_values() {
        let mut hist = TimeHistory::new(Interval::new(0, 2), 1, 0.0, 1.0);
        hist.add_line(0, &[-1.0, 0.5, 2.0]);
        let lo = colorous::TURBO.eval_continuous(0.0).as_array();
        let hi = colorous::TURBO.eval_continuous(1.0).as_array();
        assert_eq!(hist.img_buffer.get_pixel(0, 0).0, lo);
        assert_eq!(hist.img_buffer.get_pixel(2, 0).0, hi);
    }
}
