//! Layout math for the four views, in surface pixel coordinates
//! (origin top-left, y down)

use crate::spectrum::analysis::display_magnitude;

/// Peak amplitude 1.0 spans this fraction of the surface height above and
/// below the center line
pub const TIME_SCALE: f64 = 0.42;

/// Tallest bar as a fraction of the surface height
pub const BAR_SCALE: f64 = 0.9;

/// Drawn bar width as a fraction of the bar slot
pub const BAR_FILL: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Project a time series onto a `width` x `height` surface
///
/// Sample i lands at x = ((i + offset) mod N) * width / (N - 1), so a
/// non-zero offset wraps the tail of the trace back to the left edge.
pub fn time_series_points(data: &[f64], offset: f64, width: f64, height: f64) -> Vec<Point> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }

    let step = if n > 1 { width / (n - 1) as f64 } else { 0.0 };
    let mid_y = height / 2.0;
    let scale_y = height * TIME_SCALE;

    data.iter()
        .enumerate()
        .map(|(i, &v)| Point {
            x: ((i as f64 + offset) % n as f64) * step,
            y: mid_y - v * scale_y,
        })
        .collect()
}

/// Bars for bins 0..=N/2, normalized to the tallest displayed bin
///
/// An all-zero spectrum yields zero-height bars.
pub fn magnitude_bars(magnitude: &[f64], width: f64, height: f64) -> Vec<Bar> {
    let shown = display_magnitude(magnitude);
    if shown.is_empty() {
        return Vec::new();
    }

    let mut max_mag = shown.iter().fold(0.0_f64, |acc, &m| acc.max(m));
    if max_mag == 0.0 {
        max_mag = 1.0;
    }

    let slot = width / shown.len() as f64;

    shown
        .iter()
        .enumerate()
        .map(|(k, &m)| {
            let bar_height = m / max_mag * (height * BAR_SCALE);
            Bar {
                x: k as f64 * slot,
                y: height - bar_height,
                width: slot * BAR_FILL,
                height: bar_height,
            }
        })
        .collect()
}
