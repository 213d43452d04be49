//! Rendering capability
//!
//! The core never draws. A host implements [`Renderer`] for its drawing
//! surface and receives the buffers of each view; [`geometry`] holds the
//! layout math shared by hosts.

pub mod geometry;

pub use geometry::{magnitude_bars, time_series_points, Bar, Point};

use crate::pipeline::PipelineState;
use std::fmt;

/// The four live views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    TimeOriginal,
    TimeFiltered,
    FrequencyOriginal,
    FrequencyFiltered,
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    /// CSS hex form, e.g. `#4ea8ff`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Color of the unfiltered views
pub const ORIGINAL_COLOR: Color = Color::rgb(0x4e, 0xa8, 0xff);

/// Color of the filtered views
pub const FILTERED_COLOR: Color = Color::rgb(0xff, 0x7e, 0xb3);

/// Drawing surface supplied by the host
pub trait Renderer {
    /// Draw a time series, shifted right by `offset` samples (wrapping)
    fn draw_time_series(&mut self, view: View, data: &[f64], color: Color, offset: f64);

    /// Draw magnitude bars; only bins 0..=N/2 are meant to be shown
    fn draw_magnitude_bars(&mut self, view: View, magnitude: &[f64], color: Color);
}

/// Redraw both time-domain views (animation ticks)
pub fn draw_time_views<R: Renderer + ?Sized>(renderer: &mut R, state: &PipelineState, offset: f64) {
    renderer.draw_time_series(View::TimeOriginal, state.signal.as_slice(), ORIGINAL_COLOR, offset);
    renderer.draw_time_series(View::TimeFiltered, state.filtered_signal.as_slice(), FILTERED_COLOR, offset);
}

/// Redraw all four views (after a recompute)
pub fn draw_frame<R: Renderer + ?Sized>(renderer: &mut R, state: &PipelineState, offset: f64) {
    draw_time_views(renderer, state, offset);
    renderer.draw_magnitude_bars(View::FrequencyOriginal, state.spectrum.magnitude(), ORIGINAL_COLOR);
    renderer.draw_magnitude_bars(
        View::FrequencyFiltered,
        state.filtered_spectrum.magnitude(),
        FILTERED_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(ORIGINAL_COLOR.to_string(), "#4ea8ff");
        assert_eq!(FILTERED_COLOR.to_string(), "#ff7eb3");
    }
}
