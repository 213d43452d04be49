//! Control-panel parameters and their defaults

use crate::error::{check_finite, Result};
use crate::filters::{FilterSpec, FilterType};
use crate::signal::{GeneratorParams, Waveform};

/// Full-scale position of the scroll-speed slider
pub const SCROLL_SLIDER_MAX: f64 = 100.0;

/// Everything the control panel can change
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSettings {
    /// Waveform selector
    pub waveform: Waveform,

    /// Base frequency f0 in Hz
    pub base_freq: f64,

    /// Second frequency f1 in Hz (two-tone only)
    pub second_freq: f64,

    /// Extra noise layer toggle
    pub add_noise: bool,

    /// Filter type selector
    pub filter_type: FilterType,

    /// Lowpass/highpass cutoff in Hz
    pub cutoff: f64,

    /// Bandpass edge in Hz (may exceed `high_cutoff`)
    pub low_cutoff: f64,

    /// Bandpass edge in Hz
    pub high_cutoff: f64,

    /// Scroll-speed slider position, 0 to 100
    pub scroll_slider: f64,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            waveform: Waveform::Sine,
            base_freq: 5.0,
            second_freq: 20.0,
            add_noise: false,
            filter_type: FilterType::Lowpass,
            cutoff: 20.0,
            low_cutoff: 10.0,
            high_cutoff: 40.0,
            scroll_slider: 35.0,
        }
    }
}

impl ControlSettings {
    /// Restore the defaults, keeping the current waveform selection
    pub fn reset(&mut self) {
        *self = Self {
            waveform: self.waveform,
            ..Self::default()
        };
    }

    pub fn generator_params(&self) -> GeneratorParams {
        GeneratorParams {
            base_freq: self.base_freq,
            second_freq: self.second_freq,
            add_noise: self.add_noise,
        }
    }

    /// Filter spec for the selected type; the unused cutoff fields are ignored
    pub fn filter_spec(&self) -> FilterSpec {
        match self.filter_type {
            FilterType::Lowpass => FilterSpec::lowpass(self.cutoff),
            FilterType::Highpass => FilterSpec::highpass(self.cutoff),
            FilterType::Bandpass => FilterSpec::bandpass(self.low_cutoff, self.high_cutoff),
        }
    }

    /// Scroll multiplier, slider 0–100 mapped to 0–1
    pub fn scroll_speed(&self) -> f64 {
        self.scroll_slider / SCROLL_SLIDER_MAX
    }

    pub fn validate(&self) -> Result<()> {
        check_finite("base_freq", self.base_freq)?;
        check_finite("second_freq", self.second_freq)?;
        check_finite("cutoff", self.cutoff)?;
        check_finite("low_cutoff", self.low_cutoff)?;
        check_finite("high_cutoff", self.high_cutoff)?;
        check_finite("scroll_slider", self.scroll_slider)?;
        Ok(())
    }
}
