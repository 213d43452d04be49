//! Stateful orchestrator behind the live views
//!
//! Parameter changes recompute the whole pipeline and then render;
//! animation ticks only move the scroll offset and redraw the time views.

use super::animation::ScrollAnimator;
use super::controls::ControlSettings;
use super::state::{Pipeline, PipelineState};
use crate::error::Result;
use crate::render::{self, Renderer};
use std::sync::Arc;

/// Snapshot handed to a renderer on another thread
#[derive(Debug, Clone)]
pub struct Frame {
    pub state: Arc<PipelineState>,
    pub scroll_offset: f64,
}

/// Visualizer: controls, the current pipeline snapshot and the scroll offset
pub struct Visualizer {
    pipeline: Pipeline,

    /// Settings the current snapshot was computed from
    settings: ControlSettings,

    /// Replaced wholesale on every recompute, never mutated in place
    state: Arc<PipelineState>,

    scroll: ScrollAnimator,
}

impl Visualizer {
    /// Create a visualizer with the default controls
    pub fn new() -> Result<Self> {
        Self::with_settings(ControlSettings::default())
    }

    /// Create a visualizer and run the initial recompute
    pub fn with_settings(settings: ControlSettings) -> Result<Self> {
        let pipeline = Pipeline::new();
        let state = Self::run(&pipeline, &settings)?;

        Ok(Self {
            pipeline,
            settings,
            state: Arc::new(state),
            scroll: ScrollAnimator::new(),
        })
    }

    fn run(pipeline: &Pipeline, settings: &ControlSettings) -> Result<PipelineState> {
        settings.validate()?;
        pipeline.recompute(settings.waveform, &settings.generator_params(), &settings.filter_spec())
    }

    /// Apply a control change and recompute everything
    ///
    /// On error the previous settings and snapshot stay in place.
    pub fn update<F>(&mut self, change: F) -> Result<()>
    where
        F: FnOnce(&mut ControlSettings),
    {
        let mut next = self.settings.clone();
        change(&mut next);
        self.apply(next)
    }

    /// Apply a control change, recompute, then draw all four views
    pub fn update_and_render<F, R>(&mut self, change: F, renderer: &mut R) -> Result<()>
    where
        F: FnOnce(&mut ControlSettings),
        R: Renderer + ?Sized,
    {
        self.update(change)?;
        self.render(renderer);
        Ok(())
    }

    /// Recompute with unchanged settings (fresh noise draws)
    pub fn regenerate(&mut self) -> Result<()> {
        self.apply(self.settings.clone())
    }

    /// Restore the default controls, rewind the scroll offset and recompute
    pub fn reset(&mut self) -> Result<()> {
        let mut next = self.settings.clone();
        next.reset();
        self.apply(next)?;
        self.scroll.reset();

        tracing::info!("visualizer reset to defaults");
        Ok(())
    }

    fn apply(&mut self, settings: ControlSettings) -> Result<()> {
        let state = Self::run(&self.pipeline, &settings)?;
        self.settings = settings;
        self.state = Arc::new(state);
        Ok(())
    }

    /// Advance the scroll offset by one animation tick
    pub fn tick(&mut self) -> f64 {
        self.scroll.advance(self.settings.scroll_speed())
    }

    /// Advance one tick and redraw the time views only
    pub fn tick_and_render<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        let offset = self.tick();
        render::draw_time_views(renderer, &self.state, offset);
    }

    /// Draw all four views from the current snapshot
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        render::draw_frame(renderer, &self.state, self.scroll.offset());
    }

    pub fn settings(&self) -> &ControlSettings {
        &self.settings
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Arc<PipelineState> {
        Arc::clone(&self.state)
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Snapshot and scroll offset taken together
    pub fn frame(&self) -> Frame {
        Frame {
            state: self.snapshot(),
            scroll_offset: self.scroll.offset(),
        }
    }
}
