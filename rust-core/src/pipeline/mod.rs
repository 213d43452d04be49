//! Pipeline orchestration: one-shot recompute, controls, scroll animation
//! and the stateful visualizer

pub mod state;
pub mod controls;
pub mod animation;
pub mod visualizer;

pub use state::{recompute, Pipeline, PipelineState};
pub use controls::ControlSettings;
pub use animation::ScrollAnimator;
pub use visualizer::{Frame, Visualizer};
