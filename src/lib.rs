//! Kinetic is a scroll-driven animation engine.
//!
//! It turns one scalar input per animation frame (scroll position, progress or velocity) into
//! the visual state of three recurring effects:
//!
//! 1. **Drift marquee**: an endless horizontal strip whose speed and direction follow scroll
//!    velocity, settling back to a constant base drift when the page is idle.
//! 2. **Scrubbed carousel**: N panels arranged around a fractional active step; every panel's
//!    offset, scale, opacity, rotation and stacking order is a pure function of its distance to
//!    that step.
//! 3. **Threshold tabs**: a discrete category index picked by where progress falls between
//!    breakpoints.
//!
//! The design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure per-tick mappers**: only the velocity smoother and the drift accumulator carry
//!   state between frames; everything else is recomputed from the current input.
//! - **Total at runtime**: non-finite inputs, oversized frame deltas and out-of-range progress
//!   are clamped or extrapolated. Configuration is validated once, at construction.
//! - **Frame-rate independent**: the spring filter is integrated in closed form and the drift
//!   is linear in `dt`.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]

mod animation;
mod carousel;
mod config;
mod drift;
mod foundation;
mod frame;
mod scene;
mod scroll;
mod signal;
mod tabs;

/// Standalone walkthrough of Kinetic's concepts and API.
pub mod guide;

pub use animation::curve::{Curve, CurveKey};
pub use animation::ease::Ease;
pub use carousel::layout::{
    CarouselConfig, RenderTransform, draw_order, layout_panels, panel_transform, progress_to_step,
    topmost,
};
pub use config::EngineConfig;
pub use drift::marquee::{DriftState, MarqueeConfig, VelocityResponse, WrapBounds, advance_drift};
pub use foundation::core::{Affine, Direction, Vec2};
pub use foundation::error::{KineticError, KineticResult};
pub use foundation::math::{clamp01, lerp, smoothstep, wrap_euclid};
pub use frame::clock::{ClockConfig, FrameClock, FrameTick};
pub use frame::scheduler::{
    CallbackId, FrameCallback, FrameScheduler, FrameSubscription, ManualScheduler,
};
pub use scene::driver::{
    Carousel, CarouselFrame, KineticScene, MarqueeDriver, MarqueeFrame, SceneFrame, TabStrip,
    mount,
};
pub use scroll::sample::{ScrollRegion, ScrollSample, VelocityEstimator};
pub use signal::smoother::{Smoother, SmootherState, SpringConfig};
pub use tabs::threshold::{Breakpoints, TabsConfig, active_index};
