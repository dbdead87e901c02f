//! Per-instance drivers and the composed scene.
//!
//! Each mounted visual owns one driver. [`KineticScene`] wires the three effects of a page to a
//! single scroll stream and reports everything the renderer needs as a [`SceneFrame`].

use std::{cell::RefCell, rc::Rc};

use crate::{
    carousel::layout::{CarouselConfig, RenderTransform, draw_order, layout_panels, progress_to_step},
    config::EngineConfig,
    drift::marquee::{DriftState, MarqueeConfig},
    foundation::core::Direction,
    foundation::error::KineticResult,
    frame::clock::{FrameClock, FrameTick},
    frame::scheduler::{FrameScheduler, FrameSubscription},
    scroll::sample::{ScrollRegion, ScrollSample, VelocityEstimator},
    signal::smoother::Smoother,
    tabs::threshold::Breakpoints,
};

/// Marquee output for one tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarqueeFrame {
    pub raw_velocity: f64,
    pub smoothed_velocity: f64,
    /// Unbounded accumulator.
    pub position: f64,
    /// `position` wrapped into the configured band.
    pub display: f64,
    pub direction: Direction,
}

/// Smoother + drift for one mounted marquee.
#[derive(Clone, Debug)]
pub struct MarqueeDriver {
    config: MarqueeConfig,
    smoother: Smoother,
    drift: DriftState,
    velocity: VelocityEstimator,
}

impl MarqueeDriver {
    pub fn new(config: MarqueeConfig) -> KineticResult<Self> {
        config.validate()?;
        Ok(Self {
            smoother: Smoother::new(config.spring),
            config,
            drift: DriftState::new(),
            velocity: VelocityEstimator::new(),
        })
    }

    /// Advance from an instantaneous velocity sample (px/s).
    pub fn step(&mut self, raw_velocity: f64, dt: f64) -> MarqueeFrame {
        let smoothed_velocity = self.smoother.update(raw_velocity, dt);
        self.drift = self.config.advance(smoothed_velocity, dt, self.drift);
        MarqueeFrame {
            raw_velocity,
            smoothed_velocity,
            position: self.drift.position,
            display: self.drift.display(&self.config.wrap),
            direction: self.drift.direction,
        }
    }

    /// Advance from a scroll position, deriving velocity from the previous one.
    ///
    /// Velocity uses the unclamped `elapsed` time; frames without elapsed time hold the last
    /// estimate.
    pub fn observe(&mut self, scroll_px: f64, tick: FrameTick) -> MarqueeFrame {
        let raw_velocity = self.velocity.observe(scroll_px, tick.elapsed);
        self.step(raw_velocity, tick.dt)
    }

    pub fn drift(&self) -> DriftState {
        self.drift
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Back to the mount state.
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.drift = DriftState::new();
        self.velocity.reset();
    }
}

/// Carousel output for one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarouselFrame {
    pub active_step: f64,
    pub panels: Vec<RenderTransform>,
    /// Back-to-front paint order.
    pub draw_order: Vec<usize>,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    config: CarouselConfig,
    panel_count: usize,
}

impl Carousel {
    pub fn new(config: CarouselConfig, panel_count: usize) -> KineticResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            panel_count,
        })
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn frame(&self, progress: f64) -> CarouselFrame {
        let active_step = progress_to_step(progress, self.panel_count);
        let panels = layout_panels(active_step, self.panel_count, &self.config);
        let draw_order = draw_order(&panels);
        CarouselFrame {
            active_step,
            panels,
            draw_order,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TabStrip {
    breakpoints: Breakpoints,
}

impl TabStrip {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self { breakpoints }
    }

    pub fn active(&self, progress: f64) -> usize {
        self.breakpoints.active_index(progress)
    }

    pub fn category_count(&self) -> usize {
        self.breakpoints.category_count()
    }
}

/// Everything a page renders for one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneFrame {
    pub time_secs: f64,
    pub dt: f64,
    pub scroll_px: f64,
    pub progress: f64,
    pub marquee: MarqueeFrame,
    pub carousel: CarouselFrame,
    pub active_tab: usize,
}

/// Marquee, carousel and tabs of one page, fed by one scroll stream.
#[derive(Clone, Debug)]
pub struct KineticScene {
    clock: FrameClock,
    region: ScrollRegion,
    marquee: MarqueeDriver,
    carousel: Carousel,
    tabs: TabStrip,
}

impl KineticScene {
    #[tracing::instrument(skip(config), fields(panels = config.panel_count))]
    pub fn new(config: &EngineConfig) -> KineticResult<Self> {
        config.validate()?;
        Ok(Self {
            clock: FrameClock::new(config.clock),
            region: config.region,
            marquee: MarqueeDriver::new(config.marquee)?,
            carousel: Carousel::new(config.carousel.clone(), config.panel_count)?,
            tabs: TabStrip::new(config.tabs.breakpoints.clone()),
        })
    }

    /// Consume one scroll sample and produce the frame to render.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, sample: ScrollSample) -> SceneFrame {
        let tick = self.clock.tick(sample.time_secs);
        let marquee = self.marquee.observe(sample.scroll_px, tick);
        let progress = self.region.progress(sample.scroll_px);
        SceneFrame {
            time_secs: tick.time_secs,
            dt: tick.dt,
            scroll_px: sample.scroll_px,
            progress,
            marquee,
            carousel: self.carousel.frame(progress),
            active_tab: self.tabs.active(progress),
        }
    }

    /// Run a whole recorded trace.
    pub fn run(&mut self, samples: &[ScrollSample]) -> Vec<SceneFrame> {
        samples.iter().map(|s| self.tick(*s)).collect()
    }

    pub fn reset(&mut self) {
        self.clock.reset();
        self.marquee.reset();
    }
}

/// Drive `scene` from `scheduler` until the returned subscription is dropped.
///
/// Each frame reads the current scroll position from `read_scroll` and hands the result to
/// `render`.
pub fn mount<'s, S: FrameScheduler + ?Sized>(
    scheduler: &'s S,
    scene: Rc<RefCell<KineticScene>>,
    mut read_scroll: impl FnMut() -> f64 + 'static,
    mut render: impl FnMut(&SceneFrame) + 'static,
) -> FrameSubscription<'s, S> {
    FrameSubscription::new(scheduler, move |now| {
        let sample = ScrollSample::new(now, read_scroll());
        let frame = scene.borrow_mut().tick(sample);
        render(&frame);
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/driver.rs"]
mod tests;
