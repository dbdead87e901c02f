//! # Kinetic guide
//!
//! A short tour of the moving parts, in the order a frame flows through them.
//!
//! ---
//!
//! ## Frames and time
//!
//! Hosts deliver frames at whatever rate they can. [`FrameClock`](crate::FrameClock) converts
//! host timestamps into a [`FrameTick`](crate::FrameTick) whose `dt` is clamped to
//! [`ClockConfig`](crate::ClockConfig)'s `[min_dt, max_dt]`. A tab that was backgrounded for a
//! minute resumes with one `max_dt` step instead of a minute-long jump.
//!
//! Frame callbacks are registered through [`FrameSubscription`](crate::FrameSubscription). The
//! guard deregisters on drop, so unmounting a visual (dropping its subscription) is the whole
//! teardown. [`ManualScheduler`](crate::ManualScheduler) is the in-process scheduler used for
//! simulation and tests.
//!
//! ---
//!
//! ## Velocity smoothing
//!
//! Raw scroll velocity is noisy. [`SpringConfig::smooth`](crate::SpringConfig::smooth) runs it
//! through a critically-damped spring:
//!
//! ```text
//! x'' = -k (x - raw) - c x'        with c >= 2 sqrt(k)
//! ```
//!
//! The step is solved in closed form, so the result does not depend on how a second of input is
//! sliced into frames. The state is just `(value, rate)`: [`SmootherState`](crate::SmootherState).
//!
//! ---
//!
//! ## Drift
//!
//! [`advance_drift`](crate::advance_drift) moves an unbounded accumulator by
//! `direction * base_speed * dt * multiplier`. The multiplier rises with smoothed speed and
//! saturates below [`VelocityResponse::max_multiplier`](crate::VelocityResponse). Direction only
//! flips when velocity crosses zero by more than the dead band.
//!
//! The renderer wraps the accumulator with [`WrapBounds::wrap`](crate::WrapBounds::wrap):
//!
//! ```text
//! display = lower + ((position - lower) mod (upper - lower))      mod >= 0
//! ```
//!
//! Wrapping never writes back, so there is no seam error to accumulate.
//!
//! ---
//!
//! ## Carousel
//!
//! Progress maps to a continuous active step, `progress * (N - 1)`. Each panel's transform is
//! evaluated from `d = index - step` alone:
//!
//! - translate and rotation: keyed [`Curve`](crate::Curve)s, smoothstep between keys, linear
//!   past the outermost key
//! - scale: `1 - scale_step * |d|`, floored
//! - opacity: 1 on the plateau, smooth falloff to the floor at the cutoff
//! - stack order: `floor(base - stack_step |d|)`; [`draw_order`](crate::draw_order) resolves ties by
//!   panel index
//!
//! ---
//!
//! ## Tabs
//!
//! [`Breakpoints`](crate::Breakpoints) are validated interior cuts of `[0, 1]`;
//! [`active_index`](crate::active_index) is a binary search over them.
//!
//! ---
//!
//! ## Putting it together
//!
//! [`KineticScene`](crate::KineticScene) owns a clock, a region, a marquee driver, a carousel
//! and a tab strip built from one [`EngineConfig`](crate::EngineConfig). Feed it
//! [`ScrollSample`](crate::ScrollSample)s and render each [`SceneFrame`](crate::SceneFrame), or
//! hand it to [`mount`](crate::mount) with a scheduler.
