//! Scroll-scrubbed panel carousel.
//!
//! Every panel's transform is computed from scratch out of its signed distance to the
//! fractional active step. Nothing is carried between ticks, so a fling that reverses
//! mid-transition lands on exactly the layout a slow scroll to the same progress would.

use std::cmp::Reverse;

use crate::{
    animation::{curve::Curve, ease::Ease},
    foundation::core::{Affine, Vec2},
    foundation::error::{KineticError, KineticResult},
    foundation::math::{finite_or, smoothstep},
};

/// Visual state of one panel for one tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderTransform {
    /// Offset in percent of the panel's own size.
    pub translate: Vec2,
    pub scale: f64,
    pub opacity: f64,
    /// Degrees.
    pub rotate_y: f64,
    /// Degrees.
    pub rotate_z: f64,
    /// Higher is drawn in front.
    pub stack_order: u32,
}

impl RenderTransform {
    /// The transform of a panel sitting exactly on the active step.
    pub fn neutral(stack_order: u32) -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            opacity: 1.0,
            rotate_y: 0.0,
            rotate_z: 0.0,
            stack_order,
        }
    }

    /// Flatten to a 2D affine for a panel of `size` pixels, pivoting on its center.
    ///
    /// `rotate_y` is approximated by horizontal foreshortening.
    pub fn to_affine(&self, size: Vec2) -> Affine {
        let offset = Vec2::new(
            self.translate.x / 100.0 * size.x,
            self.translate.y / 100.0 * size.y,
        );
        let center = size * 0.5;
        let squash = self.rotate_y.to_radians().cos().abs();

        Affine::translate(offset)
            * Affine::translate(center)
            * Affine::rotate(self.rotate_z.to_radians())
            * Affine::scale_non_uniform(self.scale * squash, self.scale)
            * Affine::translate(-center)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub translate_x: Curve,
    pub translate_y: Curve,
    pub rotate_y: Curve,
    pub rotate_z: Curve,
    /// Scale lost per unit of distance.
    pub scale_step: f64,
    pub scale_floor: f64,
    /// Opacity stays at 1 while `|d| <= opacity_plateau`.
    pub opacity_plateau: f64,
    /// Opacity reaches `opacity_floor` once `|d| >= opacity_cutoff`.
    pub opacity_cutoff: f64,
    pub opacity_floor: f64,
    pub stack_base: f64,
    /// Stack order lost per unit of distance; an even integer.
    pub stack_step: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            translate_x: Curve::odd(&[(1.0, 62.0), (2.0, 100.0)], Ease::Smoothstep),
            translate_y: Curve::even(&[(1.0, 6.0), (2.0, 10.0)], Ease::Smoothstep),
            rotate_y: Curve::odd(&[(1.0, -38.0), (2.0, -55.0)], Ease::Smoothstep),
            rotate_z: Curve::odd(&[(1.0, 3.0), (2.0, 5.0)], Ease::Smoothstep),
            scale_step: 0.15,
            scale_floor: 0.6,
            opacity_plateau: 0.4,
            opacity_cutoff: 0.6,
            opacity_floor: 0.0,
            stack_base: 100.0,
            stack_step: 10.0,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> KineticResult<()> {
        for (name, curve) in [
            ("translate_x", &self.translate_x),
            ("translate_y", &self.translate_y),
            ("rotate_y", &self.rotate_y),
            ("rotate_z", &self.rotate_z),
        ] {
            curve
                .validate()
                .map_err(|e| KineticError::config(format!("carousel {name}: {e}")))?;
            if !curve.is_neutral_at_origin() {
                return Err(KineticError::config(format!(
                    "carousel {name} must be 0 at distance 0"
                )));
            }
        }
        if !self.scale_step.is_finite() || self.scale_step < 0.0 {
            return Err(KineticError::config("carousel scale_step must be finite and >= 0"));
        }
        if !(self.scale_floor > 0.0 && self.scale_floor <= 1.0) {
            return Err(KineticError::config("carousel scale_floor must be in (0, 1]"));
        }
        if !(self.opacity_plateau >= 0.0 && self.opacity_plateau < self.opacity_cutoff)
            || !self.opacity_cutoff.is_finite()
        {
            return Err(KineticError::config(
                "carousel opacity needs 0 <= plateau < cutoff",
            ));
        }
        if !(0.0..=1.0).contains(&self.opacity_floor) {
            return Err(KineticError::config("carousel opacity_floor must be in [0, 1]"));
        }
        if !self.stack_base.is_finite() || self.stack_base < 0.0 {
            return Err(KineticError::config("carousel stack_base must be finite and >= 0"));
        }
        // An even integer step keeps floor(base - step * |d|) strictly ordered by distance.
        let step = self.stack_step;
        if !(step.is_finite() && step >= 2.0 && step % 2.0 == 0.0) {
            return Err(KineticError::config(
                "carousel stack_step must be an even integer >= 2",
            ));
        }
        Ok(())
    }

    /// [`layout_panels`] with this config.
    pub fn layout(&self, active_step_fraction: f64, panel_count: usize) -> Vec<RenderTransform> {
        layout_panels(active_step_fraction, panel_count, self)
    }

    fn scale_at(&self, distance: f64) -> f64 {
        (1.0 - self.scale_step * distance).max(self.scale_floor)
    }

    fn opacity_at(&self, distance: f64) -> f64 {
        if distance <= self.opacity_plateau {
            return 1.0;
        }
        let fade = smoothstep(self.opacity_plateau, self.opacity_cutoff, distance);
        self.opacity_floor + (1.0 - self.opacity_floor) * (1.0 - fade)
    }

    fn stack_order_at(&self, distance: f64, base: f64) -> u32 {
        (base - distance * self.stack_step).floor().max(0.0) as u32
    }

    /// Base for `stack_order`, raised so the nominal domain never reaches the 0 clamp.
    fn stack_base_for(&self, panel_count: usize) -> f64 {
        self.stack_base
            .max(self.stack_step * panel_count as f64)
            .floor()
    }
}

/// Map scroll progress onto the continuous active step, `progress * (panel_count - 1)`.
///
/// Progress is not clamped; a fling past the region extrapolates.
pub fn progress_to_step(progress: f64, panel_count: usize) -> f64 {
    finite_or(progress, 0.0) * panel_count.saturating_sub(1) as f64
}

/// Transform for a single panel at `active_step_fraction`.
pub fn panel_transform(
    panel_index: usize,
    active_step_fraction: f64,
    panel_count: usize,
    config: &CarouselConfig,
) -> RenderTransform {
    let d = panel_index as f64 - finite_or(active_step_fraction, 0.0);
    let distance = d.abs();
    RenderTransform {
        translate: Vec2::new(config.translate_x.sample(d), config.translate_y.sample(d)),
        scale: config.scale_at(distance),
        opacity: config.opacity_at(distance),
        rotate_y: config.rotate_y.sample(d),
        rotate_z: config.rotate_z.sample(d),
        stack_order: config.stack_order_at(distance, config.stack_base_for(panel_count)),
    }
}

/// Lay out `panel_count` panels around the fractional active step.
pub fn layout_panels(
    active_step_fraction: f64,
    panel_count: usize,
    config: &CarouselConfig,
) -> Vec<RenderTransform> {
    (0..panel_count)
        .map(|i| panel_transform(i, active_step_fraction, panel_count, config))
        .collect()
}

/// Back-to-front paint order. Equal `stack_order` puts the lower panel index in front.
pub fn draw_order(transforms: &[RenderTransform]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..transforms.len()).collect();
    order.sort_by_key(|&i| (transforms[i].stack_order, Reverse(i)));
    order
}

/// Index of the panel painted last, if any.
pub fn topmost(transforms: &[RenderTransform]) -> Option<usize> {
    draw_order(transforms).last().copied()
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/layout.rs"]
mod tests;
