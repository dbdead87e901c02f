//! Engine-wide configuration.
//!
//! One [`EngineConfig`] describes a page: its scroll region, the marquee, the carousel and the
//! tab strip. Every field has a default, so a JSON document only needs the values a page
//! changes.

use std::io::Read;

use anyhow::Context as _;

use crate::{
    carousel::layout::CarouselConfig,
    drift::marquee::MarqueeConfig,
    foundation::error::{KineticError, KineticResult},
    frame::clock::ClockConfig,
    scroll::sample::ScrollRegion,
    tabs::threshold::TabsConfig,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub clock: ClockConfig,
    pub region: ScrollRegion,
    pub marquee: MarqueeConfig,
    pub carousel: CarouselConfig,
    pub tabs: TabsConfig,
    pub panel_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            clock: ClockConfig::default(),
            region: ScrollRegion::default(),
            marquee: MarqueeConfig::default(),
            carousel: CarouselConfig::default(),
            tabs: TabsConfig::default(),
            panel_count: 3,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> KineticResult<()> {
        self.clock.validate()?;
        self.region.validate()?;
        self.marquee.validate()?;
        self.carousel.validate()?;
        if self.marquee.spring.max_dt < self.clock.max_dt
            || self.marquee.response.max_dt < self.clock.max_dt
        {
            tracing::warn!(
                clock_max_dt = self.clock.max_dt,
                spring_max_dt = self.marquee.spring.max_dt,
                drift_max_dt = self.marquee.response.max_dt,
                "marquee step limits are tighter than the frame clock"
            );
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> KineticResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON document from a reader.
    ///
    /// Read failures surface as [`KineticError::Other`]; malformed JSON as
    /// [`KineticError::Serde`].
    pub fn from_reader(mut r: impl Read) -> KineticResult<Self> {
        let mut s = String::new();
        r.read_to_string(&mut s).context("read engine config")?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> KineticResult<String> {
        serde_json::to_string_pretty(self).map_err(KineticError::from)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
