//! Canvas configuration.

use serde::{Deserialize, Serialize};

/// Grid step in design units used for snapping (half of a 5mm grid cell).
pub const DEFAULT_GRID_STEP: f32 = 5.0;

/// Settings for an interactive card canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Snap step in design units.
    pub grid_step: f32,
    /// Round committed drag positions to the grid.
    pub snap_to_grid: bool,
    /// Draw the grid overlay in the preview.
    pub show_grid: bool,
    /// Disable selection and every mutating operation.
    pub read_only: bool,
    /// Screen pixels per design unit.
    pub display_scale: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            grid_step: DEFAULT_GRID_STEP,
            snap_to_grid: true,
            show_grid: true,
            read_only: false,
            display_scale: 1.0,
        }
    }
}

impl CanvasConfig {
    /// Default configuration overlaid with `CARD_GRID_STEP`, `CARD_SNAP` and
    /// `CARD_READ_ONLY` from the environment. Unparseable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(step) = env_parse::<f32>("CARD_GRID_STEP").filter(|s| *s > 0.0) {
            config.grid_step = step;
        }
        if let Some(snap) = env_parse::<bool>("CARD_SNAP") {
            config.snap_to_grid = snap;
        }
        if let Some(read_only) = env_parse::<bool>("CARD_READ_ONLY") {
            config.read_only = read_only;
        }
        config
    }

    /// A read-only preview configuration.
    #[must_use]
    pub fn preview() -> Self {
        Self {
            read_only: true,
            show_grid: false,
            ..Self::default()
        }
    }

    /// Set the snap step.
    #[must_use]
    pub fn with_grid_step(mut self, step: f32) -> Self {
        self.grid_step = step;
        self
    }

    /// Enable or disable snapping.
    #[must_use]
    pub fn with_snap(mut self, snap: bool) -> Self {
        self.snap_to_grid = snap;
        self
    }

    /// Enable or disable read-only mode.
    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Set the display scale.
    #[must_use]
    pub fn with_display_scale(mut self, scale: f32) -> Self {
        self.display_scale = scale;
        self
    }

    /// Round a coordinate to the grid if snapping is enabled.
    #[must_use]
    pub fn snap(&self, value: f32) -> f32 {
        if self.snap_to_grid && self.grid_step > 0.0 {
            (value / self.grid_step).round() * self.grid_step
        } else {
            value
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
