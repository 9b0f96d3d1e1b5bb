//! Render settings loaded from TOML
//!
//! Every key is optional; missing keys take the A4 / 150 DPI defaults.
//!
//! ```toml
//! font_size = 13.0
//! dpi = 150.0
//!
//! [canvas]
//! width = 1240.0
//! height = 1754.0
//! margin = 40.0
//! line_height = 22.0
//! ```

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::layout::Canvas;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub canvas: Canvas,
    /// Font size in canvas units
    pub font_size: f64,
    /// Canvas units per inch
    pub dpi: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            font_size: 13.0,
            dpi: 150.0,
        }
    }
}

impl RenderConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or the values describe an unusable page.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read render config: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid render config: {}", path.display()))
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.dpi > 0.0, "dpi must be positive, got {}", self.dpi);
        ensure!(
            self.font_size > 0.0,
            "font_size must be positive, got {}",
            self.font_size
        );
        ensure!(
            self.canvas.line_height > 0.0,
            "canvas.line_height must be positive"
        );
        ensure!(
            self.canvas.usable_width() > 0.0,
            "canvas margins leave no usable width ({} wide, {} margin)",
            self.canvas.width,
            self.canvas.margin
        );
        Ok(())
    }
}
