//! Tunable rendering parameters.
//!
//! Every field defaults to the value the reference drawing uses, so
//! `RenderOptions::default()` reproduces it exactly.

use groundplan_core::{ConfigError, RenderOverrides};

/// Pixels per foot in the reference drawing.
pub const DEFAULT_SCALE: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Pixels per foot. Must be positive.
    pub scale: f64,
    /// Corner radius (px) for rooms and stairs.
    pub room_radius: f64,
    /// Corner radius (px) for halls.
    pub hall_radius: f64,
    /// Font size (px) of the label centered in each space.
    pub label_font_size: f64,
    /// Font size (px) of dimension captions.
    pub dimension_font_size: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            room_radius: 4.0,
            hall_radius: 6.0,
            label_font_size: 12.0,
            dimension_font_size: 11.0,
        }
    }
}

impl RenderOptions {
    /// Defaults with a different scale.
    pub fn with_scale(scale: f64) -> Result<Self, ConfigError> {
        let options = Self {
            scale,
            ..Self::default()
        };
        options.validate()?;
        Ok(options)
    }

    /// Apply the set fields of a plan file's `[render]` table.
    pub fn with_overrides(mut self, overrides: &RenderOverrides) -> Result<Self, ConfigError> {
        if let Some(scale) = overrides.scale {
            self.scale = scale;
        }
        if let Some(radius) = overrides.room_radius {
            self.room_radius = radius;
        }
        if let Some(radius) = overrides.hall_radius {
            self.hall_radius = radius;
        }
        if let Some(size) = overrides.label_font_size {
            self.label_font_size = size;
        }
        if let Some(size) = overrides.dimension_font_size {
            self.dimension_font_size = size;
        }
        self.validate()?;
        Ok(self)
    }

    /// Scale and font sizes must be finite and positive; radii finite and
    /// non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::InvalidScale { value: self.scale });
        }
        for (name, value) in [
            ("room_radius", self.room_radius),
            ("hall_radius", self.hall_radius),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidRenderOption {
                    name,
                    expected: "a finite, non-negative radius",
                    value,
                });
            }
        }
        for (name, value) in [
            ("label_font_size", self.label_font_size),
            ("dimension_font_size", self.dimension_font_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidRenderOption {
                    name,
                    expected: "a finite, positive font size",
                    value,
                });
            }
        }
        Ok(())
    }

    /// Convert a length in feet to pixels.
    #[inline]
    pub fn px(&self, feet: f64) -> f64 {
        feet * self.scale
    }
}
