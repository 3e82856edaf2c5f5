//! Plan files: the serde form of a floor plan.
//!
//! A [`FloorPlanConfig`] is what a TOML or JSON file holds. It is not
//! trusted; [`FloorPlan::from_config`](crate::FloorPlan::from_config) checks it
//! and resolves every space's [`SpaceKind`] before anything is rendered.
//!
//! ```toml
//! title = "Ground Floor Arrangement"
//! ridge_height = 11.6
//!
//! [overall]
//! width = 34.0
//! height = 24.0
//!
//! [render]
//! scale = 12.0
//!
//! [[spaces]]
//! label = "Hall 24' × 12'"
//! kind = "hall"          # optional, inferred from the label when omitted
//! x = 11.0
//! y = 0.0
//! width = 12.0
//! height = 24.0
//! color = "#c7d2fe"
//! details = "Central double-height hall."
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::plan::Overall;
use crate::space::SpaceKind;

pub const DEFAULT_TITLE: &str = "Floor plan";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Raw plan as read from disk.
///
/// Field order matters for TOML output: plain values, then tables, then the
/// `[[spaces]]` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlanConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Ridge height in feet, shown as the last legend row.
    pub ridge_height: f64,
    pub overall: Overall,
    #[serde(default, skip_serializing_if = "RenderOverrides::is_empty")]
    pub render: RenderOverrides,
    #[serde(default)]
    pub spaces: Vec<SpaceConfig>,
}

/// One `[[spaces]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceConfig {
    pub label: String,
    /// Style variant. When absent it is inferred from the label prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SpaceKind>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `#rrggbb` or `#rgb`.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SpaceConfig {
    /// The declared kind, or the one implied by the label.
    #[must_use]
    pub fn resolved_kind(&self) -> SpaceKind {
        self.kind
            .unwrap_or_else(|| SpaceKind::from_label_prefix(&self.label))
    }
}

/// Optional `[render]` table. Unset fields keep the renderer defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOverrides {
    /// Pixels per foot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hall_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_font_size: Option<f64>,
}

impl RenderOverrides {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FloorPlanConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Load a file, picking the format by extension: `.json` is JSON,
    /// anything else is TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        tracing::debug!(path = %path.display(), is_json, "loading plan file");
        if is_json {
            Self::from_json_file(path)
        } else {
            Self::from_toml_file(path)
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
