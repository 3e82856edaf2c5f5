//! The validated layout table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::config::{FloorPlanConfig, RenderOverrides, SpaceConfig};
use crate::error::{ConfigError, Result};
use crate::space::{Space, SpaceKind};

/// Slack allowed when checking that spaces fit inside the overall bounds.
const BOUNDS_EPSILON: f64 = 1e-9;

/// Bounding size of the whole plan, in feet.
///
/// Declared by the author, never derived from the spaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Overall {
    pub width: f64,
    pub height: f64,
}

impl Overall {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An immutable, validated floor plan.
///
/// Every space has positive extent, a unique non-empty label, a
/// non-negative offset and lies within [`Overall`]. The only way to get one
/// is [`FloorPlan::from_config`] or [`FloorPlan::reference`].
#[derive(Debug, Clone, PartialEq)]
pub struct FloorPlan {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) spaces: Vec<Space>,
    pub(crate) overall: Overall,
    pub(crate) ridge_height: f64,
}

impl FloorPlan {
    /// Validate a raw plan and resolve each space's kind.
    pub fn from_config(config: &FloorPlanConfig) -> Result<Self> {
        check_overall(config.overall)?;
        if !is_positive(config.ridge_height) {
            return Err(ConfigError::NonPositiveRidgeHeight {
                value: config.ridge_height,
            });
        }
        if config.spaces.is_empty() {
            return Err(ConfigError::NoSpaces);
        }

        let mut seen = HashSet::with_capacity(config.spaces.len());
        let mut spaces = Vec::with_capacity(config.spaces.len());
        for entry in &config.spaces {
            let space = resolve_space(entry)?;
            check_space(&space, config.overall)?;
            if !seen.insert(space.label.clone()) {
                return Err(ConfigError::DuplicateLabel { label: space.label });
            }
            tracing::trace!(
                space = %space.label,
                kind = ?space.kind,
                x = space.x,
                y = space.y,
                "resolved space"
            );
            spaces.push(space);
        }

        tracing::debug!(
            title = %config.title,
            spaces = spaces.len(),
            width = config.overall.width,
            height = config.overall.height,
            "floor plan validated"
        );

        Ok(Self {
            title: config.title.clone(),
            description: config.description.clone(),
            spaces,
            overall: config.overall,
            ridge_height: config.ridge_height,
        })
    }

    /// Convert back to the serde form, with every kind written out.
    #[must_use]
    pub fn to_config(&self) -> FloorPlanConfig {
        FloorPlanConfig {
            title: self.title.clone(),
            description: self.description.clone(),
            ridge_height: self.ridge_height,
            overall: self.overall,
            render: RenderOverrides::default(),
            spaces: self
                .spaces
                .iter()
                .map(|space| SpaceConfig {
                    label: space.label.clone(),
                    kind: Some(space.kind),
                    x: space.x,
                    y: space.y,
                    width: space.width,
                    height: space.height,
                    color: space.color.to_string(),
                    details: space.details.clone(),
                })
                .collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Spaces in table order. Order decides legend rows and drawing order.
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn overall(&self) -> Overall {
        self.overall
    }

    /// Ridge height in feet.
    pub fn ridge_height(&self) -> f64 {
        self.ridge_height
    }

    /// The first hall in table order.
    pub fn hall(&self) -> Option<&Space> {
        self.spaces_of(SpaceKind::Hall).next()
    }

    pub fn spaces_of(&self, kind: SpaceKind) -> impl Iterator<Item = &Space> + '_ {
        self.spaces.iter().filter(move |space| space.kind == kind)
    }

    pub fn space(&self, label: &str) -> Option<&Space> {
        self.spaces.iter().find(|space| space.label == label)
    }
}

impl TryFrom<FloorPlanConfig> for FloorPlan {
    type Error = ConfigError;

    fn try_from(config: FloorPlanConfig) -> Result<Self> {
        Self::from_config(&config)
    }
}

impl TryFrom<&FloorPlanConfig> for FloorPlan {
    type Error = ConfigError;

    fn try_from(config: &FloorPlanConfig) -> Result<Self> {
        Self::from_config(config)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn check_overall(overall: Overall) -> Result<()> {
    if is_positive(overall.width) && is_positive(overall.height) {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveOverall {
            width: overall.width,
            height: overall.height,
        })
    }
}

fn resolve_space(entry: &SpaceConfig) -> Result<Space> {
    if entry.label.trim().is_empty() {
        return Err(ConfigError::EmptyLabel);
    }
    let color: Rgb = entry.color.parse()?;
    Ok(Space {
        label: entry.label.clone(),
        kind: entry.resolved_kind(),
        x: entry.x,
        y: entry.y,
        width: entry.width,
        height: entry.height,
        color,
        details: entry.details.clone(),
    })
}

fn check_space(space: &Space, overall: Overall) -> Result<()> {
    if !is_positive(space.width) || !is_positive(space.height) {
        return Err(ConfigError::NonPositiveDimension {
            label: space.label.clone(),
            width: space.width,
            height: space.height,
        });
    }
    if !(space.x.is_finite() && space.y.is_finite()) || space.x < 0.0 || space.y < 0.0 {
        return Err(ConfigError::NegativeOffset {
            label: space.label.clone(),
            x: space.x,
            y: space.y,
        });
    }
    if space.right() > overall.width + BOUNDS_EPSILON
        || space.bottom() > overall.height + BOUNDS_EPSILON
    {
        return Err(ConfigError::OutOfBounds {
            label: space.label.clone(),
        });
    }
    Ok(())
}
