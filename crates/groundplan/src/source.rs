//! Where a plan comes from: a plan file, or the built-in reference.

use std::path::Path;

use groundplan_core::{FloorPlan, FloorPlanConfig, RenderOverrides};
use groundplan_render::RenderOptions;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct PlanSource {
    pub plan: FloorPlan,
    /// The file's `[render]` table; empty for the reference plan.
    pub overrides: RenderOverrides,
}

impl PlanSource {
    pub fn reference() -> Self {
        Self {
            plan: FloorPlan::reference(),
            overrides: RenderOverrides::default(),
        }
    }

    /// Load and validate `path`, or fall back to the reference plan.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("no plan file given; using reference plan");
            return Ok(Self::reference());
        };
        let config = FloorPlanConfig::from_path(path)?;
        let plan = FloorPlan::from_config(&config)?;
        tracing::info!(
            path = %path.display(),
            spaces = plan.spaces().len(),
            "plan loaded"
        );
        Ok(Self {
            plan,
            overrides: config.render,
        })
    }

    /// Render options: defaults, then the file's `[render]` table, then an
    /// explicit scale.
    pub fn options(&self, scale: Option<f64>) -> Result<RenderOptions> {
        let mut options = RenderOptions::default().with_overrides(&self.overrides)?;
        if let Some(scale) = scale {
            options.scale = scale;
            options.validate()?;
        }
        Ok(options)
    }
}
