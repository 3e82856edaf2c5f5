//! Legend: one row per space plus a trailing ridge-height row.

use groundplan_core::{FloorPlan, Rgb, SpaceKind, format_feet};

use crate::style::palette;

pub const RIDGE_TITLE: &str = "Ridge Height";

/// What sits in a row's color swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Solid(Rgb),
    /// Diagonal stripes matching the drawing's stair hatch.
    StairHatch,
}

impl Swatch {
    /// CSS `background` value for an HTML swatch.
    pub fn css_background(self) -> String {
        match self {
            Self::Solid(color) => color.to_string(),
            Self::StairHatch => format!(
                "repeating-linear-gradient(135deg, {light} 0, {light} 6px, {dark} 6px, {dark} 12px)",
                light = palette::STAIR_SWATCH_LIGHT,
                dark = palette::STAIR_HATCH,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendRow {
    pub swatch: Swatch,
    pub title: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    rows: Vec<LegendRow>,
}

impl Legend {
    pub fn from_plan(plan: &FloorPlan) -> Self {
        let mut rows: Vec<LegendRow> = plan
            .spaces()
            .iter()
            .map(|space| LegendRow {
                swatch: match space.kind {
                    SpaceKind::Stair => Swatch::StairHatch,
                    SpaceKind::Room | SpaceKind::Hall => Swatch::Solid(space.color),
                },
                title: space.label.clone(),
                details: space.details.clone(),
            })
            .collect();
        rows.push(LegendRow {
            swatch: Swatch::Solid(palette::RIDGE_SWATCH),
            title: RIDGE_TITLE.to_string(),
            details: Some(format!(
                "{} from finished floor level.",
                format_feet(plan.ridge_height())
            )),
        });
        Self { rows }
    }

    /// Rows in table order; the ridge row is always last.
    pub fn rows(&self) -> &[LegendRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One line per row: `[swatch] title — details`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let swatch = match row.swatch {
                Swatch::Solid(color) => color.to_string(),
                Swatch::StairHatch => "hatch".to_string(),
            };
            out.push_str(&format!("[{swatch:>7}] {}", row.title));
            if let Some(details) = &row.details {
                out.push_str(&format!(" — {details}"));
            }
            out.push('\n');
        }
        out
    }
}
