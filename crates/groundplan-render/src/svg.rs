//! SVG output.
//!
//! The document is `overall.width * scale` by `overall.height * scale`
//! pixels and contains, in order:
//!
//! - a `<title>` referenced by `aria-labelledby`,
//! - `<defs>` with the stair hatch pattern and the dimension arrowhead,
//! - the plan outline,
//! - one `<g class="space">` per space (rectangle + centered label),
//! - one `<g class="dimension">` per dimension line.
//!
//! Coordinates are printed unrounded, in shortest round-trip form.

use std::fmt::{self, Write};

use groundplan_core::{FloorPlan, Space};

use crate::dimension::{DimensionLine, plan_dimensions};
use crate::options::RenderOptions;
use crate::style::{DIMENSION_ARROW_ID, STAIR_PATTERN_ID, SpaceStyle, TITLE_ID, palette};

/// Accessible name of the drawing.
pub const DRAWING_TITLE: &str = "Ground floor layout";

/// Side (px) of the stair hatch tile. Not scaled with the plan.
const HATCH_TILE: u32 = 12;

/// Render a plan to an SVG document.
pub fn render_svg(plan: &FloorPlan, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(1024 + plan.spaces().len() * 512);
    // Writing into a String cannot fail.
    let _ = write_svg(&mut out, plan, options);
    out
}

/// Write the SVG document for `plan` into `out`.
pub fn write_svg<W: Write>(out: &mut W, plan: &FloorPlan, options: &RenderOptions) -> fmt::Result {
    let _span = tracing::debug_span!("render_svg", title = %plan.title(), scale = options.scale)
        .entered();

    let overall = plan.overall();
    let width = Px(options.px(overall.width));
    let height = Px(options.px(overall.height));

    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\" role=\"img\" aria-labelledby=\"{TITLE_ID}\" \
         style=\"background:{};border-radius:12px;padding:12px\">",
        palette::CANVAS_BACKGROUND,
    )?;
    writeln!(out, "  <title id=\"{TITLE_ID}\">{DRAWING_TITLE}</title>")?;
    write_defs(out)?;

    writeln!(
        out,
        "  <rect class=\"outline\" x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" \
         fill=\"{}\" stroke=\"{}\" stroke-width=\"2\" rx=\"16\"/>",
        palette::OUTLINE_FILL,
        palette::OUTLINE_STROKE,
    )?;

    for space in plan.spaces() {
        write_space(out, space, options)?;
    }

    let dimensions = plan_dimensions(plan);
    for line in &dimensions {
        write_dimension(out, line, options)?;
    }

    tracing::debug!(
        spaces = plan.spaces().len(),
        dimensions = dimensions.len(),
        "svg rendered"
    );
    out.write_str("</svg>\n")
}

fn write_defs<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str("  <defs>\n")?;
    writeln!(
        out,
        "    <pattern id=\"{STAIR_PATTERN_ID}\" patternUnits=\"userSpaceOnUse\" \
         width=\"{HATCH_TILE}\" height=\"{HATCH_TILE}\">"
    )?;
    writeln!(
        out,
        "      <rect width=\"{HATCH_TILE}\" height=\"{HATCH_TILE}\" fill=\"{}\"/>",
        palette::STAIR_TILE
    )?;
    writeln!(
        out,
        "      <path d=\"M0 {HATCH_TILE} L{HATCH_TILE} 0\" stroke=\"{}\" stroke-width=\"2\" \
         stroke-dasharray=\"4 4\"/>",
        palette::STAIR_HATCH
    )?;
    out.write_str("    </pattern>\n")?;
    writeln!(
        out,
        "    <marker id=\"{DIMENSION_ARROW_ID}\" markerWidth=\"6\" markerHeight=\"6\" \
         refX=\"3\" refY=\"3\" orient=\"auto-start-reverse\">"
    )?;
    writeln!(
        out,
        "      <path d=\"M0,0 L6,3 L0,6 z\" fill=\"{}\"/>",
        palette::DIMENSION
    )?;
    out.write_str("    </marker>\n")?;
    out.write_str("  </defs>\n")
}

fn write_space<W: Write>(out: &mut W, space: &Space, options: &RenderOptions) -> fmt::Result {
    let style = SpaceStyle::for_space(space, options);
    let origin = space.origin().scaled(options.scale);
    let center = space.center().scaled(options.scale);
    tracing::trace!(space = %space.label, kind = ?space.kind, fill = %style.fill, "draw space");

    writeln!(out, "  <g class=\"space\" data-kind=\"{}\">", space.kind.as_str())?;
    writeln!(
        out,
        "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" \
         stroke-width=\"1.5\" rx=\"{}\"/>",
        Px(origin.x),
        Px(origin.y),
        Px(options.px(space.width)),
        Px(options.px(space.height)),
        style.fill,
        palette::SPACE_STROKE,
        Px(style.corner_radius),
    )?;
    writeln!(
        out,
        "    <text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"{}\" text-anchor=\"middle\" \
         dominant-baseline=\"middle\" style=\"user-select:none\">{}</text>",
        Px(center.x),
        Px(center.y),
        palette::TEXT,
        Px(options.label_font_size),
        Escaped(&space.label),
    )?;
    out.write_str("  </g>\n")
}

fn write_dimension<W: Write>(
    out: &mut W,
    line: &DimensionLine,
    options: &RenderOptions,
) -> fmt::Result {
    let layout = line.layout(options.scale);
    out.write_str("  <g class=\"dimension\">\n")?;
    writeln!(
        out,
        "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"1.4\" \
         marker-start=\"url(#{DIMENSION_ARROW_ID})\" marker-end=\"url(#{DIMENSION_ARROW_ID})\"/>",
        Px(layout.start.x),
        Px(layout.start.y),
        Px(layout.end.x),
        Px(layout.end.y),
        palette::DIMENSION,
    )?;
    let (ax, ay) = (Px(layout.anchor.x), Px(layout.anchor.y));
    write!(
        out,
        "    <text x=\"{ax}\" y=\"{ay}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\"",
        Px(options.dimension_font_size),
        palette::TEXT,
        layout.text_anchor.as_str(),
    )?;
    if let Some(degrees) = layout.rotation {
        write!(out, " transform=\"rotate({} {ax} {ay})\"", Px(degrees))?;
    }
    writeln!(out, ">{}</text>", Escaped(&line.label))?;
    out.write_str("  </g>\n")
}

/// A pixel coordinate in shortest round-trip form, with `-0` printed as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Px(pub f64);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// XML-escaped text, safe in both element content and quoted attributes.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '&' => f.write_str("&amp;")?,
                '"' => f.write_str("&quot;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groundplan_core::{FloorPlanConfig, Overall, RenderOverrides, SpaceConfig};

    fn reference_svg() -> String {
        render_svg(&FloorPlan::reference(), &RenderOptions::default())
    }

    #[test]
    fn basic_structure() {
        let svg = reference_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("role=\"img\" aria-labelledby=\"floor-title\""));
        assert!(svg.contains("<title id=\"floor-title\">Ground floor layout</title>"));
    }

    #[test]
    fn document_size_follows_overall_and_scale() {
        let svg = reference_svg();
        assert!(svg.contains("width=\"408\" height=\"288\" viewBox=\"0 0 408 288\""));

        let svg = render_svg(&FloorPlan::reference(), &RenderOptions::with_scale(10.0).unwrap());
        assert!(svg.contains("width=\"340\" height=\"240\" viewBox=\"0 0 340 240\""));
    }

    #[test]
    fn defs_hold_pattern_and_marker() {
        let svg = reference_svg();
        assert!(svg.contains(
            "<pattern id=\"stairs\" patternUnits=\"userSpaceOnUse\" width=\"12\" height=\"12\">"
        ));
        assert!(svg.contains("stroke-dasharray=\"4 4\""));
        assert!(svg.contains("<marker id=\"dim-arrow\""));
        assert!(svg.contains("orient=\"auto-start-reverse\""));
    }

    #[test]
    fn room_rect_is_scaled_exactly() {
        let svg = reference_svg();
        assert!(svg.contains(
            "<rect x=\"0\" y=\"144\" width=\"132\" height=\"144\" fill=\"#f6ad55\" \
             stroke=\"#1f2937\" stroke-width=\"1.5\" rx=\"4\"/>"
        ));
    }

    #[test]
    fn hall_and_stair_styles() {
        let svg = reference_svg();
        assert!(svg.contains(
            "<rect x=\"132\" y=\"0\" width=\"144\" height=\"288\" fill=\"#c7d2fe\" \
             stroke=\"#1f2937\" stroke-width=\"1.5\" rx=\"6\"/>"
        ));
        assert!(svg.contains(
            "<rect x=\"204\" y=\"192\" width=\"72\" height=\"96\" fill=\"url(#stairs)\" \
             stroke=\"#1f2937\" stroke-width=\"1.5\" rx=\"4\"/>"
        ));
        // The stair's declared color is never used as a fill.
        assert!(!svg.contains("fill=\"#fed7e2\" stroke=\"#1f2937\""));
    }

    #[test]
    fn labels_are_centered() {
        let svg = reference_svg();
        assert!(svg.contains(
            "<text x=\"204\" y=\"144\" fill=\"#0f172a\" font-size=\"12\" text-anchor=\"middle\" \
             dominant-baseline=\"middle\" style=\"user-select:none\">Hall 24' × 12'</text>"
        ));
    }

    #[test]
    fn dimension_lines_sit_outside_the_plan() {
        let svg = reference_svg();
        let near = -1.4 * 12.0;
        assert!(svg.contains(&format!(
            "<line x1=\"0\" y1=\"{near}\" x2=\"408\" y2=\"{near}\""
        )));
        assert!(svg.contains(&format!(
            "<text x=\"204\" y=\"{}\" font-size=\"11\" fill=\"#0f172a\" \
             text-anchor=\"middle\">Total width 34.0 ft</text>",
            near - 8.0
        )));
        let ax = near - 12.0;
        assert!(svg.contains(&format!(
            "<text x=\"{ax}\" y=\"148\" font-size=\"11\" fill=\"#0f172a\" text-anchor=\"end\" \
             transform=\"rotate(-90 {ax} 148)\">Total length 24.0 ft</text>"
        )));
        let below = (24.0 + 1.2) * 12.0;
        assert!(svg.contains(&format!(
            "<line x1=\"132\" y1=\"{below}\" x2=\"276\" y2=\"{below}\""
        )));
        let beside = (34.0 + 1.2) * 12.0;
        assert!(svg.contains(&format!(
            "<line x1=\"{beside}\" y1=\"0\" x2=\"{beside}\" y2=\"288\""
        )));
        assert_eq!(svg.matches("text-anchor=\"end\"").count(), 2);
    }

    #[test]
    fn tiny_scales_keep_full_precision() {
        let scale = 0.0001;
        let svg = render_svg(&FloorPlan::reference(), &RenderOptions::with_scale(scale).unwrap());
        let (w, h) = (34.0 * scale, 24.0 * scale);
        assert!(svg.contains(&format!("width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\"")));
        assert!(svg.contains(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#fbd38d\"",
            11.0 * scale,
            12.0 * scale
        )));

        let scale = 12.3456;
        let svg = render_svg(&FloorPlan::reference(), &RenderOptions::with_scale(scale).unwrap());
        assert!(svg.contains(&format!("width=\"{}\"", 34.0 * scale)));
        assert!(svg.contains("width=\"419.75039999999996\""));
    }

    #[test]
    fn counts_match_reference_table() {
        let svg = reference_svg();
        assert_eq!(svg.matches("<g class=\"space\"").count(), 6);
        assert_eq!(svg.matches("<g class=\"dimension\">").count(), 4);
        assert_eq!(svg.matches("marker-end=\"url(#dim-arrow)\"").count(), 4);
        assert_eq!(svg.matches("transform=\"rotate(-90 ").count(), 2);
    }

    #[test]
    fn escapes_label_text() {
        let config = FloorPlanConfig {
            title: "t".to_string(),
            description: String::new(),
            ridge_height: 9.0,
            overall: Overall::new(10.0, 10.0),
            render: RenderOverrides::default(),
            spaces: vec![SpaceConfig {
                label: "Bed & <Bath> \"1\"".to_string(),
                kind: None,
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 10.0,
                color: "#fff".to_string(),
                details: None,
            }],
        };
        let plan = FloorPlan::from_config(&config).unwrap();
        let svg = render_svg(&plan, &RenderOptions::default());
        assert!(svg.contains(">Bed &amp; &lt;Bath&gt; &quot;1&quot;</text>"));
        // No hall in this plan: only the two overall dimensions.
        assert_eq!(svg.matches("<g class=\"dimension\">").count(), 2);
    }

    #[test]
    fn px_formatting() {
        assert_eq!(Px(132.0).to_string(), "132");
        assert_eq!(Px(-16.799999999999997).to_string(), "-16.799999999999997");
        assert_eq!(Px(422.40000000000003).to_string(), "422.40000000000003");
        assert_eq!(Px(0.0034).to_string(), "0.0034");
        assert_eq!(Px(-0.0).to_string(), "0");
        assert_eq!(Px(1.5).to_string(), "1.5");
    }
}
