//! Standalone HTML page: heading, description, drawing and legend.

use groundplan_core::FloorPlan;

use crate::legend::Legend;
use crate::options::RenderOptions;
use crate::svg::render_svg;

const STYLE: &str = "  <style>
    body { margin: 0; font-family: ui-sans-serif, -apple-system, Segoe UI, Roboto, Arial, sans-serif; background: #f1f5f9; color: #0f172a; }
    .app-shell { max-width: 960px; margin: 0 auto; padding: 32px 24px; display: grid; gap: 24px; }
    h1 { margin: 0 0 8px; font-size: 28px; }
    .details { margin: 0; color: #475569; line-height: 1.5; }
    .plan-wrapper { display: flex; justify-content: center; padding: 32px; background: #ffffff; border-radius: 16px; overflow: visible; }
    .plan-wrapper svg { max-width: 100%; height: auto; overflow: visible; }
    .legend { display: grid; gap: 8px; }
    .legend-item { display: flex; align-items: center; gap: 10px; font-size: 14px; }
    .legend-swatch { flex: none; width: 18px; height: 18px; border-radius: 4px; border: 1px solid #1f2937; }
  </style>
";

fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

/// Render the full page as an HTML5 document.
pub fn render_page(plan: &FloorPlan, options: &RenderOptions) -> String {
    let svg = render_svg(plan, options);
    let legend = Legend::from_plan(plan);
    let mut html = String::with_capacity(svg.len() + 4096);

    html.push_str(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!("  <title>{}</title>\n", html_escape(plan.title())));
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n<main class=\"app-shell\">\n");

    html.push_str("<section>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(plan.title())));
    if !plan.description().is_empty() {
        html.push_str(&format!(
            "<p class=\"details\">{}</p>\n",
            html_escape(plan.description())
        ));
    }
    html.push_str("</section>\n");

    html.push_str("<section class=\"plan-wrapper\">\n");
    html.push_str(&svg);
    html.push_str("</section>\n");

    html.push_str("<section class=\"legend\">\n");
    for row in legend.rows() {
        html.push_str("<div class=\"legend-item\">");
        html.push_str(&format!(
            "<span class=\"legend-swatch\" style=\"background: {}\"></span>",
            row.swatch.css_background()
        ));
        html.push_str(&format!("<span><strong>{}</strong>", html_escape(&row.title)));
        if let Some(details) = &row.details {
            html.push_str(&format!(" — {}", html_escape(details)));
        }
        html.push_str("</span></div>\n");
    }
    html.push_str("</section>\n");

    html.push_str("</main>\n</body>\n</html>\n");
    tracing::debug!(bytes = html.len(), legend_rows = legend.len(), "page rendered");
    html
}
