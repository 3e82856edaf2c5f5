//! Property-based invariants of the SVG renderer.
//!
//! 1. Every space rect sits at (x*scale, y*scale) with size (w*scale, h*scale),
//!    printed unrounded
//! 2. Document size is overall * scale, printed unrounded
//! 3. Stair spaces always get the hatch fill, other kinds their own color
//! 4. Only halls get the larger corner radius
//! 5. Dimension captions anchor at midpoint + fixed offset; vertical ones
//!    rotate -90 degrees about that anchor and end at it

use groundplan_core::{
    FloorPlan, FloorPlanConfig, Overall, Point, RenderOverrides, SpaceConfig, SpaceKind,
};
use groundplan_render::{DimensionLine, Orientation, Px, RenderOptions, TextAnchor, render_svg};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn arb_kind() -> impl Strategy<Value = SpaceKind> {
    prop_oneof![
        Just(SpaceKind::Room),
        Just(SpaceKind::Hall),
        Just(SpaceKind::Stair),
    ]
}

fn arb_scale() -> impl Strategy<Value = f64> {
    prop_oneof![Just(12.0), 1e-6f64..0.5, 0.5f64..64.0]
}

fn single_space_plan(kind: SpaceKind, x: f64, y: f64, w: f64, h: f64) -> FloorPlan {
    let config = FloorPlanConfig {
        title: "prop".to_string(),
        description: String::new(),
        ridge_height: 10.0,
        overall: Overall::new(40.0, 30.0),
        render: RenderOverrides::default(),
        spaces: vec![SpaceConfig {
            label: "Space under test".to_string(),
            kind: Some(kind),
            x,
            y,
            width: w,
            height: h,
            color: "#2468ac".to_string(),
            details: None,
        }],
    };
    FloorPlan::from_config(&config).expect("generated plan is valid")
}

fn space_rect(svg: &str) -> &str {
    let group = svg.find("<g class=\"space\"").expect("space group");
    let start = group + svg[group..].find("<rect ").expect("rect");
    let end = start + svg[start..].find("/>").expect("rect end");
    &svg[start..end]
}

// ═════════════════════════════════════════════════════════════════════════
// 1-4. Space geometry and style
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn space_rect_is_scaled_position_and_size(
        kind in arb_kind(),
        x in 0.0f64..20.0,
        y in 0.0f64..15.0,
        w in 0.5f64..20.0,
        h in 0.5f64..15.0,
        scale in arb_scale(),
    ) {
        let plan = single_space_plan(kind, x, y, w, h);
        let options = RenderOptions::with_scale(scale).unwrap();
        let svg = render_svg(&plan, &options);
        let rect = space_rect(&svg);

        let expected = format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" ",
            x * scale,
            y * scale,
            w * scale,
            h * scale,
        );
        prop_assert!(rect.starts_with(&expected), "{} vs {}", rect, expected);
    }

    #[test]
    fn document_size_is_overall_times_scale(scale in arb_scale()) {
        let plan = FloorPlan::reference();
        let svg = render_svg(&plan, &RenderOptions::with_scale(scale).unwrap());
        let overall = plan.overall();
        let expected = format!(
            "width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\"",
            w = overall.width * scale,
            h = overall.height * scale,
        );
        prop_assert!(svg.lines().next().unwrap().contains(&expected));
    }

    #[test]
    fn fill_and_radius_follow_kind(kind in arb_kind(), scale in arb_scale()) {
        let plan = single_space_plan(kind, 1.0, 1.0, 5.0, 5.0);
        let options = RenderOptions::with_scale(scale).unwrap();
        let svg = render_svg(&plan, &options);
        let rect = space_rect(&svg);

        let fill = if kind == SpaceKind::Stair { "url(#stairs)" } else { "#2468ac" };
        let expected_fill = format!("fill=\"{fill}\"");
        prop_assert!(rect.contains(&expected_fill));

        let radius = if kind == SpaceKind::Hall { options.hall_radius } else { options.room_radius };
        let expected_rx = format!("rx=\"{}\"", Px(radius));
        prop_assert!(rect.ends_with(&expected_rx));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Dimension caption placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn dimension_midpoint_is_exact(
        x1 in -5.0f64..50.0,
        x2 in -5.0f64..50.0,
        y in -5.0f64..50.0,
        scale in arb_scale(),
        vertical in any::<bool>(),
    ) {
        let line = if vertical {
            DimensionLine::vertical(Point::new(y, x1), Point::new(y, x2), "v")
        } else {
            DimensionLine::horizontal(Point::new(x1, y), Point::new(x2, y), "h")
        };
        let layout = line.layout(scale);

        prop_assert_eq!(layout.midpoint.x, (layout.start.x + layout.end.x) / 2.0);
        prop_assert_eq!(layout.midpoint.y, (layout.start.y + layout.end.y) / 2.0);

        match line.orientation {
            Orientation::Horizontal => {
                prop_assert_eq!(layout.rotation, None);
                prop_assert_eq!(layout.anchor, layout.midpoint.offset(0.0, -8.0));
                prop_assert_eq!(layout.text_anchor, TextAnchor::Middle);
            }
            Orientation::Vertical => {
                prop_assert_eq!(layout.rotation, Some(-90.0));
                prop_assert_eq!(layout.anchor, layout.midpoint.offset(-12.0, 4.0));
                prop_assert_eq!(layout.text_anchor, TextAnchor::End);
            }
        }
    }
}
