#![no_main]

use arbitrary::Arbitrary;
use groundplan_core::{FloorPlan, FloorPlanConfig, Overall, SpaceConfig};
use groundplan_render::{RenderOptions, plan_dimensions, render_svg};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzSpace {
    label: String,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    color: u32,
}

#[derive(Debug, Arbitrary)]
struct FuzzPlan {
    width: u16,
    height: u16,
    ridge: u8,
    scale: u8,
    spaces: Vec<FuzzSpace>,
}

fuzz_target!(|input: FuzzPlan| {
    // Quarter-foot grid keeps coordinates in a realistic range.
    let feet = |v: u16| f64::from(v) / 4.0;
    let config = FloorPlanConfig {
        title: "fuzz".to_string(),
        description: String::new(),
        ridge_height: f64::from(input.ridge) / 2.0,
        overall: Overall::new(feet(input.width), feet(input.height)),
        render: Default::default(),
        spaces: input
            .spaces
            .into_iter()
            .take(64)
            .map(|s| SpaceConfig {
                label: s.label,
                kind: None,
                x: feet(s.x),
                y: feet(s.y),
                width: feet(s.width),
                height: feet(s.height),
                color: format!("#{:06x}", s.color & 0x00ff_ffff),
                details: None,
            })
            .collect(),
    };

    let Ok(plan) = FloorPlan::from_config(&config) else {
        return;
    };
    for space in plan.spaces() {
        assert!(space.right() <= plan.overall().width + 1e-9);
        assert!(space.bottom() <= plan.overall().height + 1e-9);
    }

    let expected_lines = if plan.hall().is_some() { 4 } else { 2 };
    assert_eq!(plan_dimensions(&plan).len(), expected_lines);

    let Ok(options) = RenderOptions::with_scale(f64::from(input.scale.max(1))) else {
        return;
    };
    let svg = render_svg(&plan, &options);
    assert_eq!(svg.matches("<g class=\"dimension\"").count(), expected_lines);
});
