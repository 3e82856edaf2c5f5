#![no_main]

use groundplan_core::{FloorPlan, FloorPlanConfig};
use groundplan_render::{RenderOptions, render_page, render_svg};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Parse errors and validation errors are fine; panics are not.
    let Ok(config) = FloorPlanConfig::from_toml_str(text) else {
        return;
    };
    let Ok(plan) = FloorPlan::from_config(&config) else {
        return;
    };
    let Ok(options) = RenderOptions::default().with_overrides(&config.render) else {
        return;
    };

    let svg = render_svg(&plan, &options);
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>\n"));
    assert_eq!(svg.matches("<g class=\"space\"").count(), plan.spaces().len());

    let page = render_page(&plan, &options);
    assert!(page.contains(&svg));
});
