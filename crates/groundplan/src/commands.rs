use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use groundplan_core::FloorPlan;
use groundplan_render::{Legend, render_page, render_svg};

use crate::error::Result;
use crate::source::PlanSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bare SVG document.
    #[default]
    Svg,
    /// HTML page with heading, drawing and legend.
    Html,
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Plan file (TOML, or JSON with a .json extension). Defaults to the
    /// built-in reference plan.
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Pixels per foot. Overrides the plan file's `[render] scale`.
    #[arg(long)]
    pub scale: Option<f64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Write here instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct LegendArgs {
    #[arg(long)]
    pub plan: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    #[arg(long)]
    pub plan: PathBuf,
}

pub fn run_render<W: Write>(args: RenderArgs, out: &mut W) -> Result<()> {
    let source = PlanSource::load(args.plan.as_deref())?;
    let options = source.options(args.scale)?;
    let document = match args.format {
        OutputFormat::Svg => render_svg(&source.plan, &options),
        OutputFormat::Html => render_page(&source.plan, &options),
    };

    match &args.output {
        Some(path) => {
            write_string(path, &document)?;
            tracing::info!(
                path = %path.display(),
                format = ?args.format,
                bytes = document.len(),
                "wrote drawing"
            );
        }
        None => out.write_all(document.as_bytes())?,
    }
    Ok(())
}

pub fn run_legend<W: Write>(args: LegendArgs, out: &mut W) -> Result<()> {
    let source = PlanSource::load(args.plan.as_deref())?;
    out.write_all(Legend::from_plan(&source.plan).to_text().as_bytes())?;
    Ok(())
}

pub fn run_validate<W: Write>(args: ValidateArgs, out: &mut W) -> Result<()> {
    let source = PlanSource::load(Some(&args.plan))?;
    // Surface a bad [render] table too, not just bad spaces.
    source.options(None)?;
    let overall = source.plan.overall();
    writeln!(
        out,
        "ok: {} ({} spaces, {} x {} ft)",
        args.plan.display(),
        source.plan.spaces().len(),
        overall.width,
        overall.height,
    )?;
    Ok(())
}

pub fn run_reference<W: Write>(out: &mut W) -> Result<()> {
    let text = FloorPlan::reference().to_config().to_toml_string()?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

fn write_string(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
