use std::io::Write;

use clap::{Parser, Subcommand};

use crate::commands::{
    LegendArgs, RenderArgs, ValidateArgs, run_legend, run_reference, run_render, run_validate,
};
use crate::error::Result;
use crate::logging;

#[derive(Debug, Parser)]
#[command(
    name = "groundplan",
    about = "Render a floor plan to SVG or HTML with dimension lines and a legend",
    version
)]
pub struct Cli {
    /// Log filter directives, e.g. `debug` or `groundplan_render=trace`.
    /// Falls back to RUST_LOG, then `warn`.
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Draw the plan.
    Render(RenderArgs),

    /// Print the legend as text.
    Legend(LegendArgs),

    /// Check a plan file without rendering it.
    Validate(ValidateArgs),

    /// Print the built-in reference plan as TOML.
    Reference,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Render(args) => run_render(args, out),
        Commands::Legend(args) => run_legend(args, out),
        Commands::Validate(args) => run_validate(args, out),
        Commands::Reference => run_reference(out),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use groundplan_core::ConfigError;

    use super::{Cli, Commands, run};
    use crate::commands::{OutputFormat, ValidateArgs};
    use crate::error::CliError;

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from([
            "groundplan",
            "--log-level",
            "debug",
            "render",
            "--scale",
            "24",
            "--format",
            "html",
            "-o",
            "out/plan.html",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.scale, Some(24.0));
        assert_eq!(args.format, OutputFormat::Html);
        assert_eq!(args.output, Some(PathBuf::from("out/plan.html")));
        assert_eq!(args.plan, None);
    }

    #[test]
    fn validate_requires_plan() {
        assert!(Cli::try_parse_from(["groundplan", "validate"]).is_err());
    }

    #[test]
    fn reference_command_dispatches_successfully() {
        let mut out = Vec::new();
        let result = run(
            Cli {
                log_level: None,
                command: Commands::Reference,
            },
            &mut out,
        );
        assert!(result.is_ok());
        assert!(!out.is_empty());
    }

    #[test]
    fn validate_command_dispatches_missing_file_error() {
        let mut out = Vec::new();
        let error = run(
            Cli {
                log_level: None,
                command: Commands::Validate(ValidateArgs {
                    plan: PathBuf::from("/tmp/groundplan/does-not-exist.toml"),
                }),
            },
            &mut out,
        )
        .expect_err("missing plan should fail");
        assert!(matches!(error, CliError::Config(ConfigError::Io(_))));
        assert_eq!(error.exit_code(), 1);
    }
}
