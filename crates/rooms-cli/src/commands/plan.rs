//! Plan command implementation.

use rooms_bundler::{BuildPlan, EnvironmentMode, PlanGenerator};
use rooms_config::{ConfigValidator, RoomsConfig, SchemaValidator};

use crate::cli::PlanArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the plan command.
///
/// 1. Load configuration from `--cwd` (or the current directory)
/// 2. Pick the mode from `--mode` or the indicator variable
/// 3. Generate one job per entry
/// 4. Print JSON to stdout or a summary to stderr, and optionally write `--out`
pub fn execute(args: PlanArgs) -> Result<()> {
    let root = utils::project_root(args.cwd.as_deref())?;
    let config = utils::load_config(&root, args.config.as_deref())?;
    let mode = resolve_mode(&args, &config);

    let plan = build_plan(config, mode, &args.entries)?;
    tracing::info!(mode = %plan.mode, jobs = plan.len(), "plan generated");

    if plan.is_empty() {
        ui::warning("No entries configured; the plan is empty");
    }

    let json = plan.to_json_pretty()?;

    if let Some(out) = &args.out {
        let path = utils::resolve_path(out, &root);
        utils::write_file(&path, &json)?;
        ui::success(&format!(
            "Wrote {} ({})",
            path.display(),
            ui::format_size(json.len() as u64)
        ));
    }

    if args.json {
        println!("{}", json);
    } else {
        ui::print_plan_summary(&plan);
    }

    Ok(())
}

/// Generate the plan for `config`, replacing its entries when `entries` is non-empty.
pub fn build_plan(
    mut config: RoomsConfig,
    mode: EnvironmentMode,
    entries: &[String],
) -> Result<BuildPlan> {
    if !entries.is_empty() {
        config.entries = entries.to_vec();
    }
    SchemaValidator.validate(&config)?;

    Ok(PlanGenerator::new(config).generate(mode))
}

fn resolve_mode(args: &PlanArgs, config: &RoomsConfig) -> EnvironmentMode {
    match args.mode {
        Some(mode) => mode.into(),
        None => {
            let mode = config.mode_from_env();
            tracing::debug!(
                variable = %config.settings.mode_variable,
                %mode,
                "mode read from environment"
            );
            mode
        }
    }
}
