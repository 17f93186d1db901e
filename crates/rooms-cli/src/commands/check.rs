//! Check command implementation.
//!
//! Validates configuration and entry sources without generating a plan.

use rooms_config::{ConfigValidator, EnvironmentMode, FsValidator, SchemaValidator};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// Schema validation always runs. Unless `--schema-only` is set, every
/// entry's source module must also exist under the project root. Finally
/// the base path pair for the active mode is reported.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let root = utils::project_root(args.cwd.as_deref())?;
    let config = utils::load_config(&root, args.config.as_deref())?;

    if args.schema_only {
        SchemaValidator.validate(&config)?;
    } else {
        FsValidator::new(&root).validate(&config)?;
        for name in &config.entries {
            ui::success(&format!("  {} exists", config.templates.source_for(name)));
        }
    }

    let mode = args
        .mode
        .map(EnvironmentMode::from)
        .unwrap_or_else(|| config.mode_from_env());
    let pair = config.base_paths_for(mode);
    ui::info(&format!("Mode: {}", mode));
    ui::info(&format!("  components: {}", pair.component_base_path));
    ui::info(&format!("  server:     {}", pair.server_base_path));

    ui::success("Configuration is valid!");
    Ok(())
}
