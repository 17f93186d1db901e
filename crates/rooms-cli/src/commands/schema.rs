//! Schema command implementation.

use rooms_config::RoomsConfig;

use crate::cli::SchemaArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Render the JSON schema for `rooms.toml`.
pub fn render_schema() -> Result<String> {
    let schema = schemars::schema_for!(RoomsConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}

/// Execute the schema command.
pub fn execute(args: SchemaArgs) -> Result<()> {
    let schema = render_schema()?;

    match args.out {
        Some(path) => {
            utils::write_file(&path, &schema)?;
            ui::success(&format!("Wrote schema to {}", path.display()));
        }
        None => println!("{}", schema),
    }

    Ok(())
}
