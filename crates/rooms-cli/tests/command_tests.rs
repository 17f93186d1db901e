//! Tests that call command functions directly.

use std::fs;

use rooms_bundler::EnvironmentMode;
use rooms_cli::CliError;
use rooms_cli::cli::{CheckArgs, PlanArgs};
use rooms_cli::commands::{check_execute, plan::build_plan, plan_execute};
use rooms_config::{ConfigError, RoomsConfig};
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn build_plan_is_empty_for_empty_entry_list() {
    let config = RoomsConfig {
        entries: vec![],
        ..RoomsConfig::default()
    };
    let plan = build_plan(config, EnvironmentMode::Production, &[]).unwrap();
    assert!(plan.is_empty());
}

#[test]
#[serial]
fn plan_execute_writes_plan_for_indicator() {
    let temp = TempDir::new().unwrap();
    unsafe { std::env::set_var("BUILD", "production") };

    let result = plan_execute(PlanArgs {
        cwd: Some(temp.path().to_path_buf()),
        out: Some("plan.json".into()),
        ..PlanArgs::default()
    });
    unsafe { std::env::remove_var("BUILD") };
    result.unwrap();

    let plan: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("plan.json")).unwrap()).unwrap();
    assert_eq!(plan["mode"], "production");
    assert_eq!(
        plan["base_paths"]["server_base_path"],
        "https://williamcaseylucas.github.io/core-components/"
    );
}

#[test]
#[serial]
fn custom_mode_variable_is_honored() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("rooms.toml"),
        "[settings]\nmode_variable = \"HUBS_TEST_TARGET\"\n",
    )
    .unwrap();
    unsafe {
        std::env::remove_var("BUILD");
        std::env::set_var("HUBS_TEST_TARGET", "production");
    }

    let result = plan_execute(PlanArgs {
        cwd: Some(temp.path().to_path_buf()),
        out: Some("plan.json".into()),
        ..PlanArgs::default()
    });
    unsafe { std::env::remove_var("HUBS_TEST_TARGET") };
    result.unwrap();

    let plan: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("plan.json")).unwrap()).unwrap();
    assert_eq!(plan["mode"], "production");
}

#[test]
fn check_execute_reports_missing_entry() {
    let temp = TempDir::new().unwrap();
    let err = check_execute(CheckArgs {
        cwd: Some(temp.path().to_path_buf()),
        ..CheckArgs::default()
    })
    .unwrap_err();

    assert!(matches!(
        err,
        CliError::Config(ConfigError::EntryNotFound { .. })
    ));
}
