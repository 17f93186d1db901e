use clap::ValueEnum;
use rooms_config::EnvironmentMode;

/// Environment selected on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Local tunnel base paths
    #[value(name = "development", alias = "dev")]
    Development,

    /// Published base paths
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<ModeArg> for EnvironmentMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Development => EnvironmentMode::Development,
            ModeArg::Production => EnvironmentMode::Production,
        }
    }
}
