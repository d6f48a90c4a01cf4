//! Defines all the CLI arguments.

/// `Config`
#[derive(clap::Parser, Debug)]
pub struct Config {
    /// The JSON configuration file holding per-environment database settings.
    #[arg(
        long,
        value_name = "Path to the configuration file",
        default_value = "config.json"
    )]
    pub config: std::path::PathBuf,
    /// Which environment's section of the configuration file to use. Usually selected through
    /// the `APP_ENV` environment variable.
    #[arg(
        long,
        env = "APP_ENV",
        value_enum,
        ignore_case = true,
        default_value_t = Environment::Local
    )]
    pub environment: Environment,
    /// Path to save the rendered image to. Overwritten on every run.
    #[arg(long, value_name = "Path of the output PNG", default_value = "output.png")]
    pub output: std::path::PathBuf,
    /// Open the rendered image with the system's image viewer once it's saved.
    #[arg(long)]
    pub view: bool,
}

/// Which deployment environment to read database settings for.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    /// A database running on this machine.
    Local,
    /// The shared development database.
    #[value(alias = "develop", alias = "dev")]
    Development,
    /// The real thing.
    #[value(alias = "prod")]
    Production,
}

impl Environment {
    /// The section key as it appears in the configuration file.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}
