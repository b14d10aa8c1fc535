use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::Args;

#[derive(Deserialize, Debug)]
pub(crate) struct ApplicationConfig {
    pub port: u16,
    pub path_prefix: Option<String>,
    pub log: LogConfig,
}

#[derive(Deserialize, Debug)]
pub(crate) struct LogConfig {
    pub format: LogFormat,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum LogFormat {
    Json,
    Text,
}

pub(super) fn load_config(args: Args) -> anyhow::Result<ApplicationConfig> {
    let config_file_path = match args.config {
        Some(path_override) => path_override,
        None => default_config_file_path()?,
    };

    let config: ApplicationConfig = Config::builder()
        .set_default("port", 7008)?
        .set_default("log.format", "JSON")?
        .add_source(File::from(config_file_path).format(FileFormat::Toml))
        .set_override_option("port", args.port.map(|port| port.to_string()))?
        .set_override_option("path_prefix", args.path_prefix)?
        .build()?
        .try_deserialize()?;

    Ok(config)
}

fn default_config_file_path() -> anyhow::Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("portal")?;

    let user_config_dir = xdg_dirs.get_config_home();
    if !user_config_dir.exists() {
        std::fs::create_dir_all(&user_config_dir)?;
    }

    let config_file_path = user_config_dir.join("drn_config.toml");
    if !config_file_path.exists() {
        write_default_config_file(&config_file_path)?;
    }

    Ok(config_file_path)
}

fn write_default_config_file(path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, include_str!("../static/default_config.toml"))?;
    Ok(())
}
