use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;
use url::Url;

use crate::Args;

const DEFAULT_TOKEN_TTL_SECS: i64 = 50 * 60;
const DEFAULT_WORKSPACE_TTL_SECS: i64 = 2 * 60;

#[derive(Deserialize, Debug)]
pub(crate) struct ApplicationConfig {
    pub port: u16,
    pub path_prefix: Option<String>,
    pub log: LogConfig,
    pub databricks: DatabricksConfig,
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

#[derive(Deserialize, Debug)]
pub(crate) struct DatabricksConfig {
    pub base_url: Url,
    pub account_id: String,
    pub client_id: String,
    pub client_secret: String,
    /// Lifetime of a cached access token in seconds.
    pub token_ttl: u64,
    /// Lifetime of the cached workspace name list in seconds.
    pub workspace_ttl: u64,
}

pub(super) fn load_config(args: Args) -> anyhow::Result<ApplicationConfig> {
    let config_file_path = match args.config {
        Some(path_override) => path_override,
        None => default_config_file_path()?,
    };

    let config: ApplicationConfig = Config::builder()
        .set_default("port", 7007)?
        .set_default("log.format", "JSON")?
        .set_default("databricks.token_ttl", DEFAULT_TOKEN_TTL_SECS)?
        .set_default("databricks.workspace_ttl", DEFAULT_WORKSPACE_TTL_SECS)?
        .add_source(File::from(config_file_path).format(FileFormat::Toml))
        .set_override_option("port", args.port.map(|port| port.to_string()))?
        .set_override_option("databricks.base_url", args.databricks_base_url)?
        .set_override_option("databricks.account_id", args.databricks_account_id)?
        .set_override_option("databricks.client_id", args.databricks_client_id)?
        .set_override_option("databricks.client_secret", args.databricks_client_secret)?
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

    let config_file_path = user_config_dir.join("databricks_config.toml");
    if !config_file_path.exists() {
        write_default_config_file(&config_file_path)?;
    }

    Ok(config_file_path)
}

fn write_default_config_file(path: &Path) -> anyhow::Result<()> {
    let default_config_content = include_str!("../static/default_config.toml");
    std::fs::write(path, default_config_content)?;
    Ok(())
}
