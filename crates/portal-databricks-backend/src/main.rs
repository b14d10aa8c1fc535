use std::path::PathBuf;

use clap::Parser;

mod application;
mod config;
mod domain;
mod logger;
mod server;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Sets a port to start a databricks backend server
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
    /// Sets a base url of the databricks account api
    #[arg(long)]
    pub databricks_base_url: Option<String>,
    /// Sets a databricks account id
    #[arg(long)]
    pub databricks_account_id: Option<String>,
    /// Sets a client id of the databricks service principal
    #[arg(long, env = "DATABRICKS_CLIENT_ID")]
    pub databricks_client_id: Option<String>,
    /// Sets a client secret of the databricks service principal
    #[arg(long, env = "DATABRICKS_CLIENT_SECRET", hide_env_values = true)]
    pub databricks_client_secret: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let app_config = config::load_config(args)?;

    logger::init_logger((&app_config.log).into());

    let application = application::Application::new(&app_config)?;

    server::run(application, (&app_config).into()).await?;
    Ok(())
}
