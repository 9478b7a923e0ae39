use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use omada_client::utils::config_loader;
use omada_client::utils::logging;
use omada_client::utils::logging::LogLevel;
use omada_client::OmadaClient;
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "OMADA_CONFIG", default_value = "omada.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// print the client metrics after the command
    #[arg(long)]
    print_metrics: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Request an access token and print the raw response
    Token,
    /// List sites
    Sites {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show one site
    Site { site_id: String },
    /// List site scenarios
    Scenarios,
    /// Show the device account of a site
    DeviceAccount { site_id: String },
    /// List clients of a site
    Clients {
        site_id: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show one client of a site
    Client { site_id: String, mac: String },
    /// List controller roles
    Roles,
    /// Show one role
    Role { role_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config
    // -------------------------------

    let args = Args::parse();
    let service_config = config_loader::run(&args.config).await?;
    logging::run(&service_config, args.log_level.to_owned());

    // -------------------------------
    // 2. Create controller client
    // -------------------------------

    let client = OmadaClient::new(service_config.controller.clone())
        .context("creating controller client")?;
    info!(base_url = client.base_url(), omadac_id = client.omadac_id(), "client ready");

    // -------------------------------
    // 3. Run command
    // -------------------------------

    match &args.command {
        Command::Token => print_json(&client.get_token().await?)?,
        Command::Sites { page } => print_json(&client.get_site_list(*page).await?)?,
        Command::Site { site_id } => print_json(&client.get_site_info(site_id).await?)?,
        Command::Scenarios => print_json(&client.get_scenario_list().await?)?,
        Command::DeviceAccount { site_id } => {
            print_json(&client.get_site_device_account_setting(site_id).await?)?
        }
        Command::Clients { site_id, page } => {
            print_json(&client.get_client_list(site_id, *page).await?)?
        }
        Command::Client { site_id, mac } => print_json(&client.get_client_info(site_id, mac).await?)?,
        Command::Roles => print_json(&client.get_role_list().await?)?,
        Command::Role { role_id } => print_json(&client.get_role_info(role_id).await?)?,
    }

    // -------------------------------
    // 4. Metrics
    // -------------------------------

    if args.print_metrics {
        print!("{}", client.metrics().encode_text()?);
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
