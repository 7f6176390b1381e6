pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};

use client::ApiClient;

#[derive(Parser)]
#[command(name = "remedios")]
#[command(about = "Remedios CLI - command-line client for the Remedios API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, env = "REMEDIOS_URL", default_value = "http://localhost:3000", help = "API base URL")]
    pub url: String,

    #[arg(long, global = true, env = "REMEDIOS_TOKEN", hide_env_values = true, help = "Bearer token from `remedios login`")]
    pub token: Option<String>,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Auth(commands::auth::AuthCommands),

    #[command(flatten)]
    Remedio(commands::remedio::RemedioCommands),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.url, cli.token.clone())?;

    match cli.command {
        Commands::Auth(cmd) => commands::auth::handle(cmd, &client, output_format).await,
        Commands::Remedio(cmd) => commands::remedio::handle(cmd, &client, output_format).await,
    }
}
