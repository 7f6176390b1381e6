use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login and print a bearer token")]
    Login {
        #[arg(help = "Login")]
        login: String,
        #[arg(help = "Password")]
        password: String,
    },
}

pub async fn handle(cmd: AuthCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { login, password } => {
            let response = client
                .post_public("/login", &json!({ "login": login, "password": password }))
                .await?;

            match output_format {
                OutputFormat::Json => output_success(output_format, "Logged in", Some(response)),
                OutputFormat::Text => {
                    let token = response["token"].as_str().unwrap_or_default();
                    eprintln!("✓ Logged in as {}", login);
                    // Bare token on stdout so it can be captured into REMEDIOS_TOKEN
                    println!("{}", token);
                    Ok(())
                }
            }
        }
    }
}
