use clap::Subcommand;
use reqwest::Method;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_remedio_list, output_success, read_json_stdin};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum RemedioCommands {
    #[command(about = "List active medications")]
    List,

    #[command(about = "Show one medication, active or not")]
    Show {
        #[arg(help = "Medication id")]
        id: i64,
    },

    #[command(about = "Create medication from JSON on stdin")]
    Create,

    #[command(about = "Update name/route/laboratory from JSON on stdin")]
    Update {
        #[arg(help = "Medication id")]
        id: i64,
    },

    #[command(about = "Hide medication from listings")]
    Deactivate {
        #[arg(help = "Medication id")]
        id: i64,
    },

    #[command(about = "Make medication listable again")]
    Activate {
        #[arg(help = "Medication id")]
        id: i64,
    },

    #[command(about = "Permanently delete medication")]
    Delete {
        #[arg(help = "Medication id")]
        id: i64,
    },
}

pub async fn handle(cmd: RemedioCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        RemedioCommands::List => {
            let remedios = client.get("/remedios").await?;
            output_remedio_list(output_format, &remedios)
        }
        RemedioCommands::Show { id } => {
            let remedio = client.get(&format!("/remedios/{}", id)).await?;
            output_success(output_format, &format!("Remedio {}", id), Some(remedio))
        }
        RemedioCommands::Create => {
            let body = read_json_stdin()?;
            let remedio = client.send_json(Method::POST, "/remedios", &body).await?;
            let message = format!("Created remedio {}", remedio["id"]);
            output_success(output_format, &message, Some(remedio))
        }
        RemedioCommands::Update { id } => {
            let mut body = read_json_stdin()?;
            body["id"] = json!(id);
            let remedio = client.send_json(Method::PUT, "/remedios", &body).await?;
            output_success(output_format, &format!("Updated remedio {}", id), Some(remedio))
        }
        RemedioCommands::Deactivate { id } => {
            client.send_empty(Method::DELETE, &format!("/remedios/inativar/{}", id)).await?;
            output_success(output_format, &format!("Deactivated remedio {}", id), None)
        }
        RemedioCommands::Activate { id } => {
            client.send_empty(Method::PUT, &format!("/remedios/ativar/{}", id)).await?;
            output_success(output_format, &format!("Activated remedio {}", id), None)
        }
        RemedioCommands::Delete { id } => {
            client.send_empty(Method::DELETE, &format!("/remedios/{}", id)).await?;
            output_success(output_format, &format!("Deleted remedio {}", id), None)
        }
    }
}
