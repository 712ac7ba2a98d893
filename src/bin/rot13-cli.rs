use clap::{Parser, Subcommand};
use serde_json::Value;

use rot13_service::EncodeResponse;

#[derive(Parser)]
#[command(name = "rot13-cli")]
#[command(about = "Client for the ROT13 encoding service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text and print the result
    Encode { text: String },
    /// Print the service's API documentation
    Docs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Encode { text } => {
            let res = client
                .get(format!("{}/v1/encode", cli.url))
                .query(&[("text", text.as_str())])
                .send()
                .await?;

            let status = res.status();
            if !status.is_success() {
                eprintln!("Error: service returned status {}", status);
                return Ok(());
            }
            let body: EncodeResponse = res.json().await?;
            println!("{}", body.data);
        }
        Commands::Docs => {
            // Unknown paths answer 404 with the documentation attached.
            let res = client.get(format!("{}/", cli.url)).send().await?;
            let json: Value = res.json().await?;
            println!("{}", serde_json::to_string_pretty(&json["documentation"])?);
        }
    }

    Ok(())
}
