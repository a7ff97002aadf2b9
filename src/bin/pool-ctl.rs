use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "pool-ctl")]
#[command(about = "Toggle the pool gateway's service mode from the local host", long_about = None)]
struct Cli {
    /// Gateway base URL. Must resolve to a loopback address.
    #[arg(short, long, default_value = "http://127.0.0.1:54000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve public routes again
    Start,
    /// Suspend public routes (e.g. during a payment run)
    Stop,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::builder().no_proxy().build()?;

    let path = match cli.command {
        Commands::Start => "service/start",
        Commands::Stop => "service/stop",
    };
    let res = client
        .get(format!("{}/{}", cli.url.trim_end_matches('/'), path))
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
