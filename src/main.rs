use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use cargo_gql::config::Settings;
use cargo_gql::logging::init_logging;
use cargo_gql::server;

#[derive(Parser)]
#[command(name = "cargo-gql")]
#[command(about = "GraphQL normalization API for cargo planning payloads")]
#[command(version = "0.1.0")]
struct Cli {
    /// Port to run the server on
    #[arg(short, long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let settings = Arc::new(Settings::from_env()?);
    init_logging(&settings.log_level);

    println!("🚀 Starting cargo GraphQL server on port {}...", cli.port);
    println!("📡 Server endpoints:");
    println!("   GraphQL API: http://localhost:{}/graphql", cli.port);
    println!("   GraphiQL UI: http://localhost:{}/graphiql", cli.port);
    println!("   Health check: http://localhost:{}/health", cli.port);
    println!("   Readiness: http://localhost:{}/ready", cli.port);
    println!();

    if settings.api_key.is_some() {
        println!("🔐 API key required on /graphql");
    } else {
        println!("🔓 No API key configured (dev mode, /graphql is open)");
    }
    println!();

    match server::start_server(settings, cli.port).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("❌ Server failed to start: {e}");
            Err(e)
        }
    }
}
