use clap::Parser;

use asset_portal::app_data::AppData;
use asset_portal::cli::{execute_command, Cli};
use asset_portal::config::{init_logging, ClientSettings};
use asset_portal::errors::AppError;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    init_logging()?;

    let cli = Cli::parse();

    let settings = ClientSettings::from_env()?;
    tracing::debug!(
        api_base_url = settings.api_base_url(),
        storage = settings.storage_database_url(),
        "Client settings loaded"
    );

    let mut app_data = AppData::init(settings).await?;

    execute_command(cli, &mut app_data).await
}
