// CLI front end over the portal client layer

pub mod fetch;
pub mod navigate;
pub mod session;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;
use crate::errors::AppError;

pub use fetch::ResourceKind;

/// Asset portal client CLI
#[derive(Parser)]
#[command(name = "asset-portal")]
#[command(about = "Session, navigation and REST client for the asset tracking backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Session management commands
    #[command(subcommand)]
    Session(SessionCommands),

    /// Run the navigation guard for a path and print the outcome
    Navigate {
        /// Path to navigate to, e.g. /PersonView7
        path: String,

        /// Path currently displayed
        #[arg(long)]
        from: Option<String>,
    },

    /// List the route table with each route's requirements
    Routes,

    /// Fetch a backend resource and print the JSON body
    Fetch {
        #[arg(value_enum)]
        resource: ResourceKind,

        /// Fetch a single record instead of the whole collection
        #[arg(long)]
        id: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Store a user document the backend returned from its login endpoint
    Login {
        /// JSON file holding the user document
        #[arg(long)]
        file: std::path::PathBuf,
    },

    /// Forget the stored user
    Logout,

    /// Display the stored user and their permission flags
    Show,
}

/// Execute CLI command
///
/// Routes the parsed CLI command to the appropriate handler function.
pub async fn execute_command(cli: Cli, app_data: &mut AppData) -> Result<(), AppError> {
    match cli.command {
        Commands::Session(session_cmd) => match session_cmd {
            SessionCommands::Login { file } => session::login_from_file(app_data, &file).await?,
            SessionCommands::Logout => session::logout(app_data).await?,
            SessionCommands::Show => session::show(&app_data.store),
        },
        Commands::Navigate { path, from } => {
            navigate::navigate(app_data, &path, from.as_deref())?;
        }
        Commands::Routes => navigate::list_routes(&app_data.router),
        Commands::Fetch { resource, id } => {
            fetch::fetch(&app_data.services, resource, id).await?;
        }
    }

    Ok(())
}
