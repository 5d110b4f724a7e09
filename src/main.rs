use anyhow::Result;
use clap::{Parser, Subcommand};
use coin_dashboard::server::{self, AppState};
use coin_dashboard::{ApiClient, Config, Containers, DashboardController, Page, Trigger};
use dotenv::dotenv;
use futures::future::join_all;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the dashboard page (default)
    Serve,
    /// Load every section once and write the page
    Render {
        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let page = Page::new();
    let source = Arc::new(ApiClient::new(&config)?);
    let controller = Arc::new(DashboardController::new(source, Containers::from(&page)));

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let _ = controller.trigger(Trigger::PageLoad);
            let state = actix_web::web::Data::new(AppState { page, controller });
            server::run(&config, state).await?;
        }
        Command::Render { output } => {
            join_all(controller.trigger(Trigger::PageLoad)).await;
            match output {
                Some(path) => {
                    page.write_to(&path)?;
                    info!("Dashboard written to {}", path.display());
                }
                None => std::io::stdout().write_all(page.render().as_bytes())?,
            }
        }
    }

    Ok(())
}
