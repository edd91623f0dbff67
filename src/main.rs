use clap::Parser;
use colored::*;
use portfolio_site::actors::{PageController, PageControllerArgs};
use portfolio_site::cli::{Cli, Command};
use portfolio_site::error::{PortfolioError, Result};
use portfolio_site::feed::RepositoryFeed;
use portfolio_site::page::{PageLayout, ProjectsSection};
use portfolio_site::server::{start_server, AppState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.feed_config();
    let feed = RepositoryFeed::new(config)?;

    match cli.command {
        Command::Render { output } => {
            let mut projects = ProjectsSection::default();
            let render = feed.load_and_render(&mut projects).await;
            let html = projects.grid_html().unwrap_or_default();

            match output {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    eprintln!("✅ Wrote projects grid to {}", path.display());
                }
                None => println!("{}", html),
            }

            if !render.outcome.is_loaded() {
                eprintln!("{}", "Repository feed unavailable, rendered fallback card".yellow());
            }
        }
        Command::Serve { port } => {
            println!("{}", "👋 Hello, fellow developer!".bold().green());
            println!("Thanks for checking out my portfolio.");
            println!("{}\n", "=".repeat(50).dimmed());

            let controller = PageController::spawn_for_page(PageControllerArgs {
                feed: Arc::new(feed),
                layout: PageLayout::portfolio(),
                projects: ProjectsSection::default(),
            })
            .await
            .map_err(|e| PortfolioError::ControllerError(format!("Failed to start page controller: {}", e)))?;

            let app_state = AppState {
                controller: controller.clone(),
                start_time: std::time::Instant::now(),
            };

            println!("\nPress Ctrl+C to stop the server\n");

            start_server(app_state, port, async {
                let _ = tokio::signal::ctrl_c().await;
                println!("\n🛑 Shutting down server...");
            })
            .await?;

            controller.stop(None);
            println!("✅ Server stopped");
        }
    }

    Ok(())
}
