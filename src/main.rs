use anyhow::Result;
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;

use diabetcare_mealplan::PlanBook;
use diabetcare_recipe::Catalog;

/// diabetcare - diabetes management companion site
#[derive(Parser)]
#[command(name = "diabetcare")]
#[command(about = "Recipes, meal planning and community support for diabetes management", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate the compiled-in catalog and meal-plan templates and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = diabetcare::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    diabetcare::observability::init_observability(
        "diabetcare",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Check => check_command(),
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: diabetcare::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting diabetcare server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let app = diabetcare::create_app(config)?.layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

fn check_command() -> Result<()> {
    let catalog = Catalog::builtin();
    let plan_book = PlanBook::builtin();

    plan_book.validate(&catalog)?;

    tracing::info!(
        recipes = catalog.len(),
        "Catalog and meal-plan templates are consistent"
    );

    Ok(())
}
