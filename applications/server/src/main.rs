/// Mixtape Server - in-memory playlist service
use clap::{Parser, Subcommand};
use mixtape_core::{demo, PlaylistStore};
use mixtape_server::{api, config::ServerConfig, state::AppState};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mixtape-server")]
#[command(about = "Mixtape playlist server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the demo playlists
    Demo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mixtape_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Demo => {
            print_demo()?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load_from(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Mixtape Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let mut store = PlaylistStore::new();
    if config.playlists.seed_demo {
        demo::seed(&mut store)?;
        tracing::info!("Seeded {} demo playlists", store.len());
    }

    if config.api.strict_status {
        tracing::info!("Strict status mode enabled");
    }

    let app = api::create_router(AppState::new(store, config.api.strict_status));

    let addr = config.bind_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_demo() -> anyhow::Result<()> {
    let mut store = PlaylistStore::new();
    demo::seed(&mut store)?;

    for (name, _) in demo::catalogue() {
        println!("{}", store.get(name)?.render());
    }

    Ok(())
}
