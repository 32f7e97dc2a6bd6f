/// Roster Server - GraphQL user registry
use clap::{Parser, Subcommand};
use roster_core::{normalize_birthday, NewUser, UserRepository};
use roster_server::{api, config::ServerConfig, state::AppState};
use roster_storage::{SqliteUserRepository, Store};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user registry GraphQL server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Birthday as YYYY-MM-DD or an RFC 3339 timestamp
        #[arg(short, long)]
        birthday: String,
        /// Initial quantity
        #[arg(short, long, default_value_t = 0)]
        quantity: i32,
        /// Avatar URL or data URI
        #[arg(short, long)]
        avatar: Option<String>,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(&config).await?;
        }
        Commands::AddUser {
            name,
            birthday,
            quantity,
            avatar,
        } => {
            add_user(&config, name, &birthday, quantity, avatar).await?;
        }
        Commands::ListUsers => {
            list_users(&config).await?;
        }
    }

    Ok(())
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // A store that cannot be opened aborts startup
    let store = Store::open(&config.storage.store_options()).await?;
    tracing::info!("Database connected");

    let app = api::router(AppState::new(store.clone()));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on http://{}/graphql", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn add_user(
    config: &ServerConfig,
    name: String,
    birthday: &str,
    quantity: i32,
    avatar: Option<String>,
) -> anyhow::Result<()> {
    let birthdate = normalize_birthday(birthday)?;

    let store = Store::open(&config.storage.store_options()).await?;
    let repository = SqliteUserRepository::new(store.clone());

    let mut new_user = NewUser::new(name, birthdate, quantity);
    new_user.avatar = avatar;

    let user = repository.create_user(new_user).await?;
    println!("Created user {} - {}", user.id, user.name);

    store.close().await;
    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let store = Store::open(&config.storage.store_options()).await?;
    let repository = SqliteUserRepository::new(store.clone());

    let users = repository.list_users().await?;

    println!("Users:");
    for user in users {
        println!(
            "  {} - {} (born {}, quantity {})",
            user.id, user.name, user.birthdate, user.quantity
        );
    }

    store.close().await;
    Ok(())
}
