use movebrasil::{api, config::Config, db::init_db, seed_demo_data, Repository, SeedOutcome};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize database
    let pool = match init_db(&config.database_path).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    // Seed before accepting traffic
    match seed_demo_data(&pool).await {
        Ok(SeedOutcome::Seeded { .. }) => tracing::info!("Demo network loaded"),
        Ok(SeedOutcome::AlreadySeeded) => {}
        Err(e) => {
            eprintln!("Failed to seed demo data: {}", e);
            std::process::exit(1);
        }
    }

    let repo = Arc::new(Repository::new(pool));

    // Create router
    let state = api::AppState::new(repo);
    let app = match &config.static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Serving static assets under /static");
            api::create_router_with_static_assets(state, dir)
        }
        None => api::create_router(state),
    };

    // Bind to address
    let addr = SocketAddr::new(config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
