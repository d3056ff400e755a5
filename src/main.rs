use tracing::{error, info};

use chanboard::{BoardService, Config, Database, SqlBoardRepository};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = chanboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        chanboard::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    let db = match Database::connect(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open database: {e}");
            std::process::exit(1);
        }
    };

    let service = BoardService::new(SqlBoardRepository::new(db.pool().clone()));
    match service.list_boards().await {
        Ok(boards) => {
            info!("{} board(s) available", boards.len());
            for board in &boards {
                info!("/{}/ - {}: {}", board.slug(), board.name(), board.description());
            }
        }
        Err(e) => error!("Failed to list boards: {e}"),
    }

    db.close().await;
}
