use hangar::server::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_logging();

    if let Err(e) = startup::serve(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
