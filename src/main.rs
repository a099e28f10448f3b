use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attendance_ledger::api::{AppState, create_router};
use attendance_ledger::config::ConfigLoader;

const CONFIG_PATH: &str = "config/attendance.yaml";
const BIND_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConfigLoader::load(CONFIG_PATH)?;
    info!(
        data_file = %config.config().data_file.display(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    info!(addr = BIND_ADDR, "Attendance ledger listening");
    axum::serve(listener, app).await?;

    Ok(())
}
