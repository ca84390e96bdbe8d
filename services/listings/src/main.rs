use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use common::database::DatabaseConfig;
use listings::{DEFAULT_LIMIT, PropertyFilters, QueryGateway};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting listings");

    let db_config = DatabaseConfig::from_env()?;
    let gateway = QueryGateway::connect(&db_config).await?;

    if gateway.health_check().await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    let filters = PropertyFilters {
        city: std::env::args().nth(1),
        ..Default::default()
    };

    let properties = gateway.search_properties(&filters, DEFAULT_LIMIT).await?;
    info!("Found {} properties", properties.len());

    println!("{}", serde_json::to_string_pretty(&properties)?);

    Ok(())
}
