//! Site server: wires the database, object storage and router together and serves them.
//!
//! Run: `cargo run --bin modia-server` with the variables from `.env.example` set.

use modia_listings::{app, AppState, ListingService, PgListingStore, S3MediaStorage, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("modia_listings=info,tower_http=info")),
        )
        .init();

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "refusing to start");
            return Err(e.into());
        }
    };

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.db_max_connections)
        .connect(&settings.database_url)
        .await?;
    let storage = S3MediaStorage::connect(&settings.storage).await;
    tracing::info!(bucket = %storage.bucket(), "object storage configured");

    let listings = ListingService::new(Arc::new(PgListingStore::new(pool)), Arc::new(storage));
    let bind_addr = settings.bind_addr;
    let state = AppState::new(listings, settings);

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Modia listings listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
