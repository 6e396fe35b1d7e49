//! Bootstrap binary: prepares the invoice store.
//!
//! Initializes logging, loads configuration, connects to the database,
//! creates the schema, and seeds the configured customers. The rendering
//! frontend runs as a separate process and only needs the store this
//! binary leaves behind.

use dotenvy::dotenv;
use invoice_desk::{config, core, errors::Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the customer seed list
    let app_config = config::customers::load_default_config()
        .inspect_err(|e| error!("Failed to load config.toml: {}", e))?;

    // 4. Connect and make sure the schema exists
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db).await?;

    // 5. Seed customers that are not present yet
    let seeded = core::customer::seed_customers(&db, &app_config.customers)
        .await
        .inspect_err(|e| error!("Failed to seed customers: {}", e))?;

    let customers = core::customer::get_all_customers(&db).await?;
    let invoices = core::invoice::list_invoices(&db).await?;
    info!(
        "Invoice store ready: {} customers ({} newly seeded), {} invoices.",
        customers.len(),
        seeded,
        invoices.len()
    );

    Ok(())
}
