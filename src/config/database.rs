//! Database configuration module for `InvoiceDesk`.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. The
//! schema is generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the database always matches the
//! Rust struct definitions without hand-written SQL.

use crate::entities::{Customer, Invoice};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or returns the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/invoice_desk.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the database named by `DATABASE_URL`.
///
/// Falls back to a local `SQLite` file when the variable is unset.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions.
///
/// Customers are created before invoices so the foreign key they carry
/// resolves. Statements use `IF NOT EXISTS`, so running the bootstrap against
/// an existing database is safe.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut customer_table = schema.create_table_from_entity(Customer);
    customer_table.if_not_exists();
    db.execute(builder.build(&customer_table)).await?;

    let mut invoice_table = schema.create_table_from_entity(Invoice);
    invoice_table.if_not_exists();
    db.execute(builder.build(&invoice_table)).await?;

    Ok(())
}
