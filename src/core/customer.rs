//! Customer store operations and config-driven seeding.

use crate::{
    config::customers::CustomerConfig,
    entities::{Customer, customer},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;
use uuid::Uuid;

/// Creates a new customer, validating that name and email are non-empty.
pub async fn create_customer(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    image_url: &str,
) -> Result<customer::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Customer name cannot be empty".to_string(),
        });
    }
    if email.trim().is_empty() {
        return Err(Error::Config {
            message: "Customer email cannot be empty".to_string(),
        });
    }

    let record = customer::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(name.trim().to_string()),
        email: Set(email.trim().to_string()),
        image_url: Set(image_url.to_string()),
    };

    record.insert(db).await.map_err(Into::into)
}

/// All customers ordered alphabetically by name, for the form's customer selector.
pub async fn get_all_customers(db: &DatabaseConnection) -> Result<Vec<customer::Model>> {
    Customer::find()
        .order_by_asc(customer::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Looks up a customer by id.
pub async fn get_customer_by_id(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<customer::Model>> {
    Customer::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Looks up a customer by email, the natural key used during seeding.
pub async fn get_customer_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<customer::Model>> {
    Customer::find()
        .filter(customer::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Seeds the configured customers that are not already present.
///
/// Existing rows are matched by email and left untouched, so re-running the
/// bootstrap is safe. Returns the number of customers inserted.
pub async fn seed_customers(
    db: &DatabaseConnection,
    configs: &[CustomerConfig],
) -> Result<usize> {
    let mut inserted = 0;
    for config in configs {
        if get_customer_by_email(db, &config.email).await?.is_some() {
            continue;
        }
        create_customer(db, &config.name, &config.email, &config.image_url).await?;
        inserted += 1;
    }

    if inserted > 0 {
        info!("Seeded {} customers from configuration", inserted);
    }
    Ok(inserted)
}
