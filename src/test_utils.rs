//! Shared test utilities for `InvoiceDesk`.
//!
//! Common helpers for setting up an in-memory test database, creating test
//! entities with sensible defaults, and the doubles used at the crate's two
//! seams: a listing cache that records invalidations and a scriptable
//! identity provider.

use crate::{
    auth::{IdentityProvider, ProviderError, SignInFlow},
    cache::ListingCache,
    core::{customer, invoice},
    entities,
    errors::Result,
    forms::{InvoiceForm, InvoicePayload, InvoiceStatus},
};
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test customer with an email derived from the name.
pub async fn create_test_customer(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::customer::Model> {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    customer::create_customer(db, name, &email, "/customers/avatar.png").await
}

/// A validated payload billing `customer_id` for `cents`, status pending.
#[must_use]
pub fn test_payload(customer_id: &str, cents: i64) -> InvoicePayload {
    InvoicePayload {
        customer_id: customer_id.to_string(),
        amount: cents,
        status: InvoiceStatus::Pending,
    }
}

/// A raw form that passes validation: $42.50, paid.
#[must_use]
pub fn valid_form(customer_id: &str) -> InvoiceForm {
    InvoiceForm {
        customer_id: Some(customer_id.to_string()),
        amount: Some("42.50".to_string()),
        status: Some("paid".to_string()),
    }
}

/// Inserts a test invoice for `customer_id` over `cents`.
pub async fn create_test_invoice(
    db: &DatabaseConnection,
    customer_id: &str,
    cents: i64,
) -> Result<entities::invoice::Model> {
    invoice::insert_invoice(db, &test_payload(customer_id, cents)).await
}

/// Listing cache double that records invalidated paths in call order.
#[derive(Debug, Default)]
pub struct RecordingCache {
    invalidated: RwLock<Vec<String>>,
}

impl RecordingCache {
    /// Creates a cache with no recorded invalidations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The paths invalidated so far, in call order.
    pub async fn invalidations(&self) -> Vec<String> {
        self.invalidated.read().await.clone()
    }
}

#[async_trait]
impl ListingCache for RecordingCache {
    async fn invalidate(&self, path: &str) {
        self.invalidated.write().await.push(path.to_string());
    }
}

/// Identity provider double with a scripted outcome.
///
/// Records every flow it is asked to run so tests can assert on delegation.
#[derive(Debug, Default)]
pub struct StubProvider {
    failure: Option<ProviderError>,
    flows: RwLock<Vec<SignInFlow>>,
}

impl StubProvider {
    /// A provider that accepts every sign-in.
    #[must_use]
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// A provider that fails every sign-in with the given error.
    #[must_use]
    pub fn failing(error: ProviderError) -> Self {
        Self {
            failure: Some(error),
            flows: RwLock::default(),
        }
    }

    /// The flows this provider has been asked to run, in call order.
    pub async fn flows(&self) -> Vec<SignInFlow> {
        self.flows.read().await.clone()
    }
}

#[async_trait]
impl IdentityProvider for StubProvider {
    async fn sign_in(&self, flow: SignInFlow) -> std::result::Result<(), ProviderError> {
        self.flows.write().await.push(flow);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
