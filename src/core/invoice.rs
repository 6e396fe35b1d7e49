//! Invoice store operations.
//!
//! Inserts stamp the creation date server-side; updates and deletes match by
//! bare id and report the affected row count instead of checking existence
//! first, so a nonexistent id silently touches zero rows. Authorization of
//! the caller against the id is not checked here; that is the caller's
//! concern.

use crate::{
    entities::{Invoice, invoice},
    errors::Result,
    forms::InvoicePayload,
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};
use uuid::Uuid;

/// Inserts a new invoice from a validated payload.
///
/// Generates the opaque id and stamps `date` with the current day; both are
/// server-side values the form never supplies.
pub async fn insert_invoice(
    db: &DatabaseConnection,
    payload: &InvoicePayload,
) -> Result<invoice::Model> {
    let record = invoice::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        customer_id: Set(payload.customer_id.clone()),
        amount: Set(payload.amount),
        status: Set(payload.status.as_str().to_string()),
        date: Set(Utc::now().date_naive()),
    };

    record.insert(db).await.map_err(Into::into)
}

/// Updates the settable columns of an invoice by id.
///
/// The stamped `date` is never touched. Returns the number of rows affected;
/// a nonexistent id yields `0` without error.
pub async fn update_invoice(
    db: &DatabaseConnection,
    id: &str,
    payload: &InvoicePayload,
) -> Result<u64> {
    use sea_orm::sea_query::Expr;

    let result = Invoice::update_many()
        .col_expr(
            invoice::Column::CustomerId,
            Expr::value(payload.customer_id.clone()),
        )
        .col_expr(invoice::Column::Amount, Expr::value(payload.amount))
        .col_expr(invoice::Column::Status, Expr::value(payload.status.as_str()))
        .filter(invoice::Column::Id.eq(id))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

/// Deletes an invoice by id. Returns the number of rows affected.
pub async fn delete_invoice(db: &DatabaseConnection, id: &str) -> Result<u64> {
    let result = Invoice::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}

/// All invoices, newest first. This backs the dashboard listing view.
pub async fn list_invoices(db: &DatabaseConnection) -> Result<Vec<invoice::Model>> {
    Invoice::find()
        .order_by_desc(invoice::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Looks up a single invoice by id.
pub async fn get_invoice_by_id(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<invoice::Model>> {
    Invoice::find_by_id(id).one(db).await.map_err(Into::into)
}
