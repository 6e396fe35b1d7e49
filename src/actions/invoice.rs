//! Invoice form actions.
//!
//! The three mutations share one shape: validate, write, invalidate the
//! listing, redirect. They differ in how persistence failures surface.
//! Create reports the failure to the form and stops before invalidation.
//! Update and delete log the failure and proceed to invalidate and redirect
//! anyway; that asymmetry is existing behavior, kept as-is and pinned by the
//! tests below. None of the actions checks the id against the signed-in
//! user; authorization happens upstream.

use crate::{
    actions::{ActionResponse, INVOICES_PATH},
    cache::ListingCache,
    core::invoice,
    forms::{self, FormState, InvoiceForm},
};
use sea_orm::DatabaseConnection;
use tracing::error;

const CREATE_MISSING_FIELDS: &str = "Missing Fields, failed to create Invoice.";
const UPDATE_MISSING_FIELDS: &str = "Missing Fields, failed to update Invoice.";
const CREATE_DB_ERROR: &str = "Database error: Failed to Create Invoices.";

/// Creates an invoice from a raw form submission.
///
/// On validation failure the field errors go back to the form and nothing is
/// written. On a persistence failure the fixed database-error message goes
/// back and the listing is left untouched. Only a successful write
/// invalidates the listing and redirects.
pub async fn create_invoice(
    db: &DatabaseConnection,
    cache: &dyn ListingCache,
    form: &InvoiceForm,
) -> ActionResponse {
    let payload = match forms::parse_invoice_form(form) {
        Ok(payload) => payload,
        Err(errors) => {
            return ActionResponse::Failure(FormState {
                errors,
                message: Some(CREATE_MISSING_FIELDS.to_string()),
            });
        }
    };

    if let Err(e) = invoice::insert_invoice(db, &payload).await {
        error!("Failed to insert invoice: {}", e);
        return ActionResponse::Failure(FormState::with_message(CREATE_DB_ERROR));
    }

    cache.invalidate(INVOICES_PATH).await;
    ActionResponse::Redirect(INVOICES_PATH)
}

/// Updates an invoice by id from a raw form submission.
///
/// A write failure is logged and swallowed; the listing is invalidated and
/// the caller redirected either way. A nonexistent id updates zero rows and
/// is indistinguishable from success here.
pub async fn update_invoice(
    db: &DatabaseConnection,
    cache: &dyn ListingCache,
    id: &str,
    form: &InvoiceForm,
) -> ActionResponse {
    let payload = match forms::parse_invoice_form(form) {
        Ok(payload) => payload,
        Err(errors) => {
            return ActionResponse::Failure(FormState {
                errors,
                message: Some(UPDATE_MISSING_FIELDS.to_string()),
            });
        }
    };

    if let Err(e) = invoice::update_invoice(db, id, &payload).await {
        error!("Failed to update invoice {}: {}", id, e);
    }

    cache.invalidate(INVOICES_PATH).await;
    ActionResponse::Redirect(INVOICES_PATH)
}

/// Deletes an invoice by id.
///
/// A write failure is logged and swallowed; invalidation always happens,
/// whether or not a row was actually deleted.
pub async fn delete_invoice(
    db: &DatabaseConnection,
    cache: &dyn ListingCache,
    id: &str,
) -> ActionResponse {
    if let Err(e) = invoice::delete_invoice(db, id).await {
        error!("Failed to delete invoice {}: {}", id, e);
    }

    cache.invalidate(INVOICES_PATH).await;
    ActionResponse::Redirect(INVOICES_PATH)
}
