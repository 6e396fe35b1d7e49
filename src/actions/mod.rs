//! Action layer - per-submission orchestration.
//!
//! Each action runs as one independent unit of work: validate the raw form,
//! issue a single write through [`crate::core`], invalidate the affected
//! listing view, and tell the caller where to navigate. The database
//! connection and the listing cache are passed in explicitly; no action owns
//! shared state.

/// Sign-in flows delegated to the identity provider
pub mod auth;
/// Invoice create/update/delete form actions
pub mod invoice;

use crate::forms::FormState;

/// The invoice listing view every mutation funnels back to.
pub const INVOICES_PATH: &str = "/dashboard/invoices";
/// Landing page after a successful sign-in.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// What the caller should do after an invoice action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResponse {
    /// Re-render the form with the carried state
    Failure(FormState),
    /// The listing was invalidated; navigate to the given path
    Redirect(&'static str),
}

pub use auth::{authenticate, sign_in_with_github, sign_in_with_google};
pub use invoice::{create_invoice, delete_invoice, update_invoice};
