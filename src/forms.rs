//! Invoice form validation.
//!
//! Takes the raw field values exactly as they arrive from the submission
//! boundary and produces either a store-ready [`InvoicePayload`] or a
//! [`FieldErrors`] map for re-display. Every failing field is reported, not
//! just the first, and the dollar amount is only converted to integer cents
//! once the whole form has validated.

use serde::{Deserialize, Serialize};

/// Message shown when the customer reference is missing or empty.
pub const CUSTOMER_REQUIRED: &str = "Please select a customer";
/// Message shown when the amount does not parse or is not greater than zero.
pub const AMOUNT_NOT_POSITIVE: &str = "Please enter an amount greater than $0.";
/// Message shown when the status is not one of the two known values.
pub const STATUS_REQUIRED: &str = "Please enter an invoice status";

/// Raw field values as they arrive from a form submission.
///
/// Fields that were absent from the submission arrive as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InvoiceForm {
    /// Selected customer id
    pub customer_id: Option<String>,
    /// Dollar amount, still a string
    pub amount: Option<String>,
    /// Requested payment state
    pub status: Option<String>,
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Awaiting payment
    Pending,
    /// Payment received
    Paid,
}

impl InvoiceStatus {
    /// The wire/storage spelling of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }

    /// Parses the raw form value; anything but the two known spellings is rejected.
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

/// A validated invoice record, ready for a single-statement write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoicePayload {
    /// Customer the invoice bills
    pub customer_id: String,
    /// Amount in integer cents
    pub amount: i64,
    /// Payment state
    pub status: InvoiceStatus,
}

/// Per-field validation failure messages, keyed by input name.
///
/// Each field carries its messages in the order the checks ran. The struct is
/// serialized as-is for re-display next to the corresponding inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    /// Failures on the customer selector
    pub customer_id: Vec<String>,
    /// Failures on the amount input
    pub amount: Vec<String>,
    /// Failures on the status radio group
    pub status: Vec<String>,
}

impl FieldErrors {
    /// True when no field collected any message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
    }
}

/// The state handed back to the form after a failed submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    /// Per-field validation messages
    pub errors: FieldErrors,
    /// Form-level message (validation summary or persistence failure)
    pub message: Option<String>,
}

impl FormState {
    /// A state carrying only a form-level message, no field errors.
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            errors: FieldErrors::default(),
            message: Some(message.into()),
        }
    }
}

/// Validates a raw invoice form.
///
/// All failing fields are collected into the returned [`FieldErrors`]; a
/// payload is produced only when every field passed. On success the amount
/// has already been converted to integer cents.
pub fn parse_invoice_form(form: &InvoiceForm) -> Result<InvoicePayload, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = match form.customer_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => Some(id.to_string()),
        _ => {
            errors.customer_id.push(CUSTOMER_REQUIRED.to_string());
            None
        }
    };

    let amount = match form.amount.as_deref().and_then(|raw| raw.trim().parse::<f64>().ok()) {
        Some(dollars) if dollars.is_finite() && dollars > 0.0 => Some(to_cents(dollars)),
        _ => {
            errors.amount.push(AMOUNT_NOT_POSITIVE.to_string());
            None
        }
    };

    let status = match form.status.as_deref().and_then(InvoiceStatus::from_raw) {
        Some(status) => Some(status),
        None => {
            errors.status.push(STATUS_REQUIRED.to_string());
            None
        }
    };

    match (customer_id, amount, status) {
        (Some(customer_id), Some(amount), Some(status)) => Ok(InvoicePayload {
            customer_id,
            amount,
            status,
        }),
        _ => Err(errors),
    }
}

/// Converts a dollar amount to integer cents.
///
/// Rounds before the cast so inputs like `42.50` land on exactly `4250`
/// instead of drifting through the float representation.
#[allow(clippy::cast_possible_truncation)]
fn to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}
