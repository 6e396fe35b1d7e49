//! Invoice entity - A billed amount owed by a customer.
//!
//! Amounts are persisted as integer minor units (cents) so currency math
//! never goes through floating point. `status` holds `"pending"` or `"paid"`
//! and `date` is stamped once at creation, at day precision.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Invoice database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    /// Opaque string identifier (uuid)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// ID of the customer this invoice bills
    pub customer_id: String,
    /// Amount in integer cents
    pub amount: i64,
    /// Payment state: `"pending"` or `"paid"`
    pub status: String,
    /// Day the invoice was created; never changed by updates
    pub date: Date,
}

/// Defines relationships between Invoice and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each invoice bills one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
