//! Customer entity - The party an invoice is billed to.
//!
//! Customers are seeded from configuration at startup and referenced by
//! invoices through `customer_id`. Rows are keyed by opaque string ids.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    /// Opaque string identifier (uuid)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display name shown in the dashboard
    pub name: String,
    /// Contact email; seeding treats it as the natural key
    pub email: String,
    /// Avatar path rendered next to the name
    pub image_url: String,
}

/// Defines relationships between Customer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One customer has many invoices
    #[sea_orm(has_many = "super::invoice::Entity")]
    Invoices,
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
