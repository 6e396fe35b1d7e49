//! Core business logic - framework-agnostic store operations.
//!
//! Every function takes the database connection explicitly; nothing in this
//! layer owns process-wide state. Each write is a single parameterized
//! statement, atomic at the row level through the store itself.

/// Customer store operations and config-driven seeding
pub mod customer;
/// Invoice store operations
pub mod invoice;
