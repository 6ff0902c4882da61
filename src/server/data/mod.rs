//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories work with SeaORM entity models so that the media
//! lifecycle can compare persisted and incoming file keys directly. Multi-table deletes run
//! inside a single transaction.

pub mod account;
pub mod category;
pub mod channel;
pub mod server;

#[cfg(test)]
mod test;
