//! Data transfer objects exchanged over the HTTP API.

pub mod account;
pub mod api;
pub mod category;
pub mod channel;
pub mod server;
