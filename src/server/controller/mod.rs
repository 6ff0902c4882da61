//! HTTP request handlers.
//!
//! Controllers resolve the caller, convert DTOs and form data into parameter models,
//! call the service layer and turn domain models back into DTOs.

pub mod auth;
pub mod category;
pub mod channel;
pub mod form;
pub mod server;
