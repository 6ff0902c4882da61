//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, permission checks and the listing filter pipeline
//! - **Orchestration**: Coordinating repository calls with the media lifecycle
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod category;
pub mod channel;
pub mod server;
