//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as the default
//! values for factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let channel = fixture::channel::entity();
//!
//! let with_icon = fixture::channel::entity_builder()
//!     .icon(Some("channel/1/channel_icon/a.png"))
//!     .build();
//! ```

pub mod category;
pub mod channel;

pub use category::{entity as category_entity, entity_builder as category_entity_builder};
pub use channel::{entity as channel_entity, entity_builder as channel_entity_builder};
