//! Uploaded media handling.
//!
//! Icons and banners live outside the database: a record only stores the storage key of
//! its file. This module computes those keys, validates uploads, talks to the storage
//! backend and keeps stored files in step with the records that own them.

pub mod lifecycle;
pub mod path;
pub mod storage;
pub mod validate;
