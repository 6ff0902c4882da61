//! SeaORM entity definitions for accounts, categories, servers, server
//! memberships and channels.

pub mod prelude;

pub mod account;
pub mod category;
pub mod channel;
pub mod server;
pub mod server_member;
