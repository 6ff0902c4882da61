//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let account = factory::account::create_account(&db).await?;
//! let category = factory::category::create_category(&db).await?;
//!
//! let (owner, category, server) = factory::helpers::create_server_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let server = factory::server::ServerFactory::new(&db, owner.id, category.id)
//!     .name("Speedrunners")
//!     .build()
//!     .await?;
//! ```

pub mod account;
pub mod category;
pub mod channel;
pub mod helpers;
pub mod server;
pub mod server_member;

pub use account::create_account;
pub use category::create_category;
pub use channel::create_channel;
pub use server::create_server;
pub use server_member::{add_member, add_members};
