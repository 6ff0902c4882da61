//! Request-scoped helpers for identity and permissions.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
