//! Building blocks behind [`AuthHelper`](crate::AuthHelper)
//!
//! - [`role`] - Role identifiers and the granted role set
//! - [`inflect`] - camelCase to snake_case normalization
//! - [`predicate`] - Role predicates and the predicate-name grammar
//! - [`checker`] - Intersection check
//! - [`cache`] - LRU cache of parsed predicate names
//! - [`session`] - Session user and provider seam
//! - [`config`] - TOML configuration

pub mod cache;
pub mod checker;
pub mod config;
pub mod inflect;
pub mod predicate;
pub mod role;
pub mod session;

#[cfg(test)]
mod tests;
