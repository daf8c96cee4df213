//! Extension storage boundary.
//!
//! The popup persists everything in one flat key-value namespace. This module
//! names the well-known keys and defines the backend trait the controller's
//! storage adapter talks to.

pub mod keys;
mod repository;

pub use repository::KeyValueStore;
