//! Trait definitions for Freshservice operations.
//!
//! The record client is generic over the HTTP layer through [`Transport`].

mod transport;

pub use transport::{DeleteOutcome, Transport};
