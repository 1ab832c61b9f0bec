//! Freshservice API model types.

mod custom_object;

pub use custom_object::*;
