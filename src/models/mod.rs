//! Data models for the recipe catalog.
//!
//! These are the JSON shapes exchanged with the browser client.

mod imported;
pub mod ingredients;
mod recipe;

pub use imported::*;
pub use recipe::*;
