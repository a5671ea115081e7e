//! Data models for the product catalog client.
//!
//! These models match the JSON shape served by the product endpoint.

mod product;

pub use product::*;
