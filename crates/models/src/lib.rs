//! Domain models shared across the workspace.
//!
//! - `entity`: the `Entity` trait and identifier generation used by data services.
//! - `review`: the review model.

pub mod errors;
pub mod entity;
pub mod review;

pub use entity::{Entity, GeneratedId};
pub use review::Review;
