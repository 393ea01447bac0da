//! API route handlers.

mod health;
mod predict;

pub use health::*;
pub use predict::*;
