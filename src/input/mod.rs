//! Translation catalog input.
pub mod translation;
