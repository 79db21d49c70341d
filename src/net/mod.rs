//! Network layer: API types and REST helpers for the portfolio backend.

pub mod api;
pub mod types;
