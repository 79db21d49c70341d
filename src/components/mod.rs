//! Reusable UI components.

pub mod project_card;
