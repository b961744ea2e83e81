//! Live adapters for real external interactions.

pub mod anthropic;
pub mod github;
pub mod heygen;
