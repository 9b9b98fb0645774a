//! Search capabilities.

pub mod alumni;

pub use alumni::SearchLinkdCapability;
