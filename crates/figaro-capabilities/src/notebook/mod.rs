//! Notebook capabilities.

pub mod edit;

pub use edit::EditJupyterCapability;
