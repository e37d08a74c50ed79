//! Flows module - Interactive front-end steps
//!
//! Provides:
//! - wizard: field-by-field form collecting the run parameters
//! - confirm: blocking confirmation before walking the filesystem root

pub mod confirm;
pub mod wizard;
