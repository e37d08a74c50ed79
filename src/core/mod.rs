//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Run parameters, run report and the error taxonomy
//! - The whitespace normalizer
//! - Path display helpers
//! - Rendering of run summaries

pub mod model;
pub mod normalize;
pub mod paths;
pub mod render;
