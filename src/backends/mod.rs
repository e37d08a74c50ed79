//! Backends module - File operations
//!
//! Provides:
//! - concat: Directory walk, suffix filter and block writer

pub mod concat;
