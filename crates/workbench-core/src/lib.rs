//! workbench-core: Core types shared by the workbench crates
//!
//! This crate provides:
//! - Error handling
//! - Configuration types
//! - Timing and panic isolation for operations

pub mod config;
pub mod error;
pub mod measure;

pub use config::*;
pub use error::*;
pub use measure::{measure, Measured};
