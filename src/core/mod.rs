//! Core infrastructure for repository comparison
//!
//! This module provides:
//! - Repository discovery
//! - Concurrent classification with progress reporting
//! - Grouping, ordering and rendering of results
//! - Configuration constants

pub mod config;
pub mod discovery;
pub mod orchestrator;
pub mod progress;
pub mod render;
pub mod report;

// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
