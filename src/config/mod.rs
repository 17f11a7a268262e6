//! Configuration module for crawl runs
//!
//! This module provides the `CrawlConfig` struct and its type-safe builder
//! for configuring a crawl with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{Complete, CrawlConfigBuilder, WithOutputDir, WithStatesUrl};
pub use types::CrawlConfig;
