//! Shared types, errors, and configuration for Nidhi.
//!
//! This crate provides common types used across all other crates:
//! - Canonical amount handling (outlays arrive in thousands of rupees)
//! - Typed IDs for type-safe references to dropdown/reference data
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
