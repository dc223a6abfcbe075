//! Terminal-based inventory tracking application
//!
//! This library provides the core functionality for the inventory CLI. It
//! tracks equipment items grouped into categories, behind a small local user
//! database with admin and moderator roles, and produces filtered reports
//! that can be exported as PDF or CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (users, categories, items)
//! - `storage`: JSON file storage layer
//! - `auth`: Password hashing and session handling
//! - `services`: Business logic layer
//! - `reports`: Filtering and statistics
//! - `export`: PDF and CSV report writers
//! - `audit`: Audit logging system
//! - `display`: Terminal output formatting
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use inventory_cli::config::{paths::InventoryPaths, settings::Settings};
//!
//! let paths = InventoryPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{InventoryError, InventoryResult};
