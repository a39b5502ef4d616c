//! Core types and configuration for airforge.
//!
//! This crate defines the build request ([`BuildRequest`]), the extras
//! allowlist ([`ExtrasCatalog`]), the `airforge.toml` schema
//! ([`ForgeConfig`]), and shared error types.

pub mod catalog;
pub mod config;
pub mod error;
pub mod request;

pub use catalog::ExtrasCatalog;
pub use config::{ApiConfig, DefaultsConfig, ForgeConfig};
pub use error::{Error, Result};
pub use request::{BaseImage, BuildRequest, PythonVersion, parse_dep_lines};
