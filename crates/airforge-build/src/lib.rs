//! Dockerfile rendering and build-context emission for airforge.
//!
//! # Generate pipeline
//!
//! ```text
//! airforge generate
//!   1. Assemble    ── flags + airforge.toml defaults → BuildRequest
//!   2. Validate    ── extras checked against the catalog
//!   3. Dockerfile  ── DockerfileGenerator::render()
//!   4. Context     ── context::write_context() (only with --out)
//! ```
//!
//! Rendering is pure: same request in, byte-identical text out, no I/O.
//! Everything filesystem-shaped lives in [`context`].

pub mod context;
pub mod dockerfile;

pub use dockerfile::DockerfileGenerator;
