//! Copy the root `README.md` into the documentation index `docs/index.md`.
//!
//! The project root is fixed at build time, so the result does not depend on
//! the directory the tool is invoked from.

pub mod config;
pub mod diff;
pub mod prepare;
pub mod root;

pub use prepare::{prepare, run, Mode};
