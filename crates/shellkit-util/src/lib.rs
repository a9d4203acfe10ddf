//! Shared utilities for the shellkit tools.
//!
//! This crate provides cross-cutting concerns used by every tool:
//! error types, filesystem helpers (an iterative directory walk, lexical
//! path absolutisation, executable detection), process spawning, and
//! terminal status output.

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;
