//! Operations behind the shellkit binaries.
//!
//! Each module holds the logic of one tool, free of argument parsing and
//! process-level I/O so it can be exercised directly from tests.

pub mod ops_blocksort;
pub mod ops_diffstat;
pub mod ops_path;
pub mod ops_randid;
pub mod ops_unjar;
