//! Command handlers, one per binary.

pub mod diffstat;
pub mod path;
pub mod randid;
pub mod som;
pub mod unjar;
