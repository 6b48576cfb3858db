//! Frontend utilities

pub mod constants;
pub mod format;
