//! Utility modules for the converter.

pub mod log;
