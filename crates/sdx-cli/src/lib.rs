//! CLI library components for the SDX downstream transformer.

pub mod logging;
