//! CLI library components for the publication browser.

pub mod browse;
pub mod logging;
pub mod render;
