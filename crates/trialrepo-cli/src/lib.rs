//! CLI library components for the patient record converter.

pub mod logging;
pub mod pipeline;
pub mod types;
