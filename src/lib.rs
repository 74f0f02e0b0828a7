pub mod charts;
pub mod constants;
pub mod metrics;
pub mod pipeline;
