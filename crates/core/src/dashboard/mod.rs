//! Plan summary metrics.

pub mod types;

pub use types::{MetricCard, PlanSummary};
