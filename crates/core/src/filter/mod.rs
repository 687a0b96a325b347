//! Cascading selector state machine.
//!
//! The dashboards share one pattern: a row of dependent dropdowns
//! (financial year, plan type, district, ...) where committing an upstream
//! value resets everything downstream to "All" and recomputes the option
//! lists still reachable. The committed selections travel as an explicit
//! `FilterState` snapshot injected into the aggregator.

pub mod controller;
pub mod options;
pub mod state;

pub use controller::{CascadeController, FieldState};
pub use options::{build_options, reference_options, OptionOrder};
pub use state::{FilterField, FilterState, Selection};
