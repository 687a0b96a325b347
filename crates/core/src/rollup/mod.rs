//! Row normalization and grouped aggregation.
//!
//! Dashboard feeds arrive as loosely shaped JSON rows. The normalization
//! adapter maps them onto one canonical row type; the aggregator filters,
//! groups, reduces, sorts, and totals those rows for display.

pub mod aggregate;
pub mod normalize;
pub mod row;


pub use aggregate::{RollupOrder, RollupService};
pub use normalize::{normalize_row, normalize_rows};
pub use row::{DemandRow, GroupDimension, PlanType, RollupRow, RollupTotals, RowStatus};
