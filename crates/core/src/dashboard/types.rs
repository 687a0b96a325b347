//! Dashboard summary types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nidhi_shared::types::amount;

use crate::rollup::RollupRow;

/// The summary cards shown above the plan dashboards.
///
/// Clicking the pending card toggles the pending-only view; clicking any
/// other card clears it. The cascade controller reacts to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCard {
    /// Total budget card.
    Budget,
    /// Utilized amount card.
    Utilized,
    /// Remaining balance card.
    Balance,
    /// Pending demands card.
    Pending,
}

/// The figures behind the summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Sum of group budgets, in rupees.
    pub total_budget: Decimal,
    /// Sum of realized amounts, in rupees.
    pub total_utilized: Decimal,
    /// Sum of outstanding amounts, in rupees.
    pub total_balance: Decimal,
    /// Sum of pending demand amounts, in rupees.
    pub pending_amount: Decimal,
    /// Number of groups with pending demands.
    pub pending_count: usize,
}

impl PlanSummary {
    /// Computes the card figures from the currently visible rollup rows -
    /// always the visible set, never the unfiltered universe.
    #[must_use]
    pub fn from_rows(rows: &[RollupRow]) -> Self {
        let mut summary = Self::default();
        for row in rows {
            summary.total_budget += row.budget;
            summary.total_utilized += row.utilized;
            summary.total_balance += row.balance;
            summary.pending_amount += row.pending;
            if !row.pending.is_zero() {
                summary.pending_count += 1;
            }
        }
        summary
    }

    /// The same figures scaled to thousands of rupees for card display.
    #[must_use]
    pub fn in_thousands(&self) -> Self {
        Self {
            total_budget: amount::to_thousands(self.total_budget),
            total_utilized: amount::to_thousands(self.total_utilized),
            total_balance: amount::to_thousands(self.total_balance),
            pending_amount: amount::to_thousands(self.pending_amount),
            pending_count: self.pending_count,
        }
    }
}
