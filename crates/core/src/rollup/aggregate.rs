//! Grouped aggregation over canonical rows.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filter::FilterState;

use super::row::{DemandRow, GroupDimension, RollupRow, RollupTotals};

/// How rollup groups are ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupOrder {
    /// Case-insensitive ascending on the grouping key.
    ByKey,
    /// Zero-balance groups first, ties left in encounter order. A display
    /// convenience used by the HADP detail table, not a business rule.
    ZeroBalanceFirst,
}

/// Rollup computation over canonical rows.
pub struct RollupService;

impl RollupService {
    /// Filters, groups, and reduces rows into display aggregates.
    ///
    /// Classification is exhaustive and exclusive: a realized row's amount
    /// goes to `utilized`, an outstanding row's amount to `balance` and
    /// `pending`. Rows without a value for the grouping dimension are
    /// excluded from the result.
    #[must_use]
    pub fn rollup(
        rows: &[DemandRow],
        filter: &FilterState,
        dimension: GroupDimension,
        order: RollupOrder,
    ) -> Vec<RollupRow> {
        let mut groups: Vec<RollupRow> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut dropped = 0usize;

        for row in rows.iter().filter(|row| filter.matches(row)) {
            let Some(key) = dimension.key_of(row) else {
                dropped += 1;
                continue;
            };
            let position = *positions.entry(key.clone()).or_insert_with(|| {
                groups.push(RollupRow::empty(&key));
                groups.len() - 1
            });
            let group = &mut groups[position];
            group.budget += row.amount;
            if row.status.is_realized() {
                group.utilized += row.amount;
            } else {
                group.balance += row.amount;
                group.pending += row.amount;
            }
        }

        if dropped > 0 {
            tracing::warn!(
                dropped,
                ?dimension,
                "rows without a grouping key were excluded from the rollup"
            );
        }

        match order {
            RollupOrder::ByKey => {
                groups.sort_by(|a, b| a.key.to_lowercase().cmp(&b.key.to_lowercase()));
            }
            RollupOrder::ZeroBalanceFirst => {
                // Stable sort keeps encounter order within each half.
                groups.sort_by_key(|group| !group.balance.is_zero());
            }
        }
        groups
    }

    /// Footer totals over exactly the visible rows.
    #[must_use]
    pub fn totals(rows: &[RollupRow]) -> RollupTotals {
        RollupTotals {
            budget: rows.iter().map(|r| r.budget).sum::<Decimal>(),
            utilized: rows.iter().map(|r| r.utilized).sum::<Decimal>(),
            balance: rows.iter().map(|r| r.balance).sum::<Decimal>(),
            pending: rows.iter().map(|r| r.pending).sum::<Decimal>(),
        }
    }
}
