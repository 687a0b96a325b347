//! Canonical row and rollup types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nidhi_shared::types::WorkId;

/// Approval status of a demand row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    /// Administratively approved.
    Approved,
    /// Funds released.
    Disbursed,
    /// Outstanding claim, not yet approved.
    Pending,
}

impl RowStatus {
    /// An amount is either realized (utilized) or outstanding (balance and
    /// pending) - never both, and every amount is classified exactly once.
    #[must_use]
    pub const fn is_realized(self) -> bool {
        matches!(self, Self::Approved | Self::Disbursed)
    }
}

/// Funding program a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// District annual plan.
    Dap,
    /// MLA local-area development fund.
    Mla,
    /// MLC local-area development fund.
    Mlc,
    /// Hill-area development program.
    Hadp,
}

impl PlanType {
    /// Display form, as it appears in dropdowns.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dap => "DAP",
            Self::Mla => "MLA",
            Self::Mlc => "MLC",
            Self::Hadp => "HADP",
        }
    }

    /// Parses the spellings payloads use for plan types.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "dap" | "district annual plan" => Some(Self::Dap),
            "mla" => Some(Self::Mla),
            "mlc" => Some(Self::Mlc),
            "hadp" => Some(Self::Hadp),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical normalized row feeding the aggregator.
///
/// Grouping attributes are optional: feeds differ in which dimensions they
/// carry, and a row missing the active grouping key is excluded from that
/// rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandRow {
    /// Financial year label, e.g. "2025-2026".
    pub financial_year: Option<String>,
    /// Funding program.
    pub plan_type: Option<PlanType>,
    /// District name.
    pub district: Option<String>,
    /// Taluka name.
    pub taluka: Option<String>,
    /// MLA/MLC member name.
    pub member: Option<String>,
    /// Scheme title.
    pub scheme: Option<String>,
    /// Work title.
    pub work: Option<String>,
    /// Demand code.
    pub demand_code: Option<String>,
    /// Sanctioned work, where the feed references one.
    pub work_id: Option<WorkId>,
    /// Amount in rupees.
    pub amount: Decimal,
    /// Approval status.
    pub status: RowStatus,
}

/// Grouping dimension for rollups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupDimension {
    /// Group by demand code.
    DemandCode,
    /// Group by district.
    District,
    /// Group by taluka.
    Taluka,
    /// Group by MLA/MLC member.
    Member,
    /// Group by scheme.
    Scheme,
    /// One group per sanctioned work: the ungrouped per-entity table.
    Work,
}

impl GroupDimension {
    /// The row's value for this dimension, if present.
    #[must_use]
    pub fn key_of(self, row: &DemandRow) -> Option<String> {
        match self {
            Self::DemandCode => row.demand_code.clone(),
            Self::District => row.district.clone(),
            Self::Taluka => row.taluka.clone(),
            Self::Member => row.member.clone(),
            Self::Scheme => row.scheme.clone(),
            Self::Work => row.work_id.map(|id| id.to_string()),
        }
    }
}

/// One grouped aggregate for display. Never persisted; always recomputed
/// from the current row set and filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupRow {
    /// The grouping key.
    pub key: String,
    /// Sum of all amounts in the group.
    pub budget: Decimal,
    /// Sum of realized (approved/disbursed) amounts.
    pub utilized: Decimal,
    /// Sum of outstanding amounts.
    pub balance: Decimal,
    /// Sum of pending demand amounts.
    pub pending: Decimal,
}

impl RollupRow {
    pub(crate) fn empty(key: &str) -> Self {
        Self {
            key: key.to_string(),
            budget: Decimal::ZERO,
            utilized: Decimal::ZERO,
            balance: Decimal::ZERO,
            pending: Decimal::ZERO,
        }
    }
}

/// Footer totals: the column-wise sum of the visible rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupTotals {
    /// Sum of group budgets.
    pub budget: Decimal,
    /// Sum of group utilized amounts.
    pub utilized: Decimal,
    /// Sum of group balances.
    pub balance: Decimal,
    /// Sum of group pending amounts.
    pub pending: Decimal,
}
