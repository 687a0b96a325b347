//! Allocation record types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fiscal::FinancialYear;

/// Identity of one allocation record within a demand scope.
///
/// Formatted as `{scheme_code}-{ordinal}` where the ordinal is the scheme's
/// position in its demand schedule. The same scheme code can repeat within a
/// demand under different object codes; the ordinal keeps those rows apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationId(String);

impl AllocationId {
    /// Derives the id for a scheme at the given schedule position.
    #[must_use]
    pub fn new(scheme_code: &str, ordinal: usize) -> Self {
        Self(format!("{scheme_code}-{ordinal}"))
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AllocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The scope a record set is loaded for: one demand head within one
/// financial year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandScope {
    /// Financial year the records belong to.
    pub financial_year: FinancialYear,
    /// Demand code, e.g. "O-26".
    pub demand_code: String,
}

/// A scheme allocation within the active demand scope.
///
/// `limit` and `utilized` are canonical rupees. The grouping attributes
/// (district, taluka, member) only feed rollup keys; they never affect the
/// conservation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRecord {
    /// Stable identity within the scope.
    pub id: AllocationId,
    /// Scheme code (CRC).
    pub scheme_code: String,
    /// Scheme title.
    pub title: String,
    /// Budget sub-head, where the demand schedule carries one.
    pub object_code: Option<String>,
    /// Demand code the scheme belongs to.
    pub demand_code: String,
    /// Financial year the allocation is scoped to.
    pub financial_year: FinancialYear,
    /// District attribution, if any.
    pub district: Option<String>,
    /// Taluka attribution, if any.
    pub taluka: Option<String>,
    /// MLA/MLC member attribution, if any.
    pub member: Option<String>,
    /// Budget ceiling in rupees.
    pub limit: Decimal,
    /// Portion of the limit already consumed or committed.
    pub utilized: Decimal,
}

impl AllocationRecord {
    /// Remaining transferable capacity: `limit - utilized`.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.limit - self.utilized
    }
}
