//! Selector state types.

use serde::{Deserialize, Serialize};

use crate::rollup::{DemandRow, PlanType, RowStatus};

/// A selector value: the "All" sentinel or a committed value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Match everything.
    #[default]
    All,
    /// Match one committed value.
    Value(String),
}

impl Selection {
    /// The sentinel label, always first in option lists.
    pub const ALL_LABEL: &'static str = "All";

    /// Returns true if the candidate passes this selection.
    #[must_use]
    pub fn accepts(&self, candidate: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Value(value) => candidate == Some(value.as_str()),
        }
    }

    /// The committed value, if any.
    #[must_use]
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Value(value) => Some(value),
        }
    }

    /// The label shown in the selector.
    #[must_use]
    pub fn label(&self) -> &str {
        self.as_value().unwrap_or(Self::ALL_LABEL)
    }
}

/// Ordered selector fields. Field `k`'s option list and default depend on
/// the committed values of every field before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    /// Financial year (the cascade root).
    FinancialYear,
    /// Funding program.
    PlanType,
    /// District.
    District,
    /// Taluka.
    Taluka,
    /// MLA/MLC member.
    Member,
    /// Scheme.
    Scheme,
    /// Sanctioned work (the cascade leaf).
    Work,
}

impl FilterField {
    /// Cascade order, upstream first.
    pub const CASCADE: [Self; 7] = [
        Self::FinancialYear,
        Self::PlanType,
        Self::District,
        Self::Taluka,
        Self::Member,
        Self::Scheme,
        Self::Work,
    ];

    /// The row attribute this field selects on.
    #[must_use]
    pub fn attribute(self, row: &DemandRow) -> Option<String> {
        match self {
            Self::FinancialYear => row.financial_year.clone(),
            Self::PlanType => row.plan_type.map(|p| p.as_str().to_string()),
            Self::District => row.district.clone(),
            Self::Taluka => row.taluka.clone(),
            Self::Member => row.member.clone(),
            Self::Scheme => row.scheme.clone(),
            Self::Work => row.work.clone(),
        }
    }
}

/// Snapshot of committed selections, injected into the aggregator.
///
/// The pending-only toggle rides along but is orthogonal to the cascade:
/// it never constrains option lists, only row visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Financial year selection.
    pub financial_year: Selection,
    /// Plan type selection.
    pub plan_type: Selection,
    /// District selection.
    pub district: Selection,
    /// Taluka selection.
    pub taluka: Selection,
    /// Member selection.
    pub member: Selection,
    /// Scheme selection.
    pub scheme: Selection,
    /// Work selection.
    pub work: Selection,
    /// Show only pending rows.
    pub pending_only: bool,
}

impl FilterState {
    /// Returns true if the row passes every committed selection.
    #[must_use]
    pub fn matches(&self, row: &DemandRow) -> bool {
        self.financial_year.accepts(row.financial_year.as_deref())
            && self
                .plan_type
                .accepts(row.plan_type.map(PlanType::as_str))
            && self.district.accepts(row.district.as_deref())
            && self.taluka.accepts(row.taluka.as_deref())
            && self.member.accepts(row.member.as_deref())
            && self.scheme.accepts(row.scheme.as_deref())
            && self.work.accepts(row.work.as_deref())
            && (!self.pending_only || row.status == RowStatus::Pending)
    }

    /// The selection committed for a field.
    #[must_use]
    pub fn selection(&self, field: FilterField) -> &Selection {
        match field {
            FilterField::FinancialYear => &self.financial_year,
            FilterField::PlanType => &self.plan_type,
            FilterField::District => &self.district,
            FilterField::Taluka => &self.taluka,
            FilterField::Member => &self.member,
            FilterField::Scheme => &self.scheme,
            FilterField::Work => &self.work,
        }
    }

    /// Commits a selection for a field.
    pub fn set(&mut self, field: FilterField, selection: Selection) {
        match field {
            FilterField::FinancialYear => self.financial_year = selection,
            FilterField::PlanType => self.plan_type = selection,
            FilterField::District => self.district = selection,
            FilterField::Taluka => self.taluka = selection,
            FilterField::Member => self.member = selection,
            FilterField::Scheme => self.scheme = selection,
            FilterField::Work => self.work = selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn row(district: Option<&str>, status: RowStatus) -> DemandRow {
        DemandRow {
            financial_year: Some("2025-2026".to_string()),
            plan_type: Some(PlanType::Dap),
            district: district.map(ToString::to_string),
            taluka: None,
            member: None,
            scheme: None,
            work: None,
            demand_code: None,
            work_id: None,
            amount: Decimal::ZERO,
            status,
        }
    }

    #[test]
    fn test_all_matches_everything() {
        let state = FilterState::default();
        assert!(state.matches(&row(Some("Pune"), RowStatus::Pending)));
        assert!(state.matches(&row(None, RowStatus::Approved)));
    }

    #[test]
    fn test_committed_value_filters() {
        let mut state = FilterState::default();
        state.set(FilterField::District, Selection::Value("Pune".to_string()));
        assert!(state.matches(&row(Some("Pune"), RowStatus::Pending)));
        assert!(!state.matches(&row(Some("Nashik"), RowStatus::Pending)));
        // A committed value never matches an absent attribute.
        assert!(!state.matches(&row(None, RowStatus::Pending)));
    }

    #[test]
    fn test_pending_only_is_orthogonal() {
        let state = FilterState {
            pending_only: true,
            ..FilterState::default()
        };
        assert!(state.matches(&row(Some("Pune"), RowStatus::Pending)));
        assert!(!state.matches(&row(Some("Pune"), RowStatus::Approved)));
    }

    #[test]
    fn test_selection_label() {
        assert_eq!(Selection::All.label(), "All");
        assert_eq!(Selection::Value("Pune".to_string()).label(), "Pune");
    }
}
