//! In-memory allocation record store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nidhi_shared::types::amount;

use super::catalog::SchemeCatalog;
use super::types::{AllocationId, AllocationRecord, DemandScope};

/// The flat record set for the active demand scope.
///
/// Owned exclusively by the active view; records are mutated in place by a
/// successful re-appropriation and discarded wholesale on a scope switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationStore {
    scope: DemandScope,
    records: Vec<AllocationRecord>,
}

impl AllocationStore {
    /// Materializes the record set for a demand scope from the catalog.
    ///
    /// Deterministic and infallible: `utilized` starts at zero, limits are
    /// scaled from the published thousands, and an unknown demand code
    /// degrades to an empty record set.
    #[must_use]
    pub fn load(catalog: &SchemeCatalog, scope: DemandScope) -> Self {
        let records = match catalog.schedule(&scope.demand_code) {
            Some(schedule) => schedule
                .schemes
                .iter()
                .enumerate()
                .map(|(ordinal, def)| AllocationRecord {
                    id: AllocationId::new(&def.scheme_code, ordinal),
                    scheme_code: def.scheme_code.clone(),
                    title: def.title.clone(),
                    object_code: def.object_code.clone(),
                    demand_code: schedule.demand_code.clone(),
                    financial_year: scope.financial_year,
                    district: None,
                    taluka: None,
                    member: None,
                    limit: amount::from_thousands(def.outlay_thousands),
                    utilized: Decimal::ZERO,
                })
                .collect(),
            None => {
                tracing::warn!(
                    demand_code = %scope.demand_code,
                    "unknown demand code, loading empty record set"
                );
                Vec::new()
            }
        };
        Self { scope, records }
    }

    /// Discards the current record set and re-derives it fresh for the new
    /// scope. Utilization recorded against the old scope does not carry over.
    pub fn switch_scope(&mut self, catalog: &SchemeCatalog, scope: DemandScope) {
        *self = Self::load(catalog, scope);
    }

    /// The scope the records were loaded for.
    #[must_use]
    pub fn scope(&self) -> &DemandScope {
        &self.scope
    }

    /// All records, in schedule order.
    #[must_use]
    pub fn records(&self) -> &[AllocationRecord] {
        &self.records
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &AllocationId) -> Option<&AllocationRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Position of a record within the store.
    #[must_use]
    pub fn position(&self, id: &AllocationId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    /// Mutable access for the transfer engine.
    pub(crate) fn records_mut(&mut self) -> &mut [AllocationRecord] {
        &mut self.records
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of limits across the store.
    #[must_use]
    pub fn total_limit(&self) -> Decimal {
        self.records.iter().map(|r| r.limit).sum()
    }

    /// Sum of balances across the store.
    #[must_use]
    pub fn total_balance(&self) -> Decimal {
        self.records.iter().map(AllocationRecord::balance).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::catalog::{DemandSchedule, SchemeDef};
    use rust_decimal_macros::dec;

    fn scheme(code: &str, object_code: Option<&str>, outlay_thousands: Decimal) -> SchemeDef {
        SchemeDef {
            scheme_code: code.to_string(),
            title: format!("Scheme {code}"),
            object_code: object_code.map(ToString::to_string),
            outlay_thousands,
        }
    }

    fn catalog() -> SchemeCatalog {
        SchemeCatalog::new(vec![
            DemandSchedule {
                demand_code: "O-26".to_string(),
                title: "O-26 (Revenue)".to_string(),
                schemes: vec![
                    scheme("2059", Some("31"), dec!(500)),
                    scheme("2059", Some("53"), dec!(300)),
                    scheme("2216", None, dec!(250)),
                ],
            },
            DemandSchedule {
                demand_code: "O-27".to_string(),
                title: "O-27 (Capital)".to_string(),
                schemes: vec![scheme("4059", None, dec!(1200))],
            },
        ])
    }

    fn scope(demand_code: &str) -> DemandScope {
        DemandScope {
            financial_year: "2025-2026".parse().unwrap(),
            demand_code: demand_code.to_string(),
        }
    }

    #[test]
    fn test_load_materializes_schedule() {
        let store = AllocationStore::load(&catalog(), scope("O-26"));
        assert_eq!(store.len(), 3);
        assert!(store.records().iter().all(|r| r.utilized == Decimal::ZERO));
        // Outlays are published in thousands of rupees.
        assert_eq!(store.records()[0].limit, dec!(500000));
    }

    #[test]
    fn test_repeated_scheme_codes_get_distinct_ids() {
        let store = AllocationStore::load(&catalog(), scope("O-26"));
        assert_eq!(store.records()[0].id.as_str(), "2059-0");
        assert_eq!(store.records()[1].id.as_str(), "2059-1");
        assert_eq!(store.records()[0].object_code.as_deref(), Some("31"));
        assert_eq!(store.records()[1].object_code.as_deref(), Some("53"));
    }

    #[test]
    fn test_unknown_demand_loads_empty() {
        let store = AllocationStore::load(&catalog(), scope("O-99"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_switch_scope_discards_utilization() {
        let catalog = catalog();
        let mut store = AllocationStore::load(&catalog, scope("O-26"));
        store.records_mut()[0].utilized = dec!(100000);

        store.switch_scope(&catalog, scope("O-27"));
        assert_eq!(store.len(), 1);

        store.switch_scope(&catalog, scope("O-26"));
        assert_eq!(store.records()[0].utilized, Decimal::ZERO);
    }

    #[test]
    fn test_totals() {
        let catalog = catalog();
        let mut store = AllocationStore::load(&catalog, scope("O-26"));
        assert_eq!(store.total_limit(), dec!(1050000));
        store.records_mut()[2].utilized = dec!(50000);
        assert_eq!(store.total_balance(), dec!(1000000));
        // Limits are untouched by utilization.
        assert_eq!(store.total_limit(), dec!(1050000));
    }
}
