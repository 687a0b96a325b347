//! Static scheme catalog.
//!
//! The catalog is configuration data: per demand head, the ordered list of
//! schemes the published schedule carries. The store derives allocation
//! records from it; nothing here performs I/O.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One scheme line in a demand schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeDef {
    /// Scheme code (CRC).
    pub scheme_code: String,
    /// Scheme title.
    pub title: String,
    /// Budget sub-head, where the schedule carries one.
    #[serde(default)]
    pub object_code: Option<String>,
    /// Published outlay in thousands of rupees.
    pub outlay_thousands: Decimal,
}

/// All schemes under one demand head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandSchedule {
    /// Demand code, e.g. "O-26".
    pub demand_code: String,
    /// Demand title, e.g. "O-26 (Revenue)".
    pub title: String,
    /// Schemes in schedule order. Order matters: record ids are derived
    /// from the position here.
    pub schemes: Vec<SchemeDef>,
}

/// Static catalog of demand schedules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeCatalog {
    demands: Vec<DemandSchedule>,
}

impl SchemeCatalog {
    /// Creates a catalog from demand schedules.
    #[must_use]
    pub fn new(demands: Vec<DemandSchedule>) -> Self {
        Self { demands }
    }

    /// Looks up the schedule for a demand code.
    #[must_use]
    pub fn schedule(&self, demand_code: &str) -> Option<&DemandSchedule> {
        self.demands.iter().find(|d| d.demand_code == demand_code)
    }

    /// Demand codes in catalog order.
    pub fn demand_codes(&self) -> impl Iterator<Item = &str> {
        self.demands.iter().map(|d| d.demand_code.as_str())
    }
}
