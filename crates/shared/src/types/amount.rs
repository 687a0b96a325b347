//! Canonical amount handling.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts in the core are `rust_decimal::Decimal` in rupees.
//!
//! Budget outlays cross the catalog boundary in thousands of rupees (the
//! convention of the published demand schedules). The scaling happens here,
//! once, at ingestion - never as a display-time formatting trick.

use rust_decimal::Decimal;

/// Rupees carried by one catalog outlay unit.
pub const OUTLAY_UNIT_RUPEES: Decimal = Decimal::ONE_THOUSAND;

/// Converts a catalog outlay (in thousands of rupees) to canonical rupees.
#[must_use]
pub fn from_thousands(outlay: Decimal) -> Decimal {
    outlay * OUTLAY_UNIT_RUPEES
}

/// Converts a canonical rupee amount back to thousands for display.
#[must_use]
pub fn to_thousands(amount: Decimal) -> Decimal {
    amount / OUTLAY_UNIT_RUPEES
}
