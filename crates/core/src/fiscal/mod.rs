//! Financial year handling.

pub mod year;

pub use year::{FinancialYear, FiscalError};
