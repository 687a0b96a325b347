//! Normalization of heterogeneous payload rows.
//!
//! The dashboard feeds spell the same logical fields several ways
//! (`financialYear` vs `fy` vs `fyear`, `amount` vs `cost` vs
//! `estimatedCost`). All of that variance is absorbed here, once, so the
//! aggregator only ever sees `DemandRow`.

use rust_decimal::Decimal;
use serde_json::Value;

use super::row::{DemandRow, PlanType, RowStatus};

const FINANCIAL_YEAR_KEYS: &[&str] = &["financialYear", "fy", "fyear"];
const PLAN_TYPE_KEYS: &[&str] = &["planType", "plan"];
const DISTRICT_KEYS: &[&str] = &["district", "districtName"];
const TALUKA_KEYS: &[&str] = &["taluka", "talukaName"];
const MEMBER_KEYS: &[&str] = &["mlaName", "mlcName", "memberName"];
const SCHEME_KEYS: &[&str] = &["schemeName", "schemeTitle", "scheme"];
const WORK_KEYS: &[&str] = &["workName", "workTitle", "work"];
const DEMAND_CODE_KEYS: &[&str] = &["demandCode", "demandNo", "demand"];
const WORK_ID_KEYS: &[&str] = &["workId", "workID"];
const AMOUNT_KEYS: &[&str] = &["amount", "cost", "estimatedCost"];
const STATUS_KEYS: &[&str] = &["status", "workStatus", "approvalStatus"];

/// Normalizes a payload batch, skipping entries that are not JSON objects.
#[must_use]
pub fn normalize_rows(payload: &[Value]) -> Vec<DemandRow> {
    let mut rows = Vec::with_capacity(payload.len());
    let mut skipped = 0usize;
    for value in payload {
        match normalize_row(value) {
            Some(row) => rows.push(row),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "non-object payload entries were skipped");
    }
    rows
}

/// Normalizes one payload entry. Returns `None` for non-objects.
///
/// A missing amount defaults to zero and an unrecognized status to
/// `Pending`; the feeds are tolerated, not trusted.
#[must_use]
pub fn normalize_row(value: &Value) -> Option<DemandRow> {
    let object = value.as_object()?;

    let field = |keys: &[&str]| -> Option<String> {
        keys.iter().find_map(|key| {
            object
                .get(*key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        })
    };

    Some(DemandRow {
        financial_year: field(FINANCIAL_YEAR_KEYS),
        plan_type: field(PLAN_TYPE_KEYS).and_then(|p| PlanType::parse(&p)),
        district: field(DISTRICT_KEYS),
        taluka: field(TALUKA_KEYS),
        member: field(MEMBER_KEYS),
        scheme: field(SCHEME_KEYS),
        work: field(WORK_KEYS),
        demand_code: field(DEMAND_CODE_KEYS),
        work_id: field(WORK_ID_KEYS).and_then(|id| id.parse().ok()),
        amount: amount_of(object),
        status: status_of(field(STATUS_KEYS)),
    })
}

fn amount_of(object: &serde_json::Map<String, Value>) -> Decimal {
    AMOUNT_KEYS
        .iter()
        .find_map(|key| match object.get(*key) {
            Some(Value::Number(n)) => n.to_string().parse().ok(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
        .unwrap_or(Decimal::ZERO)
}

fn status_of(raw: Option<String>) -> RowStatus {
    match raw.as_deref().map(str::to_lowercase).as_deref() {
        Some("approved" | "sanctioned") => RowStatus::Approved,
        Some("disbursed" | "completed" | "paid") => RowStatus::Disbursed,
        _ => RowStatus::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_field_aliases_resolve() {
        let row = normalize_row(&json!({
            "fyear": "2025-2026",
            "districtName": "Pune",
            "cost": "1500.50",
            "workStatus": "Approved"
        }))
        .unwrap();
        assert_eq!(row.financial_year.as_deref(), Some("2025-2026"));
        assert_eq!(row.district.as_deref(), Some("Pune"));
        assert_eq!(row.amount, dec!(1500.50));
        assert_eq!(row.status, RowStatus::Approved);
    }

    #[test]
    fn test_first_alias_wins() {
        let row = normalize_row(&json!({
            "financialYear": "2025-2026",
            "fy": "2024-2025",
            "amount": 100
        }))
        .unwrap();
        assert_eq!(row.financial_year.as_deref(), Some("2025-2026"));
    }

    #[test]
    fn test_missing_amount_defaults_to_zero() {
        let row = normalize_row(&json!({"district": "Nashik"})).unwrap();
        assert_eq!(row.amount, Decimal::ZERO);
    }

    #[test]
    fn test_unknown_status_is_pending() {
        let row = normalize_row(&json!({"status": "in progress", "amount": 10})).unwrap();
        assert_eq!(row.status, RowStatus::Pending);
        let row = normalize_row(&json!({"amount": 10})).unwrap();
        assert_eq!(row.status, RowStatus::Pending);
    }

    #[test]
    fn test_plan_type_spellings() {
        let row = normalize_row(&json!({"planType": "District Annual Plan", "amount": 1})).unwrap();
        assert_eq!(row.plan_type, Some(PlanType::Dap));
        let row = normalize_row(&json!({"plan": "mla", "amount": 1})).unwrap();
        assert_eq!(row.plan_type, Some(PlanType::Mla));
    }

    #[test]
    fn test_blank_strings_are_absent() {
        let row = normalize_row(&json!({"district": "  ", "amount": 5})).unwrap();
        assert_eq!(row.district, None);
    }

    #[test]
    fn test_non_objects_skipped() {
        let rows = normalize_rows(&[
            json!({"district": "Pune", "amount": 1}),
            json!("not a row"),
            json!(42),
        ]);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_numeric_amount_forms() {
        let row = normalize_row(&json!({"amount": 250})).unwrap();
        assert_eq!(row.amount, dec!(250));
        let row = normalize_row(&json!({"estimatedCost": "2500"})).unwrap();
        assert_eq!(row.amount, dec!(2500));
    }
}
