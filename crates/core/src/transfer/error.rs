//! Transfer error types.

use rust_decimal::Decimal;
use thiserror::Error;

use nidhi_shared::error::AppError;

use crate::allocation::AllocationId;

/// Errors rejecting a re-appropriation request. All are local and
/// recoverable: the user corrects the inputs and retries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    /// One or both amounts are missing or not positive.
    #[error("Both debit and credit amounts must be entered")]
    AmountNotPositive,

    /// The engine only supports amount-conserving transfers.
    #[error("Debit and credit amounts must be equal. Debit: {debit}, Credit: {credit}")]
    UnequalAmounts {
        /// Requested debit amount.
        debit: Decimal,
        /// Requested credit amount.
        credit: Decimal,
    },

    /// No source schemes were selected.
    #[error("No source schemes selected")]
    NoSources,

    /// A source or destination id does not resolve in the active scope.
    #[error("Unknown allocation record: {0}")]
    UnknownRecord(AllocationId),

    /// The same source was selected more than once.
    #[error("Scheme {0} is selected more than once")]
    DuplicateSource(AllocationId),

    /// The destination cannot also be drawn from.
    #[error("Destination scheme {0} cannot also be a source")]
    DestinationAmongSources(AllocationId),

    /// The debit exceeds what the selected sources can cover together.
    #[error("Debit exceeds total selected scheme balance. Requested: {requested}, Available: {available}")]
    InsufficientSourceBalance {
        /// Requested debit amount.
        requested: Decimal,
        /// Combined balance of the selected sources.
        available: Decimal,
    },

    /// The credit exceeds the destination's remaining capacity.
    #[error("Credit exceeds destination scheme capacity. Requested: {requested}, Available: {available}")]
    ExceedsDestinationCapacity {
        /// Requested credit amount.
        requested: Decimal,
        /// The destination's balance.
        available: Decimal,
    },

    /// The credit exceeds what the destination has actually utilized, so
    /// there is nothing to release.
    #[error("Credit exceeds the destination's utilized amount. Requested: {requested}, Utilized: {utilized}")]
    CreditExceedsUtilized {
        /// Requested credit amount.
        requested: Decimal,
        /// The destination's recorded utilization.
        utilized: Decimal,
    },
}

impl TransferError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AmountNotPositive => "AMOUNT_NOT_POSITIVE",
            Self::UnequalAmounts { .. } => "UNEQUAL_AMOUNTS",
            Self::NoSources => "NO_SOURCES",
            Self::UnknownRecord(_) => "UNKNOWN_RECORD",
            Self::DuplicateSource(_) => "DUPLICATE_SOURCE",
            Self::DestinationAmongSources(_) => "DESTINATION_AMONG_SOURCES",
            Self::InsufficientSourceBalance { .. } => "INSUFFICIENT_SOURCE_BALANCE",
            Self::ExceedsDestinationCapacity { .. } => "EXCEEDS_DESTINATION_CAPACITY",
            Self::CreditExceedsUtilized { .. } => "CREDIT_EXCEEDS_UTILIZED",
        }
    }
}

impl From<TransferError> for AppError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::UnknownRecord(_) => Self::NotFound(err.to_string()),
            TransferError::AmountNotPositive
            | TransferError::UnequalAmounts { .. }
            | TransferError::NoSources
            | TransferError::DuplicateSource(_)
            | TransferError::DestinationAmongSources(_) => Self::Validation(err.to_string()),
            TransferError::InsufficientSourceBalance { .. }
            | TransferError::ExceedsDestinationCapacity { .. }
            | TransferError::CreditExceedsUtilized { .. } => Self::BusinessRule(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            TransferError::AmountNotPositive.error_code(),
            "AMOUNT_NOT_POSITIVE"
        );
        assert_eq!(
            TransferError::UnequalAmounts {
                debit: dec!(200),
                credit: dec!(150),
            }
            .error_code(),
            "UNEQUAL_AMOUNTS"
        );
    }

    #[test]
    fn test_error_display() {
        let err = TransferError::InsufficientSourceBalance {
            requested: dec!(600),
            available: dec!(500),
        };
        assert_eq!(
            err.to_string(),
            "Debit exceeds total selected scheme balance. Requested: 600, Available: 500"
        );
    }

    #[test]
    fn test_app_error_mapping() {
        let app: AppError = TransferError::AmountNotPositive.into();
        assert_eq!(app.error_code(), "VALIDATION_ERROR");

        let app: AppError = TransferError::CreditExceedsUtilized {
            requested: dec!(200),
            utilized: dec!(100),
        }
        .into();
        assert_eq!(app.error_code(), "BUSINESS_RULE_VIOLATION");

        let app: AppError = TransferError::UnknownRecord(
            crate::allocation::AllocationId::new("2059", 0),
        )
        .into();
        assert_eq!(app.error_code(), "NOT_FOUND");
    }
}
