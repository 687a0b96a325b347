//! Transfer validation and execution.

use rust_decimal::Decimal;

use crate::allocation::AllocationStore;

use super::error::TransferError;
use super::types::{SourceDraw, TransferOutcome, TransferRequest};

/// Re-appropriation engine.
///
/// Pure business logic: validates a request against the store's current
/// state, then applies it in place. Check-then-act is all-or-nothing; no
/// record is touched unless every precondition holds.
pub struct ReappropriationEngine;

impl ReappropriationEngine {
    /// Validates and applies a re-appropriation.
    ///
    /// Sources are consumed greedy, first-fit, in exactly the request's
    /// selection order: each source is exhausted before the next is
    /// touched. The credit releases previously recorded utilization on
    /// the destination, which returns headroom to that scheme rather
    /// than recording a new expenditure against it.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition as a `TransferError`; the
    /// store is unchanged on any error.
    pub fn transfer(
        store: &mut AllocationStore,
        request: &TransferRequest,
    ) -> Result<TransferOutcome, TransferError> {
        let (source_positions, destination_position) = Self::validate(store, request)?;

        let records = store.records_mut();
        let mut remaining = request.debit_amount;
        let mut draws = Vec::with_capacity(source_positions.len());
        for position in source_positions {
            if remaining.is_zero() {
                break;
            }
            let source = &mut records[position];
            let draw = source.balance().min(remaining);
            if draw.is_zero() {
                continue;
            }
            source.utilized += draw;
            remaining -= draw;
            draws.push(SourceDraw {
                id: source.id.clone(),
                amount: draw,
            });
        }
        debug_assert!(remaining.is_zero(), "validated debit must be fully drawn");

        let destination = &mut records[destination_position];
        destination.utilized -= request.credit_amount;

        debug_assert!(records.iter().all(|record| {
            record.utilized >= Decimal::ZERO && record.utilized <= record.limit
        }));

        tracing::debug!(
            destination = %request.destination_id,
            amount = %request.credit_amount,
            sources = request.source_ids.len(),
            "re-appropriation applied"
        );

        Ok(TransferOutcome {
            transferred: request.credit_amount,
            draws,
        })
    }

    /// Checks every precondition against an immutable view of the store.
    /// Returns the resolved source and destination positions.
    fn validate(
        store: &AllocationStore,
        request: &TransferRequest,
    ) -> Result<(Vec<usize>, usize), TransferError> {
        if request.debit_amount <= Decimal::ZERO || request.credit_amount <= Decimal::ZERO {
            return Err(TransferError::AmountNotPositive);
        }
        if request.debit_amount != request.credit_amount {
            return Err(TransferError::UnequalAmounts {
                debit: request.debit_amount,
                credit: request.credit_amount,
            });
        }
        if request.source_ids.is_empty() {
            return Err(TransferError::NoSources);
        }

        let mut source_positions = Vec::with_capacity(request.source_ids.len());
        for id in &request.source_ids {
            if id == &request.destination_id {
                return Err(TransferError::DestinationAmongSources(id.clone()));
            }
            let position = store
                .position(id)
                .ok_or_else(|| TransferError::UnknownRecord(id.clone()))?;
            if source_positions.contains(&position) {
                return Err(TransferError::DuplicateSource(id.clone()));
            }
            source_positions.push(position);
        }
        let destination_position = store
            .position(&request.destination_id)
            .ok_or_else(|| TransferError::UnknownRecord(request.destination_id.clone()))?;

        let records = store.records();
        let available: Decimal = source_positions
            .iter()
            .map(|&position| records[position].balance())
            .sum();
        if request.debit_amount > available {
            return Err(TransferError::InsufficientSourceBalance {
                requested: request.debit_amount,
                available,
            });
        }

        let destination = &records[destination_position];
        if request.credit_amount > destination.balance() {
            return Err(TransferError::ExceedsDestinationCapacity {
                requested: request.credit_amount,
                available: destination.balance(),
            });
        }
        if request.credit_amount > destination.utilized {
            return Err(TransferError::CreditExceedsUtilized {
                requested: request.credit_amount,
                utilized: destination.utilized,
            });
        }

        Ok((source_positions, destination_position))
    }
}
