//! Transfer request and outcome types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::AllocationId;

/// One user-initiated re-appropriation. Ephemeral: built for a single
/// submission and never persisted across navigations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Source allocations, in the user's selection order. The order is
    /// semantic: sources are exhausted first-fit in exactly this order.
    pub source_ids: Vec<AllocationId>,
    /// The one destination allocation.
    pub destination_id: AllocationId,
    /// Amount to draw from the sources, in rupees.
    pub debit_amount: Decimal,
    /// Amount credited to the destination, in rupees.
    pub credit_amount: Decimal,
}

/// How much one source contributed to a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDraw {
    /// The source allocation.
    pub id: AllocationId,
    /// Amount drawn from it, in rupees.
    pub amount: Decimal,
}

/// Result of a successful transfer. This is the shape the host serializes
/// when submitting the re-appropriation for backend approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutcome {
    /// Total amount moved, in rupees.
    pub transferred: Decimal,
    /// Per-source draws, in consumption order. Sources whose balance was
    /// already exhausted contribute no entry.
    pub draws: Vec<SourceDraw>,
}
