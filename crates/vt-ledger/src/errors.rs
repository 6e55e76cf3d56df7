//! # Error Types
//!
//! All error kinds reported by the ledger. Every precondition violation is
//! reported before any state mutation, so a caller observing an error can
//! assume the ledger is exactly as it was.

use shared_types::{BatchId, PlainWord, ProductId};
use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// LEDGER ERRORS
// =============================================================================

/// Errors reported by ledger operations.
///
/// Kinds are deliberately specific so UI layers can distinguish "you are not
/// authorized" from "that id does not exist" from "that batch is closed".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Caller lacks the role or ownership the operation requires.
    #[error("caller is not authorized for this operation")]
    Unauthorized,

    /// Referenced batch id was never issued.
    #[error("batch id {0} has not been issued")]
    InvalidBatch(BatchId),

    /// Referenced product id was never issued.
    #[error("product id {0} does not exist")]
    ProductNotFound(ProductId),

    /// Mutation attempted on a sealed batch.
    #[error("batch {0} is sealed against further registration")]
    BatchSealed(BatchId),

    /// Caller does not own the referenced batch.
    #[error("caller does not own batch {0}")]
    NotBatchOwner(BatchId),

    /// Seal attempted on an already-sealed batch.
    #[error("batch {0} is already sealed")]
    AlreadySealed(BatchId),

    /// Quality score outside the accepted range.
    #[error("quality score {0} is outside 0..=100")]
    InvalidQualityScore(PlainWord),

    /// Trace-history index past the end of the product's history.
    #[error("trace index {index} out of range for product {product_id}: count is {count}")]
    IndexOutOfRange {
        /// Product whose history was queried.
        product_id: ProductId,
        /// Requested 0-based index.
        index: u64,
        /// Number of records currently in the history.
        count: u64,
    },

    /// A reveal completion arrived with a proof the store refused to attest.
    #[error("reveal proof rejected for request {0}")]
    DecryptionProofInvalid(Uuid),

    /// The external confidential store failed.
    #[error("confidential store failure: {0}")]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// True if this error is an authorization failure rather than a
    /// validation or infrastructure failure.
    #[must_use]
    pub fn is_authorization_failure(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::NotBatchOwner(_)
        )
    }

    /// True if this error names a missing or never-issued entity.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::InvalidBatch(_) | Self::ProductNotFound(_))
    }
}

// =============================================================================
// STORE ERRORS
// =============================================================================

/// Errors surfaced by the external confidential value store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("confidential store unavailable")]
    Unavailable,

    /// The store refused the operation.
    #[error("confidential store rejected the operation: {0}")]
    Rejected(String),

    /// A handle was presented that the store never issued.
    #[error("unknown cipher handle")]
    UnknownHandle,
}

// =============================================================================
// TESTS
// =============================================================================
