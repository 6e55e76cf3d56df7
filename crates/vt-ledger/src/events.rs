//! # Observable Event Log
//!
//! Every mutating operation appends its events to the ledger state in
//! admission order; an external indexer drains them through
//! [`crate::state::LedgerState::take_events`]. No payload ever carries a
//! confidential value; handles stay inside the state.
//!
//! `TraceRecordAdded` and `QualityCheckPerformed` are distinct events even
//! when one `add_trace_record` call produces both; consumers must not treat
//! one as implying the other.

use serde::{Deserialize, Serialize};
use shared_types::{BatchId, Identity, ProductId};

/// A new batch was created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCreatedPayload {
    /// Id of the new batch.
    pub batch_id: BatchId,
    /// Manufacturer that created and owns it.
    pub owner: Identity,
}

/// A product was registered into a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRegisteredPayload {
    /// Id of the new product.
    pub product_id: ProductId,
    /// Manufacturer that registered it.
    pub manufacturer: Identity,
    /// Batch the product belongs to.
    pub batch_id: BatchId,
}

/// A trace record was appended to a product's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecordAddedPayload {
    /// Product the record belongs to.
    pub product_id: ProductId,
    /// Tracker that appended it.
    pub recorder: Identity,
    /// Plaintext event label, e.g. "shipped".
    pub event_type: String,
}

/// A trace record reported a passed quality check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCheckPerformedPayload {
    /// Product the check was recorded against.
    pub product_id: ProductId,
    /// Tracker that performed the check.
    pub checker: Identity,
}

/// A batch was sealed against further registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSealedPayload {
    /// Id of the sealed batch.
    pub batch_id: BatchId,
}

/// All events the ledger emits, in the order operations were admitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// See [`BatchCreatedPayload`].
    BatchCreated(BatchCreatedPayload),
    /// See [`ProductRegisteredPayload`].
    ProductRegistered(ProductRegisteredPayload),
    /// See [`TraceRecordAddedPayload`].
    TraceRecordAdded(TraceRecordAddedPayload),
    /// See [`QualityCheckPerformedPayload`].
    QualityCheckPerformed(QualityCheckPerformedPayload),
    /// See [`BatchSealedPayload`].
    BatchSealed(BatchSealedPayload),
}
