//! # Trace Records
//!
//! Append-only per-product event history. Records are never removed or
//! reordered; the sequence index is assigned at append time.

use crate::domain::confidential::CipherHandle;
use serde::{Deserialize, Serialize};
use shared_types::{Identity, ProductId, SequenceIndex};

/// Encrypted attributes of a trace record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSecrets {
    /// Location the event occurred at.
    pub location_id: CipherHandle,
    /// Event timestamp.
    pub recorded_at: CipherHandle,
    /// Handler involved in the event.
    pub handler_id: CipherHandle,
    /// Whether a quality check passed (encrypted 0/1).
    pub quality_check_passed: CipherHandle,
}

/// One event in a product's history. Immutable after creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Product the record belongs to.
    pub product_id: ProductId,
    /// 0-based position within the product's history.
    pub sequence_index: SequenceIndex,
    /// Tracker that appended the record.
    pub recorder: Identity,
    /// Plaintext event label, e.g. "shipped" or "inspected".
    pub event_type: String,
    /// Encrypted attributes.
    pub secrets: TraceSecrets,
}

impl TraceRecord {
    /// The public view of this record.
    #[must_use]
    pub fn public_info(&self) -> PublicTraceInfo {
        PublicTraceInfo {
            recorder: self.recorder,
            event_type: self.event_type.clone(),
        }
    }
}

/// Public, unauthenticated view of a trace record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicTraceInfo {
    /// Tracker that appended the record.
    pub recorder: Identity,
    /// Plaintext event label.
    pub event_type: String,
}
