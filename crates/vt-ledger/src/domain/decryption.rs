//! # Decryption Request Bookkeeping
//!
//! The asynchronous reveal protocol: a request is recorded when submitted to
//! the store and completed when the store's callback delivers plaintexts
//! with a valid proof. The external store's delivery guarantees are not
//! ours, so completing the same request twice is a no-op rather than an
//! error.

use crate::domain::confidential::CipherHandle;
use serde::{Deserialize, Serialize};
use shared_types::{Identity, PlainWord, ProductId, Timestamp};
use std::collections::HashMap;
use uuid::Uuid;

/// Correlation id for one reveal request, issued by the store.
pub type RevealRequestId = Uuid;

/// The four plaintext fields of a product, revealed off-band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedProductFields {
    /// Manufacturer-internal numeric id.
    pub manufacturer_id: PlainWord,
    /// Production timestamp.
    pub produced_at: Timestamp,
    /// Quality score.
    pub quality_score: PlainWord,
    /// Production cost.
    pub cost: PlainWord,
}

/// One reveal request, pending until the store's callback completes it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecryptionRequest {
    /// Store-issued correlation id.
    pub request_id: RevealRequestId,
    /// Product whose fields were requested.
    pub product_id: ProductId,
    /// Identity that issued the request; the only identity allowed to read
    /// the revealed result.
    pub requester: Identity,
    /// Handles submitted to the store, in fixed field order: manufacturer
    /// id, production timestamp, quality score, cost.
    pub handles: Vec<CipherHandle>,
    /// Plaintexts, present once the request completed.
    pub revealed: Option<RevealedProductFields>,
}

impl DecryptionRequest {
    /// True once the store's callback has been processed for this request.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.revealed.is_some()
    }
}

/// Outcome of applying a reveal completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The pending request was completed by this call.
    Applied,
    /// The request had already completed; nothing changed.
    Duplicate,
    /// No request with this id was ever issued here; nothing changed.
    Unknown,
}

/// All reveal requests ever issued by this ledger, keyed by request id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DecryptionQueue {
    requests: HashMap<RevealRequestId, DecryptionRequest>,
}

impl DecryptionQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly submitted request as pending.
    pub fn insert_pending(&mut self, request: DecryptionRequest) {
        self.requests.insert(request.request_id, request);
    }

    /// Look up a request.
    #[must_use]
    pub fn get(&self, request_id: RevealRequestId) -> Option<&DecryptionRequest> {
        self.requests.get(&request_id)
    }

    /// Apply a completion. Duplicate or unknown ids change nothing.
    pub fn complete(
        &mut self,
        request_id: RevealRequestId,
        fields: RevealedProductFields,
    ) -> CompletionOutcome {
        match self.requests.get_mut(&request_id) {
            None => CompletionOutcome::Unknown,
            Some(request) if request.is_completed() => CompletionOutcome::Duplicate,
            Some(request) => {
                request.revealed = Some(fields);
                CompletionOutcome::Applied
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
