//! # Driven Ports (Outbound)
//!
//! Capabilities the ledger depends on but does not implement: the external
//! confidential value store and a time source. Adapters implement these
//! traits; the ledger logic never sees a concrete encryption scheme or
//! clock.

use crate::domain::confidential::CipherHandle;
use crate::domain::decryption::RevealRequestId;
use crate::errors::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{Identity, PlainWord, Timestamp};

// =============================================================================
// CONFIDENTIAL VALUE STORE
// =============================================================================

/// Proof material the store attaches to a reveal completion.
///
/// Opaque to the ledger; only [`ConfidentialValueStore::verify_reveal`] can
/// judge it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealProof(pub Vec<u8>);

/// The callback message a store delivers when a reveal completes.
///
/// Plaintexts arrive in the same order the handles were submitted in the
/// originating request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealTicket {
    /// Correlation id of the originating request.
    pub request_id: RevealRequestId,
    /// Revealed plaintext words, in submission order.
    pub values: Vec<PlainWord>,
    /// Attestation over `(request_id, values)`.
    pub proof: RevealProof,
}

/// The external encrypted-value store.
///
/// The ledger treats this as an opaque capability: encrypt a plaintext into
/// a handle, grant decrypt capability on a handle, and ask for a set of
/// handles to be revealed asynchronously. Ciphertext semantics are entirely
/// the store's concern.
#[async_trait]
pub trait ConfidentialValueStore: Send + Sync {
    /// Encrypt one plaintext word, returning a fresh opaque handle.
    async fn encrypt(&self, value: PlainWord) -> Result<CipherHandle, StoreError>;

    /// Grant `identity` decrypt capability on `handle`. Idempotent and
    /// additive; there is no revoke.
    async fn grant_access(&self, handle: CipherHandle, identity: Identity)
        -> Result<(), StoreError>;

    /// Submit one batched reveal request for the given handles.
    ///
    /// Returns immediately with a correlation id; the plaintexts arrive
    /// later as a [`RevealTicket`] through whatever delivery path the
    /// integration wires up. The store invokes the callback exactly once
    /// per accepted request, but the ledger must tolerate replays.
    async fn request_reveal(&self, handles: &[CipherHandle])
        -> Result<RevealRequestId, StoreError>;

    /// Check a ticket's proof against the store's attestation.
    ///
    /// Mandatory on every completion path: a ticket whose proof fails here
    /// must be rejected without touching ledger state.
    async fn verify_reveal(
        &self,
        request_id: RevealRequestId,
        values: &[PlainWord],
        proof: &RevealProof,
    ) -> bool;
}

// =============================================================================
// TIME SOURCE
// =============================================================================

/// Clock the ledger stamps creation and trace times with.
///
/// Pluggable so tests can pin time.
pub trait TimeSource: Send + Sync {
    /// Current time as Unix seconds.
    fn now(&self) -> Timestamp;
}

// =============================================================================
// TESTS
// =============================================================================
