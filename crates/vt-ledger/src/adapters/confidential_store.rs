//! # In-Memory Confidential Store
//!
//! Store adapter for tests and single-process deployments. Values are held
//! in plain maps; the point here is the protocol, not the ciphertext:
//! handles are opaque, grants are additive, and reveals are asynchronous
//! (queued until the integration delivers them back as tickets).
//!
//! Reveal proofs are HMAC-SHA256 tags over `(request_id, values)` under a
//! per-store secret, so a ticket that did not come from this store (or was
//! tampered with in flight) fails `verify_reveal`.

use crate::domain::confidential::CipherHandle;
use crate::domain::decryption::RevealRequestId;
use crate::errors::StoreError;
use crate::ports::outbound::{ConfidentialValueStore, RevealProof, RevealTicket};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use shared_types::{Identity, PlainWord};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::RwLock;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// A reveal request accepted but not yet delivered.
#[derive(Clone, Debug)]
struct PendingReveal {
    request_id: RevealRequestId,
    handles: Vec<CipherHandle>,
}

/// In-memory implementation of [`ConfidentialValueStore`].
#[derive(Debug)]
pub struct InMemoryConfidentialStore {
    /// Attestation key for reveal proofs.
    secret: [u8; 32],
    /// Plaintext behind each issued handle.
    values: RwLock<HashMap<CipherHandle, PlainWord>>,
    /// Store-side grant records.
    grants: RwLock<HashMap<CipherHandle, HashSet<Identity>>>,
    /// Accepted reveal requests awaiting delivery.
    pending: RwLock<VecDeque<PendingReveal>>,
}

impl InMemoryConfidentialStore {
    /// Create a store with a random attestation secret.
    #[must_use]
    pub fn new() -> Self {
        Self::with_secret(rand::random())
    }

    /// Create a store with a fixed attestation secret, for deterministic
    /// proof tests.
    #[must_use]
    pub fn with_secret(secret: [u8; 32]) -> Self {
        Self {
            secret,
            values: RwLock::new(HashMap::new()),
            grants: RwLock::new(HashMap::new()),
            pending: RwLock::new(VecDeque::new()),
        }
    }

    /// True if the store recorded a grant for `identity` on `handle`.
    #[must_use]
    pub fn has_access(&self, handle: CipherHandle, identity: Identity) -> bool {
        self.grants
            .read()
            .unwrap()
            .get(&handle)
            .is_some_and(|set| set.contains(&identity))
    }

    /// Number of accepted reveals not yet delivered.
    #[must_use]
    pub fn pending_reveal_count(&self) -> usize {
        self.pending.read().unwrap().len()
    }

    /// Deliver the oldest accepted reveal as a proof-carrying ticket.
    ///
    /// This is the integration's stand-in for the store's asynchronous
    /// callback: pop here, then hand the ticket to the ledger's
    /// completion entry point.
    pub fn complete_next_reveal(&self) -> Option<RevealTicket> {
        let reveal = self.pending.write().unwrap().pop_front()?;
        let values = {
            let table = self.values.read().unwrap();
            reveal
                .handles
                .iter()
                .map(|handle| {
                    *table
                        .get(handle)
                        .expect("reveal was accepted only for issued handles")
                })
                .collect::<Vec<_>>()
        };
        let proof = self.attest(reveal.request_id, &values);
        Some(RevealTicket {
            request_id: reveal.request_id,
            values,
            proof,
        })
    }

    fn attest(&self, request_id: RevealRequestId, values: &[PlainWord]) -> RevealProof {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key length");
        mac.update(request_id.as_bytes());
        for value in values {
            mac.update(&value.to_le_bytes());
        }
        RevealProof(mac.finalize().into_bytes().to_vec())
    }
}

impl Default for InMemoryConfidentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfidentialValueStore for InMemoryConfidentialStore {
    async fn encrypt(&self, value: PlainWord) -> Result<CipherHandle, StoreError> {
        let handle = CipherHandle::generate();
        self.values.write().unwrap().insert(handle, value);
        Ok(handle)
    }

    async fn grant_access(
        &self,
        handle: CipherHandle,
        identity: Identity,
    ) -> Result<(), StoreError> {
        if !self.values.read().unwrap().contains_key(&handle) {
            return Err(StoreError::UnknownHandle);
        }
        self.grants
            .write()
            .unwrap()
            .entry(handle)
            .or_default()
            .insert(identity);
        Ok(())
    }

    async fn request_reveal(
        &self,
        handles: &[CipherHandle],
    ) -> Result<RevealRequestId, StoreError> {
        {
            let table = self.values.read().unwrap();
            if handles.iter().any(|h| !table.contains_key(h)) {
                return Err(StoreError::UnknownHandle);
            }
        }
        let request_id = Uuid::new_v4();
        self.pending.write().unwrap().push_back(PendingReveal {
            request_id,
            handles: handles.to_vec(),
        });
        Ok(request_id)
    }

    async fn verify_reveal(
        &self,
        request_id: RevealRequestId,
        values: &[PlainWord],
        proof: &RevealProof,
    ) -> bool {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key length");
        mac.update(request_id.as_bytes());
        for value in values {
            mac.update(&value.to_le_bytes());
        }
        mac.verify_slice(&proof.0).is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================
