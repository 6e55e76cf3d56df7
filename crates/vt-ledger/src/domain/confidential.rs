//! # Confidential Field Handling
//!
//! Encrypt-on-write plus the permanent record of who may ever decrypt each
//! stored value. The concrete encryption scheme lives behind the
//! [`ConfidentialValueStore`] port; this module only deals in opaque handles
//! and grant sets.
//!
//! Grants are additive only. Role membership is revocable, decrypt
//! capability is not: an identity that loses its role keeps the ability to
//! decrypt every handle it was already granted. That asymmetry is part of
//! the observable security model and is preserved on purpose.

use crate::errors::LedgerError;
use crate::ports::outbound::ConfidentialValueStore;
use serde::{Deserialize, Serialize};
use shared_types::{Identity, PlainWord};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

// =============================================================================
// CIPHER HANDLES
// =============================================================================

/// Opaque reference to one encrypted value held by the confidential store.
///
/// Usable in further encrypted operations but never directly readable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CipherHandle(Uuid);

impl CipherHandle {
    /// Mint a fresh handle. Called by store implementations on encrypt.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The raw uuid behind this handle.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for CipherHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for CipherHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // short form: first uuid group is enough to tell handles apart in logs
        let full = self.0.to_string();
        write!(f, "CipherHandle({}…)", &full[..8])
    }
}

// =============================================================================
// GRANT LEDGER
// =============================================================================

/// Per-handle record of every identity ever granted decrypt capability.
///
/// Additive only: there is no revoke operation, by design.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GrantLedger {
    grants: HashMap<CipherHandle, HashSet<Identity>>,
}

impl GrantLedger {
    /// Create an empty grant ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `identity` may decrypt `handle`. Idempotent.
    pub fn grant(&mut self, handle: CipherHandle, identity: Identity) {
        self.grants.entry(handle).or_default().insert(identity);
    }

    /// True if `identity` was ever granted decrypt capability on `handle`.
    #[must_use]
    pub fn may_decrypt(&self, handle: CipherHandle, identity: Identity) -> bool {
        self.grants
            .get(&handle)
            .is_some_and(|set| set.contains(&identity))
    }

    /// Number of identities granted on `handle`.
    #[must_use]
    pub fn grantee_count(&self, handle: CipherHandle) -> usize {
        self.grants.get(&handle).map_or(0, HashSet::len)
    }
}

// =============================================================================
// FIELD MANAGER
// =============================================================================

/// The write path for confidential attributes.
///
/// Every protected value is encrypted through the store and then granted to
/// the ledger's own processing context *and* to the writing caller, in that
/// order. Omitting the context grant would make the value unusable for any
/// later encrypted computation; omitting the caller grant would make it
/// permanently unrecoverable by the party that supplied it.
pub struct ConfidentialFieldManager<S> {
    store: Arc<S>,
    context: Identity,
}

impl<S: ConfidentialValueStore> ConfidentialFieldManager<S> {
    /// Wrap a store, granting on behalf of the given ledger context identity.
    pub fn new(store: Arc<S>, context: Identity) -> Self {
        Self { store, context }
    }

    /// The ledger's own grant identity.
    #[must_use]
    pub fn context(&self) -> Identity {
        self.context
    }

    /// Encrypt one plaintext word and issue the context + caller grants.
    ///
    /// Store-side effects happen first; the grant ledger is only updated
    /// once every store call has succeeded, so a store failure leaves no
    /// half-granted record behind.
    pub async fn protect(
        &self,
        value: PlainWord,
        caller: Identity,
        grants: &mut GrantLedger,
    ) -> Result<CipherHandle, LedgerError> {
        let handle = self.store.encrypt(value).await?;
        self.store.grant_access(handle, self.context).await?;
        self.store.grant_access(handle, caller).await?;
        grants.grant(handle, self.context);
        grants.grant(handle, caller);
        Ok(handle)
    }
}

// =============================================================================
// TESTS
// =============================================================================
