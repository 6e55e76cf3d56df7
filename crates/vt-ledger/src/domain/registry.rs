//! # Authorization Registry
//!
//! Owner plus two independent role sets. The owner is fixed at ledger
//! creation and is implicitly a member of both roles; membership changes are
//! owner-only. There is no self-service registration path.
//!
//! Revoking a role takes effect for every subsequent check. Entities the
//! identity already created stay valid and queryable, and decrypt grants it
//! already holds are untouched.

use crate::errors::LedgerError;
use serde::{Deserialize, Serialize};
use shared_types::Identity;
use std::collections::HashSet;

/// Owner identity and role membership.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthorizationRegistry {
    owner: Identity,
    manufacturers: HashSet<Identity>,
    trackers: HashSet<Identity>,
}

impl AuthorizationRegistry {
    /// Create a registry with the given fixed owner and empty role sets.
    #[must_use]
    pub fn new(owner: Identity) -> Self {
        Self {
            owner,
            manufacturers: HashSet::new(),
            trackers: HashSet::new(),
        }
    }

    /// The fixed owner identity.
    #[must_use]
    pub fn owner(&self) -> Identity {
        self.owner
    }

    /// True if `id` is the owner.
    #[must_use]
    pub fn is_owner(&self, id: Identity) -> bool {
        id == self.owner
    }

    /// True if `id` was granted the manufacturer role, or is the owner.
    #[must_use]
    pub fn is_manufacturer(&self, id: Identity) -> bool {
        self.is_owner(id) || self.manufacturers.contains(&id)
    }

    /// True if `id` was granted the tracker role, or is the owner.
    #[must_use]
    pub fn is_tracker(&self, id: Identity) -> bool {
        self.is_owner(id) || self.trackers.contains(&id)
    }

    /// Grant the manufacturer role to `target`. Owner-only; idempotent.
    pub fn grant_manufacturer(
        &mut self,
        by: Identity,
        target: Identity,
    ) -> Result<(), LedgerError> {
        self.require_owner(by)?;
        self.manufacturers.insert(target);
        Ok(())
    }

    /// Revoke the manufacturer role from `target`. Owner-only.
    ///
    /// Revoking an identity that never held the role is a no-op, not an
    /// error.
    pub fn revoke_manufacturer(
        &mut self,
        by: Identity,
        target: Identity,
    ) -> Result<(), LedgerError> {
        self.require_owner(by)?;
        self.manufacturers.remove(&target);
        Ok(())
    }

    /// Grant the tracker role to `target`. Owner-only; idempotent.
    pub fn grant_tracker(&mut self, by: Identity, target: Identity) -> Result<(), LedgerError> {
        self.require_owner(by)?;
        self.trackers.insert(target);
        Ok(())
    }

    /// Revoke the tracker role from `target`. Owner-only.
    pub fn revoke_tracker(&mut self, by: Identity, target: Identity) -> Result<(), LedgerError> {
        self.require_owner(by)?;
        self.trackers.remove(&target);
        Ok(())
    }

    fn require_owner(&self, by: Identity) -> Result<(), LedgerError> {
        if self.is_owner(by) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
