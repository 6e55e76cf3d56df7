//! # Batch Entity
//!
//! A unit of production grouping. Sealing is a one-way transition: a sealed
//! batch accepts no further product registrations, ever.

use crate::domain::confidential::CipherHandle;
use crate::errors::LedgerError;
use serde::{Deserialize, Serialize};
use shared_types::{BatchId, Identity, ProductId};

/// Encrypted attributes of a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSecrets {
    /// Number of upstream suppliers involved.
    pub supplier_count: CipherHandle,
    /// Creation timestamp.
    pub created_at: CipherHandle,
    /// Units produced in this batch.
    pub quantity: CipherHandle,
}

/// A production batch.
///
/// The id, owner, and secrets are immutable after creation; the only
/// mutations are appending product ids and the false→true seal transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Batch {
    /// Sequential id, first issued id is 1.
    pub id: BatchId,
    /// Manufacturer that created the batch.
    pub owner: Identity,
    /// One-way seal flag.
    pub sealed: bool,
    /// Encrypted attributes.
    pub secrets: BatchSecrets,
    /// Ordered, append-only ids of products registered under this batch.
    pub product_ids: Vec<ProductId>,
}

impl Batch {
    /// Create a new unsealed batch with no products.
    #[must_use]
    pub fn new(id: BatchId, owner: Identity, secrets: BatchSecrets) -> Self {
        Self {
            id,
            owner,
            sealed: false,
            secrets,
            product_ids: Vec::new(),
        }
    }

    /// Seal the batch. Fails if it is already sealed.
    pub fn seal(&mut self) -> Result<(), LedgerError> {
        if self.sealed {
            return Err(LedgerError::AlreadySealed(self.id));
        }
        self.sealed = true;
        Ok(())
    }

    /// Append a newly registered product id.
    ///
    /// Fails on a sealed batch; callers are expected to have checked the
    /// seal flag already, this is the backstop.
    pub fn record_product(&mut self, product_id: ProductId) -> Result<(), LedgerError> {
        if self.sealed {
            return Err(LedgerError::BatchSealed(self.id));
        }
        self.product_ids.push(product_id);
        Ok(())
    }

    /// Number of products registered under this batch.
    #[must_use]
    pub fn product_count(&self) -> u64 {
        self.product_ids.len() as u64
    }

    /// The public view of this batch.
    #[must_use]
    pub fn info(&self) -> BatchInfo {
        BatchInfo {
            sealed: self.sealed,
            owner: self.owner,
            product_count: self.product_count(),
        }
    }
}

/// Public, unauthenticated view of a batch. Never contains handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchInfo {
    /// Whether the batch is sealed.
    pub sealed: bool,
    /// Owning manufacturer.
    pub owner: Identity,
    /// Number of registered products.
    pub product_count: u64,
}

// =============================================================================
// TESTS
// =============================================================================
