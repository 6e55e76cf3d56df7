//! # Ledger State
//!
//! All mutable ledger state in one owned structure. The service applies each
//! admitted operation against it atomically; holding the state as a plain
//! value (rather than ambient globals) keeps multiple independent ledgers
//! possible in one process.

use crate::domain::batch::Batch;
use crate::domain::confidential::GrantLedger;
use crate::domain::decryption::DecryptionQueue;
use crate::domain::product::Product;
use crate::domain::registry::AuthorizationRegistry;
use crate::errors::LedgerError;
use crate::events::LedgerEvent;
use shared_types::{BatchId, Identity, ProductId};

/// The complete mutable state of one ledger instance.
#[derive(Clone, Debug)]
pub struct LedgerState {
    /// Owner and role membership.
    pub registry: AuthorizationRegistry,
    /// All batches, position `i` holding id `i + 1`. Never shrinks.
    pub batches: Vec<Batch>,
    /// All products, position `i` holding id `i + 1`. Never shrinks.
    pub products: Vec<Product>,
    /// Who may ever decrypt each handle.
    pub grants: GrantLedger,
    /// Reveal requests, pending and completed.
    pub decryption: DecryptionQueue,
    /// Events awaiting an external indexer, in admission order.
    pending_events: Vec<LedgerEvent>,
}

impl LedgerState {
    /// Fresh state with the given fixed owner and nothing else.
    #[must_use]
    pub fn new(owner: Identity) -> Self {
        Self {
            registry: AuthorizationRegistry::new(owner),
            batches: Vec::new(),
            products: Vec::new(),
            grants: GrantLedger::new(),
            decryption: DecryptionQueue::new(),
            pending_events: Vec::new(),
        }
    }

    // === Batches ===

    /// Next batch id that `push_batch` will issue.
    #[must_use]
    pub fn next_batch_id(&self) -> BatchId {
        self.batches.len() as BatchId + 1
    }

    /// Append a batch built by the caller with [`LedgerState::next_batch_id`].
    pub fn push_batch(&mut self, batch: Batch) {
        debug_assert_eq!(batch.id, self.next_batch_id());
        self.batches.push(batch);
    }

    /// Look up a batch, range-checking the id.
    pub fn batch(&self, id: BatchId) -> Result<&Batch, LedgerError> {
        self.batches
            .get(checked_index(id)?)
            .ok_or(LedgerError::InvalidBatch(id))
    }

    /// Mutable batch lookup.
    pub fn batch_mut(&mut self, id: BatchId) -> Result<&mut Batch, LedgerError> {
        let index = checked_index(id)?;
        self.batches
            .get_mut(index)
            .ok_or(LedgerError::InvalidBatch(id))
    }

    // === Products ===

    /// Next product id that `push_product` will issue.
    #[must_use]
    pub fn next_product_id(&self) -> ProductId {
        self.products.len() as ProductId + 1
    }

    /// Append a product built by the caller with [`LedgerState::next_product_id`].
    pub fn push_product(&mut self, product: Product) {
        debug_assert_eq!(product.id, self.next_product_id());
        self.products.push(product);
    }

    /// Look up a product; a never-issued id is `ProductNotFound`.
    pub fn product(&self, id: ProductId) -> Result<&Product, LedgerError> {
        let index = id
            .checked_sub(1)
            .ok_or(LedgerError::ProductNotFound(id))? as usize;
        self.products
            .get(index)
            .ok_or(LedgerError::ProductNotFound(id))
    }

    /// Mutable product lookup.
    pub fn product_mut(&mut self, id: ProductId) -> Result<&mut Product, LedgerError> {
        let index = id
            .checked_sub(1)
            .ok_or(LedgerError::ProductNotFound(id))? as usize;
        self.products
            .get_mut(index)
            .ok_or(LedgerError::ProductNotFound(id))
    }

    // === Events ===

    /// Queue an event for the external indexer.
    pub fn record_event(&mut self, event: LedgerEvent) {
        self.pending_events.push(event);
    }

    /// Drain all queued events, preserving admission order.
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Number of queued, undrained events.
    #[must_use]
    pub fn pending_event_count(&self) -> usize {
        self.pending_events.len()
    }
}

/// Translate a 1-based batch id into a vec index, rejecting id 0.
fn checked_index(id: BatchId) -> Result<usize, LedgerError> {
    id.checked_sub(1)
        .map(|i| i as usize)
        .ok_or(LedgerError::InvalidBatch(id))
}

// =============================================================================
// TESTS
// =============================================================================
