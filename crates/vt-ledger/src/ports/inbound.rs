//! # Driving Port (Inbound)
//!
//! The full operation contract of the ledger. Callers arrive with an
//! already-authenticated [`Identity`]; verifying it is the transport's job.
//! Query operations require no authentication and never include confidential
//! fields in their results.

use crate::domain::batch::BatchInfo;
use crate::domain::decryption::{RevealRequestId, RevealedProductFields};
use crate::domain::product::ProductInfo;
use crate::domain::trace::PublicTraceInfo;
use crate::errors::LedgerError;
use crate::ports::outbound::RevealTicket;
use async_trait::async_trait;
use shared_types::{BatchId, Identity, PlainWord, ProductId};

/// Primary API of the supply-chain ledger.
///
/// Every mutating operation checks its preconditions in full before any
/// state change; a returned error means the ledger did not move.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    // === Role administration (owner-only) ===

    /// Grant the manufacturer role. Fails with `Unauthorized` unless `by`
    /// is the owner.
    async fn grant_manufacturer(&self, by: Identity, target: Identity)
        -> Result<(), LedgerError>;

    /// Revoke the manufacturer role; effective for all subsequent checks.
    async fn revoke_manufacturer(
        &self,
        by: Identity,
        target: Identity,
    ) -> Result<(), LedgerError>;

    /// Grant the tracker role.
    async fn grant_tracker(&self, by: Identity, target: Identity) -> Result<(), LedgerError>;

    /// Revoke the tracker role.
    async fn revoke_tracker(&self, by: Identity, target: Identity) -> Result<(), LedgerError>;

    /// True if `id` is the ledger owner.
    async fn is_owner(&self, id: Identity) -> bool;

    /// True if `id` holds the manufacturer role (the owner always does).
    async fn is_manufacturer(&self, id: Identity) -> bool;

    /// True if `id` holds the tracker role (the owner always does).
    async fn is_tracker(&self, id: Identity) -> bool;

    // === Batches ===

    /// Create a batch owned by `caller`, encrypting `supplier_count`,
    /// `quantity`, and the creation time. Returns the new sequential id.
    async fn create_batch(
        &self,
        caller: Identity,
        supplier_count: PlainWord,
        quantity: PlainWord,
    ) -> Result<BatchId, LedgerError>;

    /// Irreversibly seal a batch against further product registration.
    async fn seal_batch(&self, caller: Identity, batch_id: BatchId) -> Result<(), LedgerError>;

    /// Public read of a batch's seal state, owner, and product count.
    async fn get_batch_info(&self, batch_id: BatchId) -> Result<BatchInfo, LedgerError>;

    /// Total number of batches ever created.
    async fn batch_count(&self) -> u64;

    // === Products ===

    /// Register a product into `batch_id`, encrypting the manufacturer id,
    /// production time, quality score, and cost. Returns the new id.
    ///
    /// Preconditions are checked in order, first failure wins: caller holds
    /// the manufacturer role, the batch id was issued, the batch is not
    /// sealed, the caller owns the batch, the quality score is in 0..=100.
    async fn register_product(
        &self,
        caller: Identity,
        manufacturer_id: PlainWord,
        quality_score: PlainWord,
        cost: PlainWord,
        batch_id: BatchId,
        category: String,
    ) -> Result<ProductId, LedgerError>;

    /// Public read of a product's plaintext attributes.
    async fn get_product_info(&self, product_id: ProductId) -> Result<ProductInfo, LedgerError>;

    /// Weak authenticity check: true iff the product was registered by a
    /// non-zero identity. Not a cryptographic signature check.
    async fn verify_authenticity(&self, product_id: ProductId) -> Result<bool, LedgerError>;

    /// Total number of products ever registered.
    async fn product_count(&self) -> u64;

    // === Trace history ===

    /// Append a trace record to a product's history, encrypting the
    /// location, time, handler, and quality-check flag.
    async fn add_trace_record(
        &self,
        caller: Identity,
        product_id: ProductId,
        location_id: PlainWord,
        handler_id: PlainWord,
        quality_check_passed: bool,
        event_type: String,
    ) -> Result<(), LedgerError>;

    /// Number of trace records appended to `product_id`.
    async fn get_trace_record_count(&self, product_id: ProductId) -> Result<u64, LedgerError>;

    /// Public read of the `index`-th trace record's recorder and label.
    async fn get_public_trace_info(
        &self,
        product_id: ProductId,
        index: u64,
    ) -> Result<PublicTraceInfo, LedgerError>;

    // === Decryption protocol ===

    /// Submit a batched reveal request for a product's four confidential
    /// fields. Allowed for the product's manufacturer, the owner, or any
    /// tracker. Returns the store's correlation id; plaintexts arrive later
    /// through [`LedgerApi::process_decryption`].
    async fn request_decryption(
        &self,
        caller: Identity,
        product_id: ProductId,
    ) -> Result<RevealRequestId, LedgerError>;

    /// Apply a reveal completion delivered by the store.
    ///
    /// Invoked by the store integration, not by ordinary callers. The
    /// ticket's proof is validated against the store's attestation before
    /// anything is trusted; a replayed or stale ticket is ignored.
    async fn process_decryption(&self, ticket: RevealTicket) -> Result<(), LedgerError>;

    /// Read the outcome of a completed reveal. Only the identity that
    /// issued the request may read it; `None` while still pending or for
    /// an unknown id.
    async fn decryption_result(
        &self,
        caller: Identity,
        request_id: RevealRequestId,
    ) -> Result<Option<RevealedProductFields>, LedgerError>;
}
