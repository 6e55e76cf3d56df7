//! # Ledger Service
//!
//! The sequential state machine behind every operation. Each mutating call
//! takes the state write lock, checks its preconditions in full, performs
//! store-side encryption, and only then touches ledger state, so a caller
//! that sees an error can assume nothing moved and no operation is ever
//! partially applied.
//!
//! ## Authorization gates
//!
//! | Operation | Gate |
//! |-----------|------|
//! | `grant_*` / `revoke_*` | owner only |
//! | `create_batch` | manufacturer role |
//! | `seal_batch` | batch owner holding the manufacturer role |
//! | `register_product` | manufacturer role + batch ownership |
//! | `add_trace_record` | tracker role |
//! | `request_decryption` | product's manufacturer, owner, or tracker |
//! | queries | none (public reads, no confidential fields) |

use crate::domain::batch::{Batch, BatchInfo, BatchSecrets};
use crate::domain::confidential::ConfidentialFieldManager;
use crate::domain::decryption::{
    CompletionOutcome, DecryptionRequest, RevealRequestId, RevealedProductFields,
};
use crate::domain::product::{Product, ProductInfo, ProductSecrets};
use crate::domain::trace::{PublicTraceInfo, TraceRecord, TraceSecrets};
use crate::errors::LedgerError;
use crate::events::{
    BatchCreatedPayload, BatchSealedPayload, LedgerEvent, ProductRegisteredPayload,
    QualityCheckPerformedPayload, TraceRecordAddedPayload,
};
use crate::ports::inbound::LedgerApi;
use crate::ports::outbound::{ConfidentialValueStore, RevealTicket, TimeSource};
use crate::state::LedgerState;

use async_trait::async_trait;
use shared_types::{BatchId, Identity, PlainWord, ProductId};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

/// Highest accepted quality score.
const MAX_QUALITY_SCORE: PlainWord = 100;

/// Number of confidential fields in one product reveal.
const PRODUCT_REVEAL_FIELDS: usize = 4;

// =============================================================================
// CONFIGURATION & STATS
// =============================================================================

/// Ledger construction parameters.
#[derive(Clone, Copy, Debug)]
pub struct LedgerConfig {
    /// Fixed owner identity with super-authority over both roles.
    pub owner: Identity,
    /// The ledger's own grant identity ("grant self" target), so values
    /// stay usable for later encrypted computation.
    pub context: Identity,
}

impl LedgerConfig {
    /// Build a config from owner and ledger context identities.
    #[must_use]
    pub fn new(owner: Identity, context: Identity) -> Self {
        Self { owner, context }
    }
}

/// Operation counters for one service instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServiceStats {
    /// Batches successfully created.
    pub batches_created: u64,
    /// Batches successfully sealed.
    pub batches_sealed: u64,
    /// Products successfully registered.
    pub products_registered: u64,
    /// Trace records successfully appended.
    pub trace_records_added: u64,
    /// Reveal requests submitted to the store.
    pub decryptions_requested: u64,
    /// Reveal completions applied (duplicates excluded).
    pub decryptions_completed: u64,
    /// Operations that returned an error instead of applying.
    pub rejected_operations: u64,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The supply-chain ledger state machine.
///
/// Generic over the confidential store and time source so tests can pin
/// both. All state sits behind one `tokio` `RwLock`; mutating operations
/// hold the write guard end to end, which is what makes each operation
/// atomic with respect to every other.
pub struct LedgerService<S, T> {
    /// Encrypt-on-write path, granting for the configured context identity.
    fields: ConfidentialFieldManager<S>,
    /// The external store, also used for reveal submission/attestation.
    store: Arc<S>,
    /// Clock for creation and trace timestamps.
    time: Arc<T>,
    /// All ledger state.
    state: RwLock<LedgerState>,
    /// Operation counters.
    stats: RwLock<ServiceStats>,
}

impl<S, T> LedgerService<S, T>
where
    S: ConfidentialValueStore,
    T: TimeSource,
{
    /// Create a ledger with the given owner, store, and clock.
    pub fn new(config: LedgerConfig, store: Arc<S>, time: Arc<T>) -> Self {
        info!(owner = %config.owner, "ledger created");
        Self {
            fields: ConfidentialFieldManager::new(store.clone(), config.context),
            store,
            time,
            state: RwLock::new(LedgerState::new(config.owner)),
            stats: RwLock::new(ServiceStats::default()),
        }
    }

    /// Current operation counters.
    pub async fn stats(&self) -> ServiceStats {
        *self.stats.read().await
    }

    /// Drain the observable event log, in admission order.
    ///
    /// This is the indexer's entry point, not part of the caller API.
    pub async fn take_events(&self) -> Vec<LedgerEvent> {
        self.state.write().await.take_events()
    }

    // === Role administration ===

    /// Grant the manufacturer role to `target`. Owner-only.
    #[instrument(skip(self))]
    pub async fn grant_manufacturer(
        &self,
        by: Identity,
        target: Identity,
    ) -> Result<(), LedgerError> {
        let result = self
            .state
            .write()
            .await
            .registry
            .grant_manufacturer(by, target);
        match &result {
            Ok(()) => info!(%target, "manufacturer role granted"),
            Err(err) => warn!(%by, %err, "manufacturer grant rejected"),
        }
        self.finish(result, |_| {}).await
    }

    /// Revoke the manufacturer role from `target`. Owner-only; effective
    /// for all subsequent checks, with no effect on entities `target`
    /// already created.
    #[instrument(skip(self))]
    pub async fn revoke_manufacturer(
        &self,
        by: Identity,
        target: Identity,
    ) -> Result<(), LedgerError> {
        let result = self
            .state
            .write()
            .await
            .registry
            .revoke_manufacturer(by, target);
        match &result {
            Ok(()) => info!(%target, "manufacturer role revoked"),
            Err(err) => warn!(%by, %err, "manufacturer revoke rejected"),
        }
        self.finish(result, |_| {}).await
    }

    /// Grant the tracker role to `target`. Owner-only.
    #[instrument(skip(self))]
    pub async fn grant_tracker(&self, by: Identity, target: Identity) -> Result<(), LedgerError> {
        let result = self.state.write().await.registry.grant_tracker(by, target);
        match &result {
            Ok(()) => info!(%target, "tracker role granted"),
            Err(err) => warn!(%by, %err, "tracker grant rejected"),
        }
        self.finish(result, |_| {}).await
    }

    /// Revoke the tracker role from `target`. Owner-only.
    #[instrument(skip(self))]
    pub async fn revoke_tracker(&self, by: Identity, target: Identity) -> Result<(), LedgerError> {
        let result = self.state.write().await.registry.revoke_tracker(by, target);
        match &result {
            Ok(()) => info!(%target, "tracker role revoked"),
            Err(err) => warn!(%by, %err, "tracker revoke rejected"),
        }
        self.finish(result, |_| {}).await
    }

    /// True if `id` is the ledger owner.
    pub async fn is_owner(&self, id: Identity) -> bool {
        self.state.read().await.registry.is_owner(id)
    }

    /// True if `id` holds the manufacturer role (the owner always does).
    pub async fn is_manufacturer(&self, id: Identity) -> bool {
        self.state.read().await.registry.is_manufacturer(id)
    }

    /// True if `id` holds the tracker role (the owner always does).
    pub async fn is_tracker(&self, id: Identity) -> bool {
        self.state.read().await.registry.is_tracker(id)
    }

    // === Batches ===

    /// Create a batch owned by `caller`. Encrypts the supplier count,
    /// creation time, and quantity, granting decrypt capability to the
    /// caller; returns the new sequential id.
    #[instrument(skip(self), fields(caller = %caller))]
    pub async fn create_batch(
        &self,
        caller: Identity,
        supplier_count: PlainWord,
        quantity: PlainWord,
    ) -> Result<BatchId, LedgerError> {
        let result = self
            .create_batch_inner(caller, supplier_count, quantity)
            .await;
        self.finish(result, |stats| stats.batches_created += 1).await
    }

    async fn create_batch_inner(
        &self,
        caller: Identity,
        supplier_count: PlainWord,
        quantity: PlainWord,
    ) -> Result<BatchId, LedgerError> {
        let mut state = self.state.write().await;
        if !state.registry.is_manufacturer(caller) {
            warn!(%caller, "create_batch rejected: caller lacks manufacturer role");
            return Err(LedgerError::Unauthorized);
        }

        let created_at = self.time.now();
        let secrets = BatchSecrets {
            supplier_count: self
                .fields
                .protect(supplier_count, caller, &mut state.grants)
                .await?,
            created_at: self
                .fields
                .protect(created_at, caller, &mut state.grants)
                .await?,
            quantity: self
                .fields
                .protect(quantity, caller, &mut state.grants)
                .await?,
        };

        let batch_id = state.next_batch_id();
        state.push_batch(Batch::new(batch_id, caller, secrets));
        state.record_event(LedgerEvent::BatchCreated(BatchCreatedPayload {
            batch_id,
            owner: caller,
        }));
        info!(batch_id, owner = %caller, "batch created");
        Ok(batch_id)
    }

    /// Irreversibly seal a batch against further product registration.
    #[instrument(skip(self), fields(caller = %caller))]
    pub async fn seal_batch(
        &self,
        caller: Identity,
        batch_id: BatchId,
    ) -> Result<(), LedgerError> {
        let result = self.seal_batch_inner(caller, batch_id).await;
        self.finish(result, |stats| stats.batches_sealed += 1).await
    }

    async fn seal_batch_inner(
        &self,
        caller: Identity,
        batch_id: BatchId,
    ) -> Result<(), LedgerError> {
        let mut state = self.state.write().await;
        let owner = state.batch(batch_id)?.owner;
        if owner != caller {
            warn!(%caller, batch_id, "seal rejected: caller does not own batch");
            return Err(LedgerError::NotBatchOwner(batch_id));
        }
        if !state.registry.is_manufacturer(caller) {
            warn!(%caller, batch_id, "seal rejected: caller lost manufacturer role");
            return Err(LedgerError::Unauthorized);
        }
        state.batch_mut(batch_id)?.seal()?;
        state.record_event(LedgerEvent::BatchSealed(BatchSealedPayload { batch_id }));
        info!(batch_id, "batch sealed");
        Ok(())
    }

    /// Public read of a batch's seal state, owner, and product count.
    pub async fn get_batch_info(&self, batch_id: BatchId) -> Result<BatchInfo, LedgerError> {
        Ok(self.state.read().await.batch(batch_id)?.info())
    }

    /// Total number of batches ever created.
    pub async fn batch_count(&self) -> u64 {
        self.state.read().await.batches.len() as u64
    }

    // === Products ===

    /// Register a product into `batch_id`. Preconditions are checked in
    /// order, first failure wins: manufacturer role, issued batch id,
    /// unsealed batch, batch ownership, quality score in range.
    #[instrument(skip(self), fields(caller = %caller))]
    pub async fn register_product(
        &self,
        caller: Identity,
        manufacturer_id: PlainWord,
        quality_score: PlainWord,
        cost: PlainWord,
        batch_id: BatchId,
        category: String,
    ) -> Result<ProductId, LedgerError> {
        let result = self
            .register_product_inner(caller, manufacturer_id, quality_score, cost, batch_id, category)
            .await;
        self.finish(result, |stats| stats.products_registered += 1)
            .await
    }

    async fn register_product_inner(
        &self,
        caller: Identity,
        manufacturer_id: PlainWord,
        quality_score: PlainWord,
        cost: PlainWord,
        batch_id: BatchId,
        category: String,
    ) -> Result<ProductId, LedgerError> {
        let mut state = self.state.write().await;
        if !state.registry.is_manufacturer(caller) {
            warn!(%caller, "register_product rejected: caller lacks manufacturer role");
            return Err(LedgerError::Unauthorized);
        }
        let (sealed, owner) = {
            let batch = state.batch(batch_id)?;
            (batch.sealed, batch.owner)
        };
        if sealed {
            warn!(%caller, batch_id, "register_product rejected: batch is sealed");
            return Err(LedgerError::BatchSealed(batch_id));
        }
        if owner != caller {
            warn!(%caller, batch_id, "register_product rejected: caller does not own batch");
            return Err(LedgerError::NotBatchOwner(batch_id));
        }
        if quality_score > MAX_QUALITY_SCORE {
            return Err(LedgerError::InvalidQualityScore(quality_score));
        }

        let produced_at = self.time.now();
        let secrets = ProductSecrets {
            manufacturer_id: self
                .fields
                .protect(manufacturer_id, caller, &mut state.grants)
                .await?,
            produced_at: self
                .fields
                .protect(produced_at, caller, &mut state.grants)
                .await?,
            quality_score: self
                .fields
                .protect(quality_score, caller, &mut state.grants)
                .await?,
            cost: self.fields.protect(cost, caller, &mut state.grants).await?,
        };

        let product_id = state.next_product_id();
        state.push_product(Product::new(
            product_id,
            caller,
            batch_id,
            category.clone(),
            secrets,
        ));
        state.batch_mut(batch_id)?.record_product(product_id)?;
        state.record_event(LedgerEvent::ProductRegistered(ProductRegisteredPayload {
            product_id,
            manufacturer: caller,
            batch_id,
        }));
        info!(product_id, batch_id, category = %category, "product registered");
        Ok(product_id)
    }

    /// Public read of a product's plaintext attributes.
    pub async fn get_product_info(
        &self,
        product_id: ProductId,
    ) -> Result<ProductInfo, LedgerError> {
        Ok(self.state.read().await.product(product_id)?.info())
    }

    /// Weak authenticity check: true iff the product was registered by a
    /// non-zero identity.
    pub async fn verify_authenticity(&self, product_id: ProductId) -> Result<bool, LedgerError> {
        Ok(self.state.read().await.product(product_id)?.is_authentic())
    }

    /// Total number of products ever registered.
    pub async fn product_count(&self) -> u64 {
        self.state.read().await.products.len() as u64
    }

    // === Trace history ===

    /// Append a trace record to a product's history.
    ///
    /// Emits `TraceRecordAdded`, and additionally `QualityCheckPerformed`
    /// when the quality flag is set: two separately observable events.
    #[instrument(skip(self), fields(caller = %caller))]
    pub async fn add_trace_record(
        &self,
        caller: Identity,
        product_id: ProductId,
        location_id: PlainWord,
        handler_id: PlainWord,
        quality_check_passed: bool,
        event_type: String,
    ) -> Result<(), LedgerError> {
        let result = self
            .add_trace_record_inner(
                caller,
                product_id,
                location_id,
                handler_id,
                quality_check_passed,
                event_type,
            )
            .await;
        self.finish(result, |stats| stats.trace_records_added += 1)
            .await
    }

    async fn add_trace_record_inner(
        &self,
        caller: Identity,
        product_id: ProductId,
        location_id: PlainWord,
        handler_id: PlainWord,
        quality_check_passed: bool,
        event_type: String,
    ) -> Result<(), LedgerError> {
        let mut state = self.state.write().await;
        if !state.registry.is_tracker(caller) {
            warn!(%caller, "add_trace_record rejected: caller lacks tracker role");
            return Err(LedgerError::Unauthorized);
        }
        state.product(product_id)?;

        let recorded_at = self.time.now();
        let secrets = TraceSecrets {
            location_id: self
                .fields
                .protect(location_id, caller, &mut state.grants)
                .await?,
            recorded_at: self
                .fields
                .protect(recorded_at, caller, &mut state.grants)
                .await?,
            handler_id: self
                .fields
                .protect(handler_id, caller, &mut state.grants)
                .await?,
            quality_check_passed: self
                .fields
                .protect(PlainWord::from(quality_check_passed), caller, &mut state.grants)
                .await?,
        };

        let product = state.product_mut(product_id)?;
        let sequence_index = product.trace_record_count();
        product.trace.push(TraceRecord {
            product_id,
            sequence_index,
            recorder: caller,
            event_type: event_type.clone(),
            secrets,
        });
        state.record_event(LedgerEvent::TraceRecordAdded(TraceRecordAddedPayload {
            product_id,
            recorder: caller,
            event_type: event_type.clone(),
        }));
        if quality_check_passed {
            state.record_event(LedgerEvent::QualityCheckPerformed(
                QualityCheckPerformedPayload {
                    product_id,
                    checker: caller,
                },
            ));
        }
        info!(product_id, sequence_index, event_type = %event_type, "trace record added");
        Ok(())
    }

    /// Number of trace records appended to `product_id`.
    pub async fn get_trace_record_count(
        &self,
        product_id: ProductId,
    ) -> Result<u64, LedgerError> {
        Ok(self
            .state
            .read()
            .await
            .product(product_id)?
            .trace_record_count())
    }

    /// Public read of the `index`-th trace record's recorder and label.
    pub async fn get_public_trace_info(
        &self,
        product_id: ProductId,
        index: u64,
    ) -> Result<PublicTraceInfo, LedgerError> {
        let state = self.state.read().await;
        let product = state.product(product_id)?;
        let count = product.trace_record_count();
        product
            .trace
            .get(index as usize)
            .map(TraceRecord::public_info)
            .ok_or(LedgerError::IndexOutOfRange {
                product_id,
                index,
                count,
            })
    }

    // === Decryption protocol ===

    /// Submit a batched reveal request for a product's four confidential
    /// fields: manufacturer id, production time, quality score, cost.
    ///
    /// Returns the store's correlation id immediately; plaintexts arrive
    /// later through [`LedgerService::process_decryption`].
    #[instrument(skip(self), fields(caller = %caller))]
    pub async fn request_decryption(
        &self,
        caller: Identity,
        product_id: ProductId,
    ) -> Result<RevealRequestId, LedgerError> {
        let result = self.request_decryption_inner(caller, product_id).await;
        self.finish(result, |stats| stats.decryptions_requested += 1)
            .await
    }

    async fn request_decryption_inner(
        &self,
        caller: Identity,
        product_id: ProductId,
    ) -> Result<RevealRequestId, LedgerError> {
        let mut state = self.state.write().await;
        let handles = {
            let product = state.product(product_id)?;
            let allowed = product.manufacturer == caller
                || state.registry.is_owner(caller)
                || state.registry.is_tracker(caller);
            if !allowed {
                warn!(%caller, product_id, "request_decryption rejected");
                return Err(LedgerError::Unauthorized);
            }
            vec![
                product.secrets.manufacturer_id,
                product.secrets.produced_at,
                product.secrets.quality_score,
                product.secrets.cost,
            ]
        };

        let request_id = self.store.request_reveal(&handles).await?;
        state.decryption.insert_pending(DecryptionRequest {
            request_id,
            product_id,
            requester: caller,
            handles,
            revealed: None,
        });
        info!(%request_id, product_id, requester = %caller, "decryption requested");
        Ok(request_id)
    }

    /// Apply a reveal completion delivered by the store.
    ///
    /// The proof is validated against the store's attestation before the
    /// plaintexts are trusted; an invalid proof rejects the ticket without
    /// touching state. Tickets for unknown or already-completed requests
    /// are ignored; the store's delivery guarantees are not ours to
    /// assume.
    #[instrument(skip(self, ticket), fields(request_id = %ticket.request_id))]
    pub async fn process_decryption(&self, ticket: RevealTicket) -> Result<(), LedgerError> {
        let result = self.process_decryption_inner(ticket).await;
        let mut stats = self.stats.write().await;
        match &result {
            Ok(CompletionOutcome::Applied) => stats.decryptions_completed += 1,
            Ok(_) => {}
            Err(_) => stats.rejected_operations += 1,
        }
        result.map(|_| ())
    }

    async fn process_decryption_inner(
        &self,
        ticket: RevealTicket,
    ) -> Result<CompletionOutcome, LedgerError> {
        let mut state = self.state.write().await;
        match state.decryption.get(ticket.request_id) {
            None => {
                warn!("ignoring reveal completion for a request this ledger never issued");
                return Ok(CompletionOutcome::Unknown);
            }
            Some(request) if request.is_completed() => {
                debug!("duplicate reveal completion ignored");
                return Ok(CompletionOutcome::Duplicate);
            }
            Some(_) => {}
        }

        if ticket.values.len() != PRODUCT_REVEAL_FIELDS {
            warn!(
                values = ticket.values.len(),
                "reveal completion rejected: malformed value count"
            );
            return Err(LedgerError::DecryptionProofInvalid(ticket.request_id));
        }
        let attested = self
            .store
            .verify_reveal(ticket.request_id, &ticket.values, &ticket.proof)
            .await;
        if !attested {
            warn!("reveal completion rejected: proof failed attestation");
            return Err(LedgerError::DecryptionProofInvalid(ticket.request_id));
        }

        let fields = RevealedProductFields {
            manufacturer_id: ticket.values[0],
            produced_at: ticket.values[1],
            quality_score: ticket.values[2],
            cost: ticket.values[3],
        };
        let outcome = state.decryption.complete(ticket.request_id, fields);
        debug_assert_eq!(outcome, CompletionOutcome::Applied);
        info!("decryption completed");
        Ok(outcome)
    }

    /// Read the outcome of a reveal. Only the identity that issued the
    /// request may read it; `None` while pending or for an unknown id.
    pub async fn decryption_result(
        &self,
        caller: Identity,
        request_id: RevealRequestId,
    ) -> Result<Option<RevealedProductFields>, LedgerError> {
        let state = self.state.read().await;
        match state.decryption.get(request_id) {
            None => Ok(None),
            Some(request) if request.requester != caller => Err(LedgerError::Unauthorized),
            Some(request) => Ok(request.revealed),
        }
    }

    // === Internals ===

    /// Record the outcome of one operation in the stats table.
    async fn finish<V>(
        &self,
        result: Result<V, LedgerError>,
        on_ok: fn(&mut ServiceStats),
    ) -> Result<V, LedgerError> {
        let mut stats = self.stats.write().await;
        match &result {
            Ok(_) => on_ok(&mut stats),
            Err(_) => stats.rejected_operations += 1,
        }
        result
    }
}

// =============================================================================
// INBOUND PORT IMPLEMENTATION
// =============================================================================

#[async_trait]
impl<S, T> LedgerApi for LedgerService<S, T>
where
    S: ConfidentialValueStore,
    T: TimeSource,
{
    async fn grant_manufacturer(&self, by: Identity, target: Identity) -> Result<(), LedgerError> {
        LedgerService::grant_manufacturer(self, by, target).await
    }

    async fn revoke_manufacturer(
        &self,
        by: Identity,
        target: Identity,
    ) -> Result<(), LedgerError> {
        LedgerService::revoke_manufacturer(self, by, target).await
    }

    async fn grant_tracker(&self, by: Identity, target: Identity) -> Result<(), LedgerError> {
        LedgerService::grant_tracker(self, by, target).await
    }

    async fn revoke_tracker(&self, by: Identity, target: Identity) -> Result<(), LedgerError> {
        LedgerService::revoke_tracker(self, by, target).await
    }

    async fn is_owner(&self, id: Identity) -> bool {
        LedgerService::is_owner(self, id).await
    }

    async fn is_manufacturer(&self, id: Identity) -> bool {
        LedgerService::is_manufacturer(self, id).await
    }

    async fn is_tracker(&self, id: Identity) -> bool {
        LedgerService::is_tracker(self, id).await
    }

    async fn create_batch(
        &self,
        caller: Identity,
        supplier_count: PlainWord,
        quantity: PlainWord,
    ) -> Result<BatchId, LedgerError> {
        LedgerService::create_batch(self, caller, supplier_count, quantity).await
    }

    async fn seal_batch(&self, caller: Identity, batch_id: BatchId) -> Result<(), LedgerError> {
        LedgerService::seal_batch(self, caller, batch_id).await
    }

    async fn get_batch_info(&self, batch_id: BatchId) -> Result<BatchInfo, LedgerError> {
        LedgerService::get_batch_info(self, batch_id).await
    }

    async fn batch_count(&self) -> u64 {
        LedgerService::batch_count(self).await
    }

    async fn register_product(
        &self,
        caller: Identity,
        manufacturer_id: PlainWord,
        quality_score: PlainWord,
        cost: PlainWord,
        batch_id: BatchId,
        category: String,
    ) -> Result<ProductId, LedgerError> {
        LedgerService::register_product(
            self,
            caller,
            manufacturer_id,
            quality_score,
            cost,
            batch_id,
            category,
        )
        .await
    }

    async fn get_product_info(&self, product_id: ProductId) -> Result<ProductInfo, LedgerError> {
        LedgerService::get_product_info(self, product_id).await
    }

    async fn verify_authenticity(&self, product_id: ProductId) -> Result<bool, LedgerError> {
        LedgerService::verify_authenticity(self, product_id).await
    }

    async fn product_count(&self) -> u64 {
        LedgerService::product_count(self).await
    }

    async fn add_trace_record(
        &self,
        caller: Identity,
        product_id: ProductId,
        location_id: PlainWord,
        handler_id: PlainWord,
        quality_check_passed: bool,
        event_type: String,
    ) -> Result<(), LedgerError> {
        LedgerService::add_trace_record(
            self,
            caller,
            product_id,
            location_id,
            handler_id,
            quality_check_passed,
            event_type,
        )
        .await
    }

    async fn get_trace_record_count(&self, product_id: ProductId) -> Result<u64, LedgerError> {
        LedgerService::get_trace_record_count(self, product_id).await
    }

    async fn get_public_trace_info(
        &self,
        product_id: ProductId,
        index: u64,
    ) -> Result<PublicTraceInfo, LedgerError> {
        LedgerService::get_public_trace_info(self, product_id, index).await
    }

    async fn request_decryption(
        &self,
        caller: Identity,
        product_id: ProductId,
    ) -> Result<RevealRequestId, LedgerError> {
        LedgerService::request_decryption(self, caller, product_id).await
    }

    async fn process_decryption(&self, ticket: RevealTicket) -> Result<(), LedgerError> {
        LedgerService::process_decryption(self, ticket).await
    }

    async fn decryption_result(
        &self,
        caller: Identity,
        request_id: RevealRequestId,
    ) -> Result<Option<RevealedProductFields>, LedgerError> {
        LedgerService::decryption_result(self, caller, request_id).await
    }
}

// =============================================================================
// TESTS
// =============================================================================
