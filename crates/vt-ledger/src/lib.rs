//! # VT-Ledger - Confidential Supply-Chain Ledger
//!
//! A permissioned record store in which most attributes of a tracked item
//! are held only as opaque encrypted handles, while a narrow public subset
//! (category, event type, existence, ownership) stays plaintext for anyone
//! to query.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Batch/product ids increase by exactly 1 per successful creation | `state.rs` - `next_batch_id()` / `next_product_id()` |
//! | A sealed batch accepts no further registrations | `service.rs` - `register_product_inner()`, backstop in `domain/batch.rs` - `record_product()` |
//! | Trace history is strictly ordered and append-only | `service.rs` - `add_trace_record_inner()` |
//! | Every precondition is checked before any state mutation | `service.rs` - all `*_inner()` methods |
//! | Decrypt grants are additive only, never revoked | `domain/confidential.rs` - `GrantLedger` |
//! | Reveal completions are proof-checked and replay-safe | `service.rs` - `process_decryption_inner()` |
//!
//! ## Roles
//!
//! A fixed `owner` administers two independent role sets, `manufacturer`
//! and `tracker`, and is implicitly a member of both. Role revocation is
//! prospective only: entities already created stay valid, and decrypt
//! grants already issued stay usable.
//!
//! ## Architecture
//!
//! Hexagonal: domain entities enforce their own lifecycle rules, the
//! [`service::LedgerService`] applies operations atomically against one
//! owned [`state::LedgerState`], and the two external collaborators (the
//! encrypted-value store and the clock) sit behind traits in
//! [`ports::outbound`] with in-memory adapters in [`adapters`].
//!
//! ## Usage Example
//!
//! ```ignore
//! use vt_ledger::prelude::*;
//!
//! let service = LedgerService::new(config, store, time);
//! service.grant_manufacturer(owner, acme).await?;
//! let batch = service.create_batch(acme, 5, 100).await?;
//! let product = service
//!     .register_product(acme, 42, 95, 1000, batch, "Electronics".into())
//!     .await?;
//! service.seal_batch(acme, batch).await?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;
pub mod state;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::{
        Batch, BatchInfo, BatchSecrets, CipherHandle, CompletionOutcome, DecryptionRequest,
        GrantLedger, Product, ProductInfo, ProductSecrets, PublicTraceInfo, RevealRequestId,
        RevealedProductFields, TraceRecord, TraceSecrets,
    };

    // Ports
    pub use crate::ports::inbound::LedgerApi;
    pub use crate::ports::outbound::{
        ConfidentialValueStore, RevealProof, RevealTicket, TimeSource,
    };

    // Events
    pub use crate::events::{
        BatchCreatedPayload, BatchSealedPayload, LedgerEvent, ProductRegisteredPayload,
        QualityCheckPerformedPayload, TraceRecordAddedPayload,
    };

    // Errors
    pub use crate::errors::{LedgerError, StoreError};

    // Adapters
    pub use crate::adapters::{InMemoryConfidentialStore, ManualTimeSource, SystemTimeSource};

    // Service
    pub use crate::service::{LedgerConfig, LedgerService, ServiceStats};

    // Shared vocabulary
    pub use shared_types::{BatchId, Identity, PlainWord, ProductId, Timestamp};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
