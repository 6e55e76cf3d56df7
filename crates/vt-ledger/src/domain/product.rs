//! # Product Entity
//!
//! A tracked item. Everything but the category, batch linkage, and
//! manufacturer identity is stored encrypted. Products are never mutated
//! after registration except through their trace history.

use crate::domain::confidential::CipherHandle;
use crate::domain::trace::TraceRecord;
use serde::{Deserialize, Serialize};
use shared_types::{BatchId, Identity, ProductId};

/// Encrypted attributes of a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSecrets {
    /// Manufacturer-internal numeric id.
    pub manufacturer_id: CipherHandle,
    /// Production timestamp.
    pub produced_at: CipherHandle,
    /// Quality score, range-checked to 0..=100 before encryption. The
    /// stored handle carries no range proof beyond that input-time check.
    pub quality_score: CipherHandle,
    /// Production cost.
    pub cost: CipherHandle,
}

/// A tracked product.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    /// Sequential id, global across all batches. First issued id is 1.
    pub id: ProductId,
    /// Identity that registered the product.
    pub manufacturer: Identity,
    /// Owning batch.
    pub batch_id: BatchId,
    /// Plaintext classification, e.g. "Electronics".
    pub category: String,
    /// Encrypted attributes.
    pub secrets: ProductSecrets,
    /// Append-only trace history, ordered by sequence index.
    pub trace: Vec<TraceRecord>,
}

impl Product {
    /// Create a freshly registered product with an empty trace history.
    #[must_use]
    pub fn new(
        id: ProductId,
        manufacturer: Identity,
        batch_id: BatchId,
        category: String,
        secrets: ProductSecrets,
    ) -> Self {
        Self {
            id,
            manufacturer,
            batch_id,
            category,
            secrets,
            trace: Vec::new(),
        }
    }

    /// Number of trace records in this product's history.
    #[must_use]
    pub fn trace_record_count(&self) -> u64 {
        self.trace.len() as u64
    }

    /// Weak authenticity check: was this product ever legitimately
    /// registered by a known identity?
    ///
    /// This is exactly "manufacturer is non-zero", not a signature check.
    /// Downstream callers depend on these weak semantics.
    #[must_use]
    pub fn is_authentic(&self) -> bool {
        !self.manufacturer.is_zero()
    }

    /// The public view of this product.
    #[must_use]
    pub fn info(&self) -> ProductInfo {
        ProductInfo {
            manufacturer: self.manufacturer,
            batch_id: self.batch_id,
            category: self.category.clone(),
            trace_record_count: self.trace_record_count(),
        }
    }
}

/// Public, unauthenticated view of a product. Never contains handles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Identity that registered the product.
    pub manufacturer: Identity,
    /// Owning batch.
    pub batch_id: BatchId,
    /// Plaintext classification.
    pub category: String,
    /// Number of trace records appended so far.
    pub trace_record_count: u64,
}

// =============================================================================
// TESTS
// =============================================================================
