//! # Core Value Aliases
//!
//! Id and plaintext-word aliases used by every ledger crate.
//!
//! ## Type Decisions
//!
//! - Batch and product ids are `u64`, issued sequentially from 1. Zero is
//!   never issued, so `0` is safe as an "unset" value in tooling.
//! - `PlainWord` is `u64`: the single word the confidential store encrypts.
//!   Booleans cross the boundary as 0/1; narrower domain values (quality
//!   scores) are range-checked before encryption.

/// Sequential batch identifier. First issued id is 1.
pub type BatchId = u64;

/// Sequential product identifier, global across all batches. First issued id is 1.
pub type ProductId = u64;

/// 0-based position of a trace record within one product's history.
pub type SequenceIndex = u64;

/// One plaintext word as accepted by the confidential store.
pub type PlainWord = u64;

/// Unix timestamp in seconds.
pub type Timestamp = u64;
