//! # Shared Types Crate
//!
//! Cross-crate domain vocabulary for the VeilTrace ledger.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identity and id types used by more than one
//!   crate are defined here, nowhere else.
//! - **Plaintext at the boundary**: every value the confidential store
//!   encrypts crosses its boundary as one [`PlainWord`]; richer typing lives
//!   on the ledger side.

pub mod identity;
pub mod values;

pub use identity::Identity;
pub use values::*;
