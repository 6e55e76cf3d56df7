//! Domain entities and the rules they enforce themselves.

pub mod batch;
pub mod confidential;
pub mod decryption;
pub mod product;
pub mod registry;
pub mod trace;

pub use batch::{Batch, BatchInfo, BatchSecrets};
pub use confidential::{CipherHandle, ConfidentialFieldManager, GrantLedger};
pub use decryption::{
    CompletionOutcome, DecryptionQueue, DecryptionRequest, RevealRequestId, RevealedProductFields,
};
pub use product::{Product, ProductInfo, ProductSecrets};
pub use registry::AuthorizationRegistry;
pub use trace::{PublicTraceInfo, TraceRecord, TraceSecrets};
