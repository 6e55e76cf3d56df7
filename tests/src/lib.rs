//! # VeilTrace Test Suite
//!
//! Unified test crate containing cross-component scenarios that exercise
//! the ledger end to end through its public API, with the in-memory store
//! and a pinned clock.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── lifecycle.rs      # batch → product → trace → seal flows
//!     ├── authorization.rs  # role gates, revocation, id conservation
//!     └── decryption.rs     # asynchronous reveal protocol
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p vt-tests
//!
//! # By category
//! cargo test -p vt-tests integration::lifecycle::
//! cargo test -p vt-tests integration::decryption::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]
