//! unitgate core: admission decisions, allowlist matching, and the shared
//! error surface.
//!
//! This crate answers one question per request — is this caller allowed in —
//! and derives the CORS origin set from the same security configuration. It
//! intentionally carries no transport or runtime dependencies so the gateway
//! and tests consume a single decision path.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `UnitGateError`/`Result` so a bad
//! request or malformed allowlist entry never takes the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod action;
pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{Result, UnitGateError};
