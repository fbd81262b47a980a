//! unitgate gateway library entry.
//!
//! This crate wires the env-sourced config snapshot, the admission
//! middleware, the supervision backend seam, and the HTTP surface into a
//! cohesive control-plane stack. It is intended to be consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod admission;
pub mod app_state;
pub mod config;
pub mod controller;
pub mod gateway;
pub mod handlers;
pub mod ops;
pub mod router;
