//! Top-level facade crate for unitgate.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use unitgate_core::*;
}

pub mod gateway {
    pub use unitgate_gateway::*;
}
