//! Shared client-side state modules.
//!
//! State is split by domain so individual components can depend on small
//! focused models; each struct lives in an `RwSignal` provided via context.

pub mod tenants;
pub mod toast;
pub mod ui;
