//! Session and authorization core.
//!
//! DESIGN
//! ======
//! One owned singleton ([`gateway::AuthGateway`]) mutates session state;
//! storage and navigation are injected capabilities so the whole pipeline
//! is testable natively with in-memory fakes. Data flows token store →
//! session state at startup, then the gateway keeps both in sync.

pub mod error;
pub mod gateway;
pub mod guard;
pub mod navigator;
pub mod session;
pub mod storage;
pub mod store;
