//! HTTP layer: wire types, API helpers, and the request authorizer that
//! wraps every outgoing call.

pub mod api;
pub mod authorizer;
pub mod error;
pub mod types;
