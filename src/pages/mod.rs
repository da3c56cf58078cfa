//! Page-level components, one per route.

pub mod dashboard;
pub mod login;
pub mod tenant_detail;
pub mod tenant_list;
