//! Reusable view components.

pub mod confirm_dialog;
pub mod navbar;
pub mod stat_card;
pub mod tenant_form;
pub mod toast;
