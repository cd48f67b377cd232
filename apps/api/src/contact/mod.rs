//! Contact submission pipeline: validation, dispatch to the email delivery
//! provider, and local recovery state for failed attempts.
//!
//! ARCHITECTURAL RULE: all reads and writes of the recovery record go through
//! `SubmissionManager`. Handlers and other modules never touch the store key
//! directly.

pub mod handlers;
pub mod manager;
pub mod models;
pub mod store;
pub mod validation;
