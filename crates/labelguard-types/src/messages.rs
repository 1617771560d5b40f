//! Fixed result messages.
//!
//! These two are contractual: downstream tooling greps annotated documents
//! for them. Everything else is formatted per check.

pub const LABEL_FOUND: &str = "Label found";
pub const LABEL_NOT_FOUND: &str = "Label not found";
