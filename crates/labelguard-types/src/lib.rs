//! Stable DTOs shared across the labelguard workspace.
//!
//! This crate is intentionally boring:
//! - the constraint document as the user writes it and as the tool annotates it
//! - the tri-state check outcome
//! - fixed message strings
//!
//! The document field names are the wire format: renaming one breaks every
//! document already in the wild.

#![forbid(unsafe_code)]

pub mod document;
pub mod messages;
pub mod outcome;

pub use document::{
    ConstraintSet, CountConstraint, ImageEntry, LabelConstraint, LabelMapping, SemverConstraint,
    StringConstraint,
};
pub use outcome::Outcome;
