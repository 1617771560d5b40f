//! Verification orchestration.
//!
//! Two concurrent phases with a hard barrier between them: fetch every
//! image's labels into the store, then evaluate every image's constraints
//! against its snapshot. A fetch failure aborts the run before any
//! constraint is touched; after a clean fetch the run always completes and
//! all outcomes live in the mutated [`labelguard_types::ConstraintSet`].

#![forbid(unsafe_code)]

mod fetch;
mod store;
mod verifier;

pub use fetch::fill_store;
pub use store::LabelStore;
pub use verifier::verify;
