//! Container runtime adapters: pull an image, inspect it, hand back its
//! label mapping.
//!
//! This crate is allowed to spawn external processes. Everything above it
//! talks to the [`ContainerRuntime`] trait; the only shipped implementation
//! drives the `docker` CLI.

#![forbid(unsafe_code)]

mod cancel;
mod docker;
mod error;

pub use cancel::Cancellation;
pub use docker::DockerCli;
pub use error::RuntimeError;

use labelguard_types::LabelMapping;

/// The capability the verifier needs from a container runtime: make the
/// image's metadata locally available and return its labels.
///
/// Implementations must be callable from multiple fetch threads at once and
/// must honor the cancellation token between network-bound steps.
pub trait ContainerRuntime: Send + Sync {
    fn image_labels(&self, ctx: &Cancellation, image: &str) -> Result<LabelMapping, RuntimeError>;
}
