use crate::{Cancellation, ContainerRuntime, RuntimeError};
use labelguard_types::LabelMapping;
use std::process::Command;

/// Runtime adapter driving the `docker` CLI.
///
/// `docker pull --quiet` makes the image metadata locally available, then
/// `docker image inspect` extracts `.Config.Labels`. The binary name is
/// configurable so a docker-compatible CLI (podman) works unchanged.
#[derive(Clone, Debug)]
pub struct DockerCli {
    program: String,
}

impl DockerCli {
    pub fn new() -> Self {
        Self::with_program("docker")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<std::process::Output, RuntimeError> {
        Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| RuntimeError::Spawn {
                command: format!("{} {}", self.program, args.join(" ")),
                source,
            })
    }
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerRuntime for DockerCli {
    fn image_labels(&self, ctx: &Cancellation, image: &str) -> Result<LabelMapping, RuntimeError> {
        if ctx.is_cancelled() {
            return Err(RuntimeError::Cancelled {
                image: image.to_string(),
            });
        }

        log::info!("pull image: {image}");
        let output = self.run(&["pull", "--quiet", image])?;
        if !output.status.success() {
            return Err(RuntimeError::Pull {
                image: image.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        log::info!("image pulled: {image}");

        if ctx.is_cancelled() {
            return Err(RuntimeError::Cancelled {
                image: image.to_string(),
            });
        }

        let output = self.run(&[
            "image",
            "inspect",
            "--format",
            "{{json .Config.Labels}}",
            image,
        ])?;
        if !output.status.success() {
            return Err(RuntimeError::Inspect {
                image: image.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // Inspect prints `null` for an image without labels.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let labels: Option<LabelMapping> =
            serde_json::from_str(stdout.trim()).map_err(|err| RuntimeError::Inspect {
                image: image.to_string(),
                reason: err.to_string(),
            })?;

        Ok(labels.unwrap_or_default())
    }
}
