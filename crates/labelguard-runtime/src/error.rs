use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("pull {image}: {reason}")]
    Pull { image: String, reason: String },

    #[error("inspect {image}: {reason}")]
    Inspect { image: String, reason: String },

    #[error("fetch cancelled for {image}")]
    Cancelled { image: String },
}

impl RuntimeError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RuntimeError::Cancelled { .. })
    }
}
