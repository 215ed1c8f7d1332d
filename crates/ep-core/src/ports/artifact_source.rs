use async_trait::async_trait;
use thiserror::Error;

/// An install artifact resolved by logical name.
#[derive(Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifact")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Result of a lookup the host runtime was able to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactLookup {
    Ready(Artifact),
    /// Not supplied yet; a later trigger may find it.
    Missing,
}

#[derive(Debug, Error)]
pub enum ArtifactSourceError {
    /// The runtime cannot supply artifacts at all. Retrying will not help.
    #[error("host runtime cannot supply artifacts: {0}")]
    CapabilityUnavailable(String),

    #[error("failed to read artifact {name}: {reason}")]
    Read { name: String, reason: String },
}

#[async_trait]
pub trait ArtifactSourcePort: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<ArtifactLookup, ArtifactSourceError>;
}
