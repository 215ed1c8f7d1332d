//! Artifact source serving files from a local directory.
//!
//! Used when the operator stages binaries on the host instead of attaching
//! them through the host runtime. `<dir>/<name>` is the artifact `name`.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use ep_core::ports::{Artifact, ArtifactLookup, ArtifactSourceError, ArtifactSourcePort};
use tokio::fs;
use tracing::debug;

pub struct DirectoryArtifactSource {
    root: PathBuf,
}

impl DirectoryArtifactSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl ArtifactSourcePort for DirectoryArtifactSource {
    async fn fetch(&self, name: &str) -> Result<ArtifactLookup, ArtifactSourceError> {
        let path = self.root.join(name);
        match fs::read(&path).await {
            // A zero-byte placeholder counts as not supplied.
            Ok(bytes) if bytes.is_empty() => Ok(ArtifactLookup::Missing),
            Ok(bytes) => {
                debug!(path = %path.display(), len = bytes.len(), "artifact found");
                Ok(ArtifactLookup::Ready(Artifact {
                    name: name.to_string(),
                    bytes,
                }))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(ArtifactLookup::Missing),
            Err(err) => Err(ArtifactSourceError::Read {
                name: name.to_string(),
                reason: err.to_string(),
            }),
        }
    }
}
