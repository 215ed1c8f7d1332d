use std::fmt;
use std::path::{Path, PathBuf};

/// TLS client material handed over by the peer. Contents are opaque.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub key: Vec<u8>,
    pub certificate: Vec<u8>,
    pub ca_certificate: Vec<u8>,
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("key", &format_args!("<{} bytes>", self.key.len()))
            .field("certificate", &format_args!("<{} bytes>", self.certificate.len()))
            .field(
                "ca_certificate",
                &format_args!("<{} bytes>", self.ca_certificate.len()),
            )
            .finish()
    }
}

/// Where each credential blob is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPaths {
    pub key: PathBuf,
    pub certificate: PathBuf,
    pub ca_certificate: PathBuf,
}

impl CredentialPaths {
    /// Pair the public certificate paths with their blobs. The key is
    /// written separately with tighter permissions.
    pub fn certificates_with<'a>(
        &'a self,
        credentials: &'a ClientCredentials,
    ) -> [(&'a Path, &'a [u8]); 2] {
        [
            (self.certificate.as_path(), credentials.certificate.as_slice()),
            (self.ca_certificate.as_path(), credentials.ca_certificate.as_slice()),
        ]
    }
}
