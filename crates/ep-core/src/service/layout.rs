use std::path::{Path, PathBuf};

use crate::host::InitVariant;
use crate::service::CredentialPaths;

/// Artifacts that must be resolved before a resource-based install.
pub const REQUIRED_ARTIFACTS: [&str; 2] = ["etcd", "etcdctl"];

/// Distro packages installed when artifacts are missing on the legacy release.
pub const FALLBACK_PACKAGES: [&str; 1] = ["etcd"];

/// Fixed filesystem contract shared with the etcd binary and its package.
///
/// [`ServiceLayout::standard`] holds the production paths. Tests may re-root
/// the layout under a temporary directory with [`ServiceLayout::rooted_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLayout {
    pub service_name: String,
    pub user: String,
    pub group: String,
    pub bin_dir: PathBuf,
    pub data_dir: PathBuf,
    /// Data seeded by the distro package, removed once after a package install.
    pub package_data_dir: PathBuf,
    pub systemd_unit_path: PathBuf,
    pub upstart_job_path: PathBuf,
    pub defaults_path: PathBuf,
    pub credentials: CredentialPaths,
}

impl ServiceLayout {
    pub const DATA_DIR_MODE: u32 = 0o775;
    pub const BINARY_MODE: u32 = 0o755;
    pub const RENDERED_FILE_MODE: u32 = 0o644;
    /// Private key, owned by the service user.
    pub const KEY_FILE_MODE: u32 = 0o600;
    pub const CERTIFICATE_FILE_MODE: u32 = 0o644;

    pub fn standard() -> Self {
        Self::rooted_at(Path::new("/"))
    }

    pub fn rooted_at(root: &Path) -> Self {
        let data_dir = root.join("var/lib/etcd");
        Self {
            service_name: "etcd".to_string(),
            user: "etcd".to_string(),
            group: "etcd".to_string(),
            bin_dir: root.join("usr/bin"),
            package_data_dir: data_dir.join("default"),
            data_dir,
            systemd_unit_path: root.join("etc/systemd/system/etcd.service"),
            upstart_job_path: root.join("etc/init/etcd.conf"),
            defaults_path: root.join("etc/default/etcd"),
            credentials: CredentialPaths {
                key: root.join("tmp/etcd_key"),
                certificate: root.join("tmp/etcd_cert"),
                ca_certificate: root.join("tmp/etcd_ca"),
            },
        }
    }

    pub fn binary_path(&self, artifact: &str) -> PathBuf {
        self.bin_dir.join(artifact)
    }

    pub fn unit_path(&self, variant: InitVariant) -> &Path {
        match variant {
            InitVariant::Systemd => &self.systemd_unit_path,
            InitVariant::Upstart => &self.upstart_job_path,
        }
    }
}

impl Default for ServiceLayout {
    fn default() -> Self {
        Self::standard()
    }
}
