//! In-memory host used by the reconciliation scenarios.
//!
//! One `FakeHost` backs every port so a test can inspect the whole machine
//! after a run: files, accounts, open ports, markers and the ordered log of
//! side-effecting calls.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use ep_app::{AgentDeps, ReconciliationController, TriggerDispatcher};
use ep_core::ports::*;
use ep_core::{
    ClientCredentials, DesiredConfig, HostFacts, ListenPort, ProvisioningState, ServiceLayout,
    WorkloadStatus,
};

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub contents: Vec<u8>,
    pub mode: u32,
    pub uid: Option<u32>,
}

#[derive(Debug, Default)]
pub struct HostState {
    pub codename: String,
    /// `None` models a runtime without artifact support.
    pub artifacts: Option<BTreeMap<String, Vec<u8>>>,
    pub files: BTreeMap<PathBuf, FileEntry>,
    pub dirs: BTreeMap<PathBuf, FileEntry>,
    pub groups: BTreeSet<String>,
    pub users: BTreeMap<String, u32>,
    pub memberships: BTreeSet<(String, String)>,
    pub open_ports: BTreeSet<u16>,
    pub markers: ProvisioningState,
    pub declared_port: i64,
    pub applied_port: Option<ListenPort>,
    pub statuses: Vec<WorkloadStatus>,
    /// Ordered log of side-effecting calls, e.g. `"stop etcd"`.
    pub calls: Vec<String>,
    pub fail_enable: bool,
    pub fail_package_install: bool,
    pub fail_status: bool,
}

pub struct FakeHost {
    pub state: Mutex<HostState>,
    pub layout: ServiceLayout,
}

impl FakeHost {
    pub fn new(codename: &str) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(HostState {
                codename: codename.to_string(),
                artifacts: Some(BTreeMap::new()),
                declared_port: 2379,
                ..HostState::default()
            }),
            layout: ServiceLayout::standard(),
        })
    }

    pub fn with_artifacts(codename: &str) -> Arc<Self> {
        let host = Self::new(codename);
        host.update(|s| {
            let artifacts = s.artifacts.get_or_insert_with(BTreeMap::new);
            artifacts.insert("etcd".to_string(), b"\x7fELF etcd".to_vec());
            artifacts.insert("etcdctl".to_string(), b"\x7fELF etcdctl".to_vec());
        });
        host
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut HostState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub fn read<R>(&self, f: impl FnOnce(&HostState) -> R) -> R {
        f(&self.state.lock().unwrap())
    }

    pub fn calls(&self) -> Vec<String> {
        self.read(|s| s.calls.clone())
    }

    pub fn clear_calls(&self) {
        self.update(|s| s.calls.clear());
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.read(|s| s.calls.iter().filter(|c| c.starts_with(prefix)).count())
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<FileEntry> {
        self.read(|s| s.files.get(path.as_ref()).cloned())
    }

    pub fn last_status(&self) -> Option<WorkloadStatus> {
        self.read(|s| s.statuses.last().cloned())
    }

    pub fn any_blocked(&self) -> bool {
        self.read(|s| s.statuses.iter().any(WorkloadStatus::is_blocked))
    }

    pub fn markers(&self) -> ProvisioningState {
        self.read(|s| s.markers.clone())
    }

    fn record(&self, call: impl Into<String>) {
        self.update(|s| s.calls.push(call.into()));
    }
}

pub fn deps(host: &Arc<FakeHost>) -> AgentDeps {
    AgentDeps {
        state: host.clone(),
        config: host.clone(),
        host_facts: host.clone(),
        fs: host.clone(),
        artifacts: host.clone(),
        packages: host.clone(),
        services: host.clone(),
        accounts: host.clone(),
        firewall: host.clone(),
        status: host.clone(),
        layout: host.layout.clone(),
    }
}

pub fn controller(host: &Arc<FakeHost>) -> ReconciliationController {
    ReconciliationController::from_deps(deps(host))
}

pub fn dispatcher(host: &Arc<FakeHost>) -> TriggerDispatcher {
    TriggerDispatcher::new(Arc::new(controller(host)))
}

#[async_trait]
impl ProvisioningStatePort for FakeHost {
    async fn load_state(&self) -> anyhow::Result<ProvisioningState> {
        Ok(self.markers())
    }

    async fn save_state(&self, state: &ProvisioningState) -> anyhow::Result<()> {
        self.update(|s| s.markers = state.clone());
        Ok(())
    }
}

#[async_trait]
impl ConfigStorePort for FakeHost {
    async fn snapshot(&self) -> anyhow::Result<DesiredConfig> {
        let (declared, applied) = self.read(|s| (s.declared_port, s.applied_port));
        Ok(DesiredConfig::new(ListenPort::new(declared)?, applied))
    }

    async fn commit(&self, port: ListenPort) -> anyhow::Result<()> {
        self.update(|s| s.applied_port = Some(port));
        Ok(())
    }
}

#[async_trait]
impl HostFactsPort for FakeHost {
    async fn probe(&self) -> anyhow::Result<HostFacts> {
        Ok(HostFacts::new(self.read(|s| s.codename.clone())))
    }
}

#[async_trait]
impl HostFilesystemPort for FakeHost {
    async fn exists(&self, path: &Path) -> bool {
        self.read(|s| s.files.contains_key(path) || s.dirs.contains_key(path))
    }

    async fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> anyhow::Result<()> {
        self.record(format!("write {}", path.display()));
        self.update(|s| {
            s.files.insert(
                path.to_path_buf(),
                FileEntry {
                    contents: contents.to_vec(),
                    mode,
                    uid: None,
                },
            )
        });
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> anyhow::Result<()> {
        self.update(|s| {
            s.dirs.entry(path.to_path_buf()).or_insert(FileEntry {
                contents: Vec::new(),
                mode: 0o755,
                uid: None,
            });
        });
        Ok(())
    }

    async fn set_mode(&self, path: &Path, mode: u32) -> anyhow::Result<()> {
        self.update(|s| match s.dirs.get_mut(path).or(s.files.get_mut(path)) {
            Some(entry) => {
                entry.mode = mode;
                Ok(())
            }
            None => Err(anyhow::anyhow!("no such path: {}", path.display())),
        })
    }

    async fn chown_user(&self, path: &Path, uid: u32) -> anyhow::Result<()> {
        self.update(|s| match s.dirs.get_mut(path).or(s.files.get_mut(path)) {
            Some(entry) => {
                entry.uid = Some(uid);
                Ok(())
            }
            None => Err(anyhow::anyhow!("no such path: {}", path.display())),
        })
    }

    async fn remove_dir_all(&self, path: &Path) -> anyhow::Result<()> {
        self.record(format!("remove {}", path.display()));
        self.update(|s| {
            s.dirs.retain(|p, _| !p.starts_with(path));
            s.files.retain(|p, _| !p.starts_with(path));
        });
        Ok(())
    }
}

#[async_trait]
impl ArtifactSourcePort for FakeHost {
    async fn fetch(&self, name: &str) -> Result<ArtifactLookup, ArtifactSourceError> {
        self.read(|s| match &s.artifacts {
            None => Err(ArtifactSourceError::CapabilityUnavailable(
                "resource-get not found".to_string(),
            )),
            Some(artifacts) => Ok(match artifacts.get(name) {
                Some(bytes) => ArtifactLookup::Ready(Artifact {
                    name: name.to_string(),
                    bytes: bytes.clone(),
                }),
                None => ArtifactLookup::Missing,
            }),
        })
    }
}

#[async_trait]
impl PackageManagerPort for FakeHost {
    async fn update(&self) -> anyhow::Result<()> {
        self.record("apt update");
        Ok(())
    }

    async fn install(&self, packages: &[String]) -> anyhow::Result<()> {
        self.record(format!("apt install {}", packages.join(" ")));
        if self.read(|s| s.fail_package_install) {
            anyhow::bail!("apt-get install exited with 100");
        }
        // The package creates its service account and seeds its default
        // data directory on first start.
        let seeded = self.layout.package_data_dir.clone();
        let user = self.layout.user.clone();
        self.update(|s| {
            s.groups.insert(user.clone());
            if !s.users.contains_key(&user) {
                let uid = 110 + s.users.len() as u32;
                s.users.insert(user.clone(), uid);
            }
            s.dirs.insert(
                seeded.clone(),
                FileEntry {
                    contents: Vec::new(),
                    mode: 0o700,
                    uid: None,
                },
            );
            s.files.insert(
                seeded.join("member/snap/db"),
                FileEntry {
                    contents: b"seeded".to_vec(),
                    mode: 0o600,
                    uid: None,
                },
            );
        });
        Ok(())
    }
}

#[async_trait]
impl ServiceManagerPort for FakeHost {
    async fn stop(&self, service: &str) -> anyhow::Result<()> {
        self.record(format!("stop {service}"));
        Ok(())
    }

    async fn restart(&self, service: &str) -> anyhow::Result<()> {
        self.record(format!("restart {service}"));
        Ok(())
    }

    async fn enable(&self, service: &str) -> anyhow::Result<()> {
        self.record(format!("enable {service}"));
        if self.read(|s| s.fail_enable) {
            anyhow::bail!("Failed to enable unit: unit {service}.service already enabled");
        }
        Ok(())
    }
}

#[async_trait]
impl UserAccountPort for FakeHost {
    async fn ensure_group(&self, group: &str) -> anyhow::Result<()> {
        self.update(|s| s.groups.insert(group.to_string()));
        Ok(())
    }

    async fn user_exists(&self, user: &str) -> anyhow::Result<bool> {
        Ok(self.read(|s| s.users.contains_key(user)))
    }

    async fn add_user(&self, user: &str) -> anyhow::Result<()> {
        self.record(format!("useradd {user}"));
        self.update(|s| {
            if s.users.contains_key(user) {
                anyhow::bail!("useradd: user '{user}' already exists");
            }
            let uid = 110 + s.users.len() as u32;
            s.users.insert(user.to_string(), uid);
            Ok(())
        })
    }

    async fn add_user_to_group(&self, user: &str, group: &str) -> anyhow::Result<()> {
        self.update(|s| s.memberships.insert((user.to_string(), group.to_string())));
        Ok(())
    }

    async fn uid_of(&self, user: &str) -> anyhow::Result<u32> {
        self.read(|s| s.users.get(user).copied())
            .ok_or_else(|| anyhow::anyhow!("no such user: {user}"))
    }
}

#[async_trait]
impl FirewallPort for FakeHost {
    async fn open_port(&self, port: ListenPort) -> anyhow::Result<()> {
        self.record(format!("open-port {port}"));
        self.update(|s| s.open_ports.insert(port.get()));
        Ok(())
    }

    async fn close_port(&self, port: ListenPort) -> anyhow::Result<()> {
        self.record(format!("close-port {port}"));
        self.update(|s| s.open_ports.remove(&port.get()));
        Ok(())
    }
}

#[async_trait]
impl StatusPort for FakeHost {
    async fn set_status(&self, status: WorkloadStatus) -> anyhow::Result<()> {
        if self.read(|s| s.fail_status) {
            anyhow::bail!("status-set not available");
        }
        self.update(|s| s.statuses.push(status));
        Ok(())
    }
}

/// TLS peer publishing fixed material.
pub struct FakePeer {
    pub credentials: ClientCredentials,
    pub cluster: Option<String>,
}

impl FakePeer {
    pub fn ready() -> Self {
        Self {
            credentials: ClientCredentials {
                key: b"client-key".to_vec(),
                certificate: b"client-cert".to_vec(),
                ca_certificate: b"ca-cert".to_vec(),
            },
            cluster: Some("etcd0=https://10.0.0.10:2380".to_string()),
        }
    }

    pub fn without_cluster() -> Self {
        Self {
            cluster: None,
            ..Self::ready()
        }
    }
}

#[async_trait]
impl PeerRelationPort for FakePeer {
    async fn client_credentials(&self) -> anyhow::Result<ClientCredentials> {
        Ok(self.credentials.clone())
    }

    async fn get_remote(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(match key {
            "cluster" => self.cluster.clone(),
            _ => None,
        })
    }
}
