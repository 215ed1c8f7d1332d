//! Text of the files rendered for the etcd service.

use crate::config::ListenPort;
use crate::service::ServiceLayout;

/// Values substituted into the host defaults file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultsContext<'a> {
    pub port: ListenPort,
    pub cluster: &'a str,
    pub layout: &'a ServiceLayout,
}

pub fn systemd_unit(layout: &ServiceLayout) -> String {
    format!(
        "\
[Unit]
Description=etcd key-value store (proxy)
Documentation=https://github.com/etcd-io/etcd
After=network-online.target
Wants=network-online.target

[Service]
User={user}
Type=simple
EnvironmentFile=-{defaults}
ExecStart={binary}
Restart=on-failure
RestartSec=10s
LimitNOFILE=40000

[Install]
WantedBy=multi-user.target
",
        user = layout.user,
        defaults = layout.defaults_path.display(),
        binary = layout.binary_path("etcd").display(),
    )
}

pub fn upstart_job(layout: &ServiceLayout) -> String {
    format!(
        "\
description \"etcd key-value store (proxy)\"

start on (net-device-up and local-filesystems and runlevel [2345])
stop on runlevel [016]

respawn
respawn limit 10 5

setuid {user}

script
    if [ -f \"{defaults}\" ]; then
        set -a
        . \"{defaults}\"
        set +a
    fi
    exec {binary}
end script
",
        user = layout.user,
        defaults = layout.defaults_path.display(),
        binary = layout.binary_path("etcd").display(),
    )
}

pub fn defaults_file(ctx: &DefaultsContext<'_>) -> String {
    let creds = &ctx.layout.credentials;
    format!(
        "\
# Managed by etcd-proxy-agent. Local changes are overwritten on every reconcile.
ETCD_PROXY=\"on\"
ETCD_DATA_DIR=\"{data_dir}\"
ETCD_LISTEN_CLIENT_URLS=\"http://0.0.0.0:{port}\"
ETCD_INITIAL_CLUSTER=\"{cluster}\"
ETCD_CERT_FILE=\"{cert}\"
ETCD_KEY_FILE=\"{key}\"
ETCD_TRUSTED_CA_FILE=\"{ca}\"
ETCD_PEER_CERT_FILE=\"{cert}\"
ETCD_PEER_KEY_FILE=\"{key}\"
ETCD_PEER_TRUSTED_CA_FILE=\"{ca}\"
",
        data_dir = ctx.layout.data_dir.display(),
        port = ctx.port,
        cluster = ctx.cluster,
        cert = creds.certificate.display(),
        key = creds.key.display(),
        ca = creds.ca_certificate.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn systemd_unit_points_at_fixed_paths() {
        let unit = systemd_unit(&ServiceLayout::standard());

        assert!(unit.contains("ExecStart=/usr/bin/etcd\n"));
        assert!(unit.contains("EnvironmentFile=-/etc/default/etcd\n"));
        assert!(unit.contains("User=etcd\n"));
        assert!(unit.contains("WantedBy=multi-user.target"));
    }

    #[test]
    fn upstart_job_sources_defaults() {
        let job = upstart_job(&ServiceLayout::standard());

        assert!(job.contains(". \"/etc/default/etcd\""));
        assert!(job.contains("exec /usr/bin/etcd\n"));
        assert!(job.contains("setuid etcd"));
    }

    #[test]
    fn defaults_file_carries_port_cluster_and_credentials() {
        let layout = ServiceLayout::standard();
        let rendered = defaults_file(&DefaultsContext {
            port: ListenPort::new(4001).unwrap(),
            cluster: "etcd0=https://10.0.0.1:2380",
            layout: &layout,
        });

        assert!(rendered.contains("ETCD_LISTEN_CLIENT_URLS=\"http://0.0.0.0:4001\""));
        assert!(rendered.contains("ETCD_INITIAL_CLUSTER=\"etcd0=https://10.0.0.1:2380\""));
        assert!(rendered.contains("ETCD_CERT_FILE=\"/tmp/etcd_cert\""));
        assert!(rendered.contains("ETCD_KEY_FILE=\"/tmp/etcd_key\""));
        assert!(rendered.contains("ETCD_TRUSTED_CA_FILE=\"/tmp/etcd_ca\""));
    }
}
