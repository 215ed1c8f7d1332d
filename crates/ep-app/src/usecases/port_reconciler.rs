//! Use case for converging the exposed client port.

use std::sync::Arc;

use ep_core::ports::FirewallPort;
use ep_core::ListenPort;
use tracing::{debug, info};

/// What the reconciler changed on the firewall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortChange {
    Unchanged,
    Opened(ListenPort),
    Moved { from: ListenPort, to: ListenPort },
}

/// Applies the minimal open/close delta between the previously applied port
/// and the declared one.
///
/// - `previous == current`: nothing.
/// - `previous != current`: close `previous`, then open `current`.
/// - no `previous`: open `current` only.
pub struct ReconcilePorts {
    firewall: Arc<dyn FirewallPort>,
}

impl ReconcilePorts {
    pub fn new(firewall: Arc<dyn FirewallPort>) -> Self {
        Self { firewall }
    }

    pub async fn execute(
        &self,
        previous: Option<ListenPort>,
        current: ListenPort,
    ) -> anyhow::Result<PortChange> {
        match previous {
            Some(previous) if previous == current => {
                debug!(port = %current, "client port unchanged");
                Ok(PortChange::Unchanged)
            }
            Some(previous) => {
                info!(from = %previous, to = %current, "client port changed; closing old port and opening new one");
                self.firewall.close_port(previous).await?;
                self.firewall.open_port(current).await?;
                Ok(PortChange::Moved {
                    from: previous,
                    to: current,
                })
            }
            None => {
                info!(port = %current, "opening client port");
                self.firewall.open_port(current).await?;
                Ok(PortChange::Opened(current))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockFirewall;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn port(value: i64) -> ListenPort {
        ListenPort::new(value).unwrap()
    }

    #[tokio::test]
    async fn same_port_touches_nothing() {
        let mut firewall = MockFirewall::new();
        firewall.expect_open_port().never();
        firewall.expect_close_port().never();
        let use_case = ReconcilePorts::new(Arc::new(firewall));

        let change = use_case.execute(Some(port(2379)), port(2379)).await.unwrap();

        assert_eq!(change, PortChange::Unchanged);
    }

    #[tokio::test]
    async fn changed_port_closes_previous_then_opens_current() {
        let mut firewall = MockFirewall::new();
        let mut seq = Sequence::new();
        firewall
            .expect_close_port()
            .with(eq(port(2379)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        firewall
            .expect_open_port()
            .with(eq(port(4001)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let use_case = ReconcilePorts::new(Arc::new(firewall));

        let change = use_case.execute(Some(port(2379)), port(4001)).await.unwrap();

        assert_eq!(
            change,
            PortChange::Moved {
                from: port(2379),
                to: port(4001)
            }
        );
    }

    #[tokio::test]
    async fn no_previous_only_opens_current() {
        let mut firewall = MockFirewall::new();
        firewall.expect_close_port().never();
        firewall
            .expect_open_port()
            .with(eq(port(2379)))
            .times(1)
            .returning(|_| Ok(()));
        let use_case = ReconcilePorts::new(Arc::new(firewall));

        let change = use_case.execute(None, port(2379)).await.unwrap();

        assert_eq!(change, PortChange::Opened(port(2379)));
    }

    #[tokio::test]
    async fn close_failure_skips_open_and_propagates() {
        let mut firewall = MockFirewall::new();
        firewall
            .expect_close_port()
            .returning(|_| Err(anyhow::anyhow!("close-port exited with 1")));
        firewall.expect_open_port().never();
        let use_case = ReconcilePorts::new(Arc::new(firewall));

        let result = use_case.execute(Some(port(2379)), port(4001)).await;

        assert!(result.is_err());
    }
}
