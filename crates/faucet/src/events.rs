//! Event notifications for successful mutations.
//!
//! Subscribers receive events over a broadcast channel; a slow or
//! absent subscriber never blocks the faucet.

use drip_common::types::{Address, Amount, DayIndex, Timestamp};
use tokio::sync::broadcast;
use tracing::debug;

/// Notifications emitted on successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaucetEvent {
    /// A claim committed
    ClaimCompleted {
        account: Address,
        amount: Amount,
        timestamp: Timestamp,
    },
    /// The daily distribution landed exactly on the cap
    CapReached { day: DayIndex, total: Amount },
    /// Configuration replaced
    ConfigChanged {
        claim_amount: Amount,
        claim_interval_secs: u64,
        daily_limit: Amount,
    },
    /// Funds withdrawn by an administrator
    Withdrawal { admin: Address, amount: Amount },
}

/// Event subscriber handle
pub struct EventSubscriber {
    receiver: broadcast::Receiver<FaucetEvent>,
}

impl EventSubscriber {
    /// Receive next event
    pub async fn recv(&mut self) -> Option<FaucetEvent> {
        self.receiver.recv().await.ok()
    }

    /// Non-blocking receive, for draining after a known mutation.
    pub fn try_recv(&mut self) -> Option<FaucetEvent> {
        self.receiver.try_recv().ok()
    }
}

/// Event publisher for faucet notifications
pub struct EventPublisher {
    sender: broadcast::Sender<FaucetEvent>,
}

impl EventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> EventSubscriber {
        EventSubscriber {
            receiver: self.sender.subscribe(),
        }
    }

    /// Publish an event. Delivery is best-effort: with no subscribers
    /// the event is dropped.
    pub fn publish(&self, event: FaucetEvent) {
        match self.sender.send(event) {
            Ok(n) => debug!("Event delivered to {} subscribers", n),
            Err(_) => debug!("Event dropped: no subscribers"),
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_and_receive() {
        let publisher = EventPublisher::new(8);
        let mut sub = publisher.subscribe();

        let event = FaucetEvent::ClaimCompleted {
            account: Address::from([1u8; 20]),
            amount: 1000,
            timestamp: 42,
        };
        publisher.publish(event.clone());

        assert_eq!(sub.recv().await, Some(event));
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_ok() {
        let publisher = EventPublisher::new(8);
        // Must not panic or error
        publisher.publish(FaucetEvent::Withdrawal {
            admin: Address::from([2u8; 20]),
            amount: 5,
        });
    }

    #[tokio::test]
    async fn test_each_subscriber_sees_every_event() {
        let publisher = EventPublisher::new(8);
        let mut a = publisher.subscribe();
        let mut b = publisher.subscribe();

        let event = FaucetEvent::CapReached { day: 3, total: 900 };
        publisher.publish(event.clone());

        assert_eq!(a.recv().await, Some(event.clone()));
        assert_eq!(b.recv().await, Some(event));
    }
}
