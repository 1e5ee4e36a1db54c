//! Snapshot delivery to subscribed observers.

use crate::snapshot::Snapshot;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::trace;

/// Fan-out list of snapshot subscribers.
///
/// Observers whose receiving end has been dropped are pruned on the
/// next publish. Sends never block; the channel is unbounded and the
/// engine does not wait on consumers.
#[derive(Debug, Default)]
pub(crate) struct Watchers {
    senders: Vec<Sender<Snapshot>>,
}

impl Watchers {
    /// Registers a new observer and seeds it with the current state.
    pub(crate) fn subscribe(&mut self, current: Snapshot) -> Receiver<Snapshot> {
        let (tx, rx) = mpsc::channel();
        // The receiver is still in scope, so the seed send cannot fail.
        let _ = tx.send(current);
        self.senders.push(tx);
        rx
    }

    /// Delivers a snapshot to every live observer.
    pub(crate) fn publish(&mut self, snapshot: Snapshot) {
        self.senders.retain(|tx| tx.send(snapshot).is_ok());
        trace!(
            observers = self.senders.len(),
            revision = snapshot.revision,
            "snapshot published"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn snapshot(revision: u64) -> Snapshot {
        Snapshot {
            cells: [None; 9],
            to_move: Player::X,
            outcome: None,
            revision,
        }
    }

    #[test]
    fn subscribe_seeds_current_state() {
        let mut watchers = Watchers::default();
        let rx = watchers.subscribe(snapshot(3));
        assert_eq!(rx.try_recv().unwrap().revision, 3);
    }

    #[test]
    fn publish_reaches_all_subscribers_in_order() {
        let mut watchers = Watchers::default();
        let rx1 = watchers.subscribe(snapshot(0));
        let rx2 = watchers.subscribe(snapshot(0));
        watchers.publish(snapshot(1));
        watchers.publish(snapshot(2));

        for rx in [rx1, rx2] {
            let revisions: Vec<u64> = rx.try_iter().map(|s| s.revision).collect();
            assert_eq!(revisions, vec![0, 1, 2]);
        }
    }

    #[test]
    fn publish_prunes_dropped_subscribers() {
        let mut watchers = Watchers::default();
        let rx = watchers.subscribe(snapshot(0));
        drop(rx);
        watchers.publish(snapshot(1));
        assert!(watchers.senders.is_empty());
    }
}
