use fuel_core::{ConsumptionStats, FuelingRecord};
use serde::Serialize;
use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 64;

/// A freshly recalculated view of one owner's records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSnapshot {
    pub owner_id: String,
    pub records: Vec<FuelingRecord>,
    pub stats: ConsumptionStats,
}

/// Fan-out of owner snapshots to every subscriber after each mutation.
#[derive(Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<OwnerSnapshot>,
}

impl ChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OwnerSnapshot> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers reached; zero when nobody listens.
    pub fn publish(&self, snapshot: OwnerSnapshot) -> usize {
        self.sender.send(snapshot).unwrap_or(0)
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
