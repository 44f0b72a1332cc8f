use dashmap::DashMap;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::engine::lifecycle::OrderLifecycleStore;
use crate::models::driver::Driver;
use crate::models::event::OrderEvent;
use crate::models::order::OrderRecord;
use crate::models::ride::RideRecord;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub orders: RwLock<OrderLifecycleStore>,
    pub drivers: DashMap<Uuid, Driver>,
    pub rides: Vec<RideRecord>,
    pub order_events_tx: broadcast::Sender<OrderEvent>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(
        pending: Vec<OrderRecord>,
        rides: Vec<RideRecord>,
        event_buffer_size: usize,
    ) -> Self {
        let (order_events_tx, _unused_rx) = broadcast::channel(event_buffer_size);
        let store = OrderLifecycleStore::new(pending);
        let metrics = Metrics::new();
        metrics.observe_store(&store);

        Self {
            orders: RwLock::new(store),
            drivers: DashMap::new(),
            rides,
            order_events_tx,
            metrics,
        }
    }

    /// Records the outcome of a store operation and fans the event out to
    /// subscribers. Runs after the in-memory mutation has been applied.
    pub fn publish(&self, store: &OrderLifecycleStore, event: Option<&OrderEvent>) {
        self.metrics.observe_store(store);

        match event {
            Some(event) => {
                self.metrics.record_transition(event.kind.as_label());
                let _ = self.order_events_tx.send(event.clone());
            }
            None => self.metrics.record_transition("noop"),
        }
    }

    pub fn refresh_online_gauge(&self) {
        let online = self
            .drivers
            .iter()
            .filter(|entry| entry.value().is_online)
            .count();
        self.metrics.drivers_online.set(online as i64);
    }
}
