use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

use crate::engine::lifecycle::OrderLifecycleStore;

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub order_transitions_total: IntCounterVec,
    pub pending_orders: IntGauge,
    pub active_orders: IntGauge,
    pub drivers_online: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let order_transitions_total = IntCounterVec::new(
            Opts::new(
                "order_transitions_total",
                "Order lifecycle operations by resulting transition",
            ),
            &["transition"],
        )
        .expect("valid order_transitions_total metric");

        let pending_orders = IntGauge::new("pending_orders", "Orders awaiting acceptance")
            .expect("valid pending_orders metric");

        let active_orders = IntGauge::new(
            "active_orders",
            "Accepted orders, in transit or delivered",
        )
        .expect("valid active_orders metric");

        let drivers_online = IntGauge::new("drivers_online", "Drivers currently online")
            .expect("valid drivers_online metric");

        registry
            .register(Box::new(order_transitions_total.clone()))
            .expect("register order_transitions_total");
        registry
            .register(Box::new(pending_orders.clone()))
            .expect("register pending_orders");
        registry
            .register(Box::new(active_orders.clone()))
            .expect("register active_orders");
        registry
            .register(Box::new(drivers_online.clone()))
            .expect("register drivers_online");

        Self {
            registry,
            order_transitions_total,
            pending_orders,
            active_orders,
            drivers_online,
        }
    }

    pub fn record_transition(&self, transition: &str) {
        self.order_transitions_total
            .with_label_values(&[transition])
            .inc();
    }

    pub fn observe_store(&self, store: &OrderLifecycleStore) {
        self.pending_orders.set(store.pending_orders().len() as i64);
        self.active_orders.set(store.active_orders().len() as i64);
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
