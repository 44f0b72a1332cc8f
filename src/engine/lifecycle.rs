use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::event::{OrderEvent, OrderEventKind};
use crate::models::order::{OrderRecord, OrderStatus};

pub const ACCEPTED_PROGRESS: u8 = 10;
pub const DELIVERED_PROGRESS: u8 = 100;

const DISPLAY_FORMAT: &str = "%-d %b, %H:%M";

/// Pending and active orders for a single driver.
///
/// A record lives in exactly one of the two lists and its id is unique
/// across both. The three transition methods are the only way to move or
/// change a record; each returns the resulting event, or `None` when the
/// call had nothing to act on.
#[derive(Debug, Default, Clone)]
pub struct OrderLifecycleStore {
    pending: Vec<OrderRecord>,
    active: Vec<OrderRecord>,
}

impl OrderLifecycleStore {
    /// Seeds the pending list. Later duplicates of an id are dropped and
    /// every record starts as `Pending` with zero progress.
    pub fn new(seed: Vec<OrderRecord>) -> Self {
        let mut seen = HashSet::new();
        let pending = seed
            .into_iter()
            .filter(|order| seen.insert(order.id))
            .map(|mut order| {
                order.status = OrderStatus::Pending;
                order.progress = 0;
                order
            })
            .collect();

        Self {
            pending,
            active: Vec::new(),
        }
    }

    pub fn pending_orders(&self) -> &[OrderRecord] {
        &self.pending
    }

    pub fn active_orders(&self) -> &[OrderRecord] {
        &self.active
    }

    pub fn find_pending(&self, id: u64) -> Option<&OrderRecord> {
        self.pending.iter().find(|order| order.id == id)
    }

    pub fn find_active(&self, id: u64) -> Option<&OrderRecord> {
        self.active.iter().find(|order| order.id == id)
    }

    pub fn accept_order(&mut self, order: &OrderRecord) -> Option<OrderEvent> {
        self.accept_order_at(order, Utc::now())
    }

    /// Moves `order` from pending to the end of the active list, stamping
    /// `created_at` with `now`. The stored copy is built from `order`, not
    /// from the pending entry. No-op when the id is no longer pending.
    pub fn accept_order_at(
        &mut self,
        order: &OrderRecord,
        now: DateTime<Utc>,
    ) -> Option<OrderEvent> {
        let position = self.pending.iter().position(|o| o.id == order.id)?;
        self.pending.remove(position);

        let mut accepted = order.clone();
        accepted.status = OrderStatus::InTransit;
        accepted.progress = ACCEPTED_PROGRESS;
        accepted.created_at = now.format(DISPLAY_FORMAT).to_string();
        self.active.push(accepted.clone());

        Some(OrderEvent {
            kind: OrderEventKind::Accepted,
            order: accepted,
            at: now,
        })
    }

    pub fn mark_delivered(&mut self, order_id: u64) -> Option<OrderEvent> {
        let order = self
            .active
            .iter_mut()
            .find(|o| o.id == order_id && o.status != OrderStatus::Delivered)?;

        order.status = OrderStatus::Delivered;
        order.progress = DELIVERED_PROGRESS;

        Some(OrderEvent {
            kind: OrderEventKind::Delivered,
            order: order.clone(),
            at: Utc::now(),
        })
    }

    pub fn reject_order(&mut self, order_id: u64) -> Option<OrderEvent> {
        let position = self.pending.iter().position(|o| o.id == order_id)?;
        let rejected = self.pending.remove(position);

        Some(OrderEvent {
            kind: OrderEventKind::Rejected,
            order: rejected,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{TimeZone, Utc};

    use super::{OrderLifecycleStore, ACCEPTED_PROGRESS, DELIVERED_PROGRESS};
    use crate::models::event::OrderEventKind;
    use crate::models::order::{OrderRecord, OrderStatus};

    fn order(id: u64) -> OrderRecord {
        OrderRecord {
            id,
            order_number: format!("#ORD-TEST-{id:03}"),
            merchant: "Test Kitchen".to_string(),
            pickup_location: "Test Kitchen, Downtown".to_string(),
            delivery_location: "1 Test Street".to_string(),
            customer_name: "Test Customer".to_string(),
            customer_phone: "+255 600 000 000".to_string(),
            distance: "1.0 km".to_string(),
            eta: "5 min".to_string(),
            amount: "TSh 10,000".to_string(),
            items: vec!["Soup".to_string()],
            notes: None,
            status: OrderStatus::Pending,
            progress: 0,
            created_at: "31 Jan, 14:30".to_string(),
            estimated_delivery: "14:45".to_string(),
        }
    }

    fn store(ids: &[u64]) -> OrderLifecycleStore {
        OrderLifecycleStore::new(ids.iter().copied().map(order).collect())
    }

    fn ids(orders: &[OrderRecord]) -> Vec<u64> {
        orders.iter().map(|o| o.id).collect()
    }

    fn assert_disjoint(store: &OrderLifecycleStore) {
        let pending: HashSet<u64> = ids(store.pending_orders()).into_iter().collect();
        let active: HashSet<u64> = ids(store.active_orders()).into_iter().collect();
        assert!(pending.is_disjoint(&active));
        assert_eq!(active.len(), store.active_orders().len());
    }

    #[test]
    fn seed_drops_duplicate_ids_and_resets_status() {
        let mut stale = order(1);
        stale.status = OrderStatus::Delivered;
        stale.progress = 100;
        let mut duplicate = order(1);
        duplicate.merchant = "Other".to_string();

        let store = OrderLifecycleStore::new(vec![stale, order(2), duplicate]);

        assert_eq!(ids(store.pending_orders()), vec![1, 2]);
        assert_eq!(store.pending_orders()[0].merchant, "Test Kitchen");
        assert!(store
            .pending_orders()
            .iter()
            .all(|o| o.status == OrderStatus::Pending && o.progress == 0));
    }

    #[test]
    fn accept_moves_order_to_active() {
        let mut store = store(&[1, 2]);
        let now = Utc.with_ymd_and_hms(2025, 1, 31, 14, 30, 0).unwrap();

        let event = store.accept_order_at(&order(1), now).unwrap();

        assert_eq!(event.kind, OrderEventKind::Accepted);
        assert_eq!(ids(store.pending_orders()), vec![2]);
        assert_eq!(ids(store.active_orders()), vec![1]);

        let accepted = &store.active_orders()[0];
        assert_eq!(accepted.status, OrderStatus::InTransit);
        assert_eq!(accepted.progress, ACCEPTED_PROGRESS);
        assert_eq!(accepted.created_at, "31 Jan, 14:30");
        assert_eq!(&event.order, accepted);
        assert_disjoint(&store);
    }

    #[test]
    fn accept_appends_in_acceptance_order() {
        let mut store = store(&[1, 2, 3]);

        store.accept_order(&order(3));
        store.accept_order(&order(1));

        assert_eq!(ids(store.active_orders()), vec![3, 1]);
        assert_eq!(ids(store.pending_orders()), vec![2]);
    }

    #[test]
    fn accepting_twice_keeps_a_single_active_entry() {
        let mut store = store(&[1]);

        assert!(store.accept_order(&order(1)).is_some());
        assert!(store.accept_order(&order(1)).is_none());

        assert_eq!(ids(store.active_orders()), vec![1]);
        assert!(store.pending_orders().is_empty());
    }

    #[test]
    fn accept_of_unknown_id_changes_nothing() {
        let mut store = store(&[1, 2]);
        let before = store.clone();

        assert!(store.accept_order(&order(42)).is_none());

        assert_eq!(store.pending_orders(), before.pending_orders());
        assert_eq!(store.active_orders(), before.active_orders());
    }

    #[test]
    fn mark_delivered_only_touches_the_target() {
        let mut store = store(&[1, 2, 3]);
        store.accept_order(&order(1));
        store.accept_order(&order(2));
        let untouched = store.find_active(2).cloned().unwrap();
        let pending_before = store.pending_orders().to_vec();

        let event = store.mark_delivered(1).unwrap();

        assert_eq!(event.kind, OrderEventKind::Delivered);
        let delivered = store.find_active(1).unwrap();
        assert_eq!(delivered.status, OrderStatus::Delivered);
        assert_eq!(delivered.progress, DELIVERED_PROGRESS);
        assert_eq!(store.find_active(2), Some(&untouched));
        assert_eq!(store.pending_orders(), pending_before.as_slice());
    }

    #[test]
    fn delivering_twice_is_a_noop() {
        let mut store = store(&[1]);
        store.accept_order(&order(1));

        assert!(store.mark_delivered(1).is_some());
        assert!(store.mark_delivered(1).is_none());
        assert_eq!(store.find_active(1).unwrap().progress, DELIVERED_PROGRESS);
    }

    #[test]
    fn mark_delivered_ignores_pending_and_unknown_ids() {
        let mut store = store(&[1, 2]);
        store.accept_order(&order(1));
        let before = store.clone();

        assert!(store.mark_delivered(999).is_none());
        assert!(store.mark_delivered(2).is_none());

        assert_eq!(store.pending_orders(), before.pending_orders());
        assert_eq!(store.active_orders(), before.active_orders());
    }

    #[test]
    fn reject_discards_the_order_for_good() {
        let mut store = store(&[1, 2]);
        store.accept_order(&order(1));
        let active_before = store.active_orders().to_vec();

        let event = store.reject_order(2).unwrap();

        assert_eq!(event.kind, OrderEventKind::Rejected);
        assert_eq!(event.order.id, 2);
        assert!(store.pending_orders().is_empty());
        assert_eq!(store.active_orders(), active_before.as_slice());

        assert!(store.accept_order(&order(2)).is_none());
        assert!(store.find_active(2).is_none());
        assert!(store.find_pending(2).is_none());
    }

    #[test]
    fn reject_does_not_remove_active_orders() {
        let mut store = store(&[1]);
        store.accept_order(&order(1));

        assert!(store.reject_order(1).is_none());
        assert_eq!(ids(store.active_orders()), vec![1]);
    }

    #[test]
    fn progress_never_decreases_over_a_lifetime() {
        let mut store = store(&[1]);
        let mut observed = vec![store.find_pending(1).unwrap().progress];

        store.accept_order(&order(1));
        observed.push(store.find_active(1).unwrap().progress);
        store.mark_delivered(1);
        observed.push(store.find_active(1).unwrap().progress);
        store.mark_delivered(1);
        observed.push(store.find_active(1).unwrap().progress);

        assert!(observed.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(observed, vec![0, 10, 100, 100]);
    }

    #[test]
    fn mixed_sequence_keeps_lists_disjoint() {
        let mut store = store(&[1, 2, 3, 4]);

        store.accept_order(&order(2));
        assert_disjoint(&store);
        store.reject_order(3);
        assert_disjoint(&store);
        store.accept_order(&order(2));
        assert_disjoint(&store);
        store.mark_delivered(2);
        store.accept_order(&order(4));
        assert_disjoint(&store);

        assert_eq!(ids(store.pending_orders()), vec![1]);
        assert_eq!(ids(store.active_orders()), vec![2, 4]);
        assert!(store
            .active_orders()
            .iter()
            .all(|o| o.status != OrderStatus::Pending));
    }
}
