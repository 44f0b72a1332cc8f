use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::order::OrderRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderEventKind {
    Accepted,
    Delivered,
    Rejected,
}

impl OrderEventKind {
    pub fn as_label(self) -> &'static str {
        match self {
            OrderEventKind::Accepted => "accepted",
            OrderEventKind::Delivered => "delivered",
            OrderEventKind::Rejected => "rejected",
        }
    }
}

/// Emitted once per state-changing store operation. `order` is the record
/// as it stands after the transition (the discarded record for rejects).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEvent {
    pub kind: OrderEventKind,
    pub order: OrderRecord,
    pub at: DateTime<Utc>,
}
