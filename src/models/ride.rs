use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RideStatus {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RideRecord {
    pub id: u64,
    pub completed_at: DateTime<Utc>,
    pub from: String,
    pub to: String,
    pub amount: String,
    pub status: RideStatus,
    pub rating: u8,
    pub passenger: String,
    pub distance: String,
    pub duration: String,
}
