use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
}

impl OrderStatus {
    /// Still needs driver action.
    pub fn is_open(self) -> bool {
        self != OrderStatus::Delivered
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    pub id: u64,
    pub order_number: String,
    pub merchant: String,
    pub pickup_location: String,
    pub delivery_location: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub distance: String,
    pub eta: String,
    pub amount: String,
    pub items: Vec<String>,
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub progress: u8,
    pub created_at: String,
    pub estimated_delivery: String,
}
