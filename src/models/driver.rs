use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const NEW_DRIVER_RATING: f64 = 4.8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub rating: f64,
    pub is_online: bool,
    pub created_at: DateTime<Utc>,
}

impl Driver {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            rating: NEW_DRIVER_RATING,
            is_online: false,
            created_at: Utc::now(),
        }
    }
}
