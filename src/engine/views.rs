use serde::{Deserialize, Serialize};

use crate::models::order::{OrderRecord, OrderStatus};
use crate::models::ride::{RideRecord, RideStatus};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
}

impl StatusFilter {
    fn matches(self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == OrderStatus::Pending,
            StatusFilter::InTransit => status == OrderStatus::InTransit,
            StatusFilter::Delivered => status == OrderStatus::Delivered,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RideFilter {
    #[default]
    All,
    Completed,
    Cancelled,
}

impl RideFilter {
    fn matches(self, status: RideStatus) -> bool {
        match self {
            RideFilter::All => true,
            RideFilter::Completed => status == RideStatus::Completed,
            RideFilter::Cancelled => status == RideStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistorySummary {
    pub completed: usize,
    pub cancelled: usize,
    /// Sum of every ride's rating over the completed count, one decimal.
    pub average_rating: f64,
    pub shown: usize,
}

pub fn filter_orders(orders: &[OrderRecord], filter: StatusFilter) -> Vec<OrderRecord> {
    orders
        .iter()
        .filter(|order| filter.matches(order.status))
        .cloned()
        .collect()
}

pub fn open_count(orders: &[OrderRecord]) -> usize {
    orders.iter().filter(|order| order.status.is_open()).count()
}

pub fn filter_rides(rides: &[RideRecord], filter: RideFilter) -> Vec<RideRecord> {
    rides
        .iter()
        .filter(|ride| filter.matches(ride.status))
        .cloned()
        .collect()
}

pub fn sort_rides(mut rides: Vec<RideRecord>, order: SortOrder) -> Vec<RideRecord> {
    match order {
        SortOrder::Newest => rides.sort_by(|a, b| b.completed_at.cmp(&a.completed_at)),
        SortOrder::Oldest => rides.sort_by(|a, b| a.completed_at.cmp(&b.completed_at)),
    }
    rides
}

pub fn count_rides(rides: &[RideRecord], status: RideStatus) -> usize {
    rides.iter().filter(|ride| ride.status == status).count()
}

pub fn average_rating(rides: &[RideRecord]) -> f64 {
    let completed = count_rides(rides, RideStatus::Completed);
    if completed == 0 {
        return 0.0;
    }

    let total: u32 = rides.iter().map(|ride| u32::from(ride.rating)).sum();
    let average = f64::from(total) / completed as f64;
    (average * 10.0).round() / 10.0
}

pub fn history_summary(all: &[RideRecord], shown: &[RideRecord]) -> HistorySummary {
    HistorySummary {
        completed: count_rides(all, RideStatus::Completed),
        cancelled: count_rides(all, RideStatus::Cancelled),
        average_rating: average_rating(all),
        shown: shown.len(),
    }
}
