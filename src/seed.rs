use chrono::{DateTime, TimeZone, Utc};

use crate::models::order::{OrderRecord, OrderStatus};
use crate::models::ride::{RideRecord, RideStatus};

#[allow(clippy::too_many_arguments)]
fn pending(
    id: u64,
    order_number: &str,
    merchant: &str,
    pickup_location: &str,
    delivery_location: &str,
    customer: (&str, &str),
    trip: (&str, &str, &str),
    items: &[&str],
    times: (&str, &str),
    notes: &str,
) -> OrderRecord {
    let (customer_name, customer_phone) = customer;
    let (distance, eta, amount) = trip;
    let (created_at, estimated_delivery) = times;

    OrderRecord {
        id,
        order_number: order_number.to_string(),
        merchant: merchant.to_string(),
        pickup_location: pickup_location.to_string(),
        delivery_location: delivery_location.to_string(),
        customer_name: customer_name.to_string(),
        customer_phone: customer_phone.to_string(),
        distance: distance.to_string(),
        eta: eta.to_string(),
        amount: amount.to_string(),
        items: items.iter().map(|item| item.to_string()).collect(),
        notes: Some(notes.to_string()),
        status: OrderStatus::Pending,
        progress: 0,
        created_at: created_at.to_string(),
        estimated_delivery: estimated_delivery.to_string(),
    }
}

pub fn demo_pending_orders() -> Vec<OrderRecord> {
    vec![
        pending(
            1,
            "#ORD-2024-001",
            "Pizza Palace",
            "Pizza Palace, Downtown",
            "123 Main Street, Apt 5B",
            ("Alice Johnson", "+255 654 321 987"),
            ("3.2 km", "12 min", "TSh 45,000"),
            &["Large Margherita Pizza", "Caesar Salad", "Coca Cola"],
            ("31 Jan, 14:30", "14:45"),
            "Ring doorbell twice, no onions on salad",
        ),
        pending(
            2,
            "#ORD-2024-002",
            "Burger House",
            "Burger House, Mall",
            "456 Oak Avenue, Suite 200",
            ("Bob Smith", "+255 654 321 988"),
            ("2.8 km", "10 min", "TSh 32,500"),
            &["2x Cheese Burger", "Fries", "Shake"],
            ("31 Jan, 14:35", "15:05"),
            "Customer waiting at reception",
        ),
        pending(
            3,
            "#ORD-2024-004",
            "Chicken Express",
            "Chicken Express, North",
            "321 Pine Road, Tower 3",
            ("David Brown", "+255 654 321 990"),
            ("4.1 km", "14 min", "TSh 28,500"),
            &["Fried Chicken Box", "Coleslaw", "Biscuits"],
            ("31 Jan, 14:20", "14:50"),
            "Handle with care - hot food",
        ),
    ]
}

fn at(day: u32, month: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn ride(
    id: u64,
    completed_at: DateTime<Utc>,
    from: &str,
    to: &str,
    amount: &str,
    status: RideStatus,
    rating: u8,
    passenger: &str,
    distance: &str,
    duration: &str,
) -> RideRecord {
    RideRecord {
        id,
        completed_at,
        from: from.to_string(),
        to: to.to_string(),
        amount: amount.to_string(),
        status,
        rating,
        passenger: passenger.to_string(),
        distance: distance.to_string(),
        duration: duration.to_string(),
    }
}

pub fn demo_ride_history() -> Vec<RideRecord> {
    vec![
        ride(
            1,
            at(31, 1, 17, 55),
            "Karibu na Wilaya ya Temeke",
            "Wilaya ya Temeke, Tanzania",
            "TSh 3,000.00",
            RideStatus::Completed,
            5,
            "John Doe",
            "12 km",
            "18 min",
        ),
        ride(
            2,
            at(31, 1, 17, 53),
            "Karibu na Mbaruku Street",
            "Dar es Salaam, Tanzania",
            "TSh 4,500.00",
            RideStatus::Cancelled,
            0,
            "Cancelled",
            "8 km",
            "12 min",
        ),
        ride(
            3,
            at(31, 1, 15, 26),
            "Karibu na Ilala",
            "Ilala, Tanzania",
            "TSh 4,500.00",
            RideStatus::Completed,
            4,
            "Jane Smith",
            "5 km",
            "8 min",
        ),
        ride(
            4,
            at(30, 1, 21, 8),
            "Karibu na Nakawale",
            "Dar es Salaam, Tanzania",
            "TSh 13,000.00",
            RideStatus::Completed,
            5,
            "Ahmed Hassan",
            "15 km",
            "22 min",
        ),
    ]
}
