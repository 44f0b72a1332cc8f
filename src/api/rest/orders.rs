use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::engine::views::{filter_orders, open_count, StatusFilter};
use crate::error::AppError;
use crate::models::event::OrderEvent;
use crate::models::order::OrderRecord;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders/pending", get(list_pending))
        .route("/orders/active", get(list_active))
        .route("/orders/:id/accept", post(accept_order))
        .route("/orders/:id/deliver", post(deliver_order))
        .route("/orders/:id/reject", post(reject_order))
}

#[derive(Deserialize)]
pub struct ActiveQuery {
    #[serde(default)]
    pub status: StatusFilter,
}

#[derive(Serialize)]
pub struct ActiveOrdersResponse {
    pub orders: Vec<OrderRecord>,
    pub open: usize,
}

#[derive(Deserialize)]
pub struct AcceptRequest {
    pub driver_id: Uuid,
}

/// `applied` is false when the operation found nothing to act on.
#[derive(Serialize)]
pub struct TransitionResponse {
    pub applied: bool,
    pub order: Option<OrderRecord>,
}

impl From<Option<OrderEvent>> for TransitionResponse {
    fn from(event: Option<OrderEvent>) -> Self {
        Self {
            applied: event.is_some(),
            order: event.map(|event| event.order),
        }
    }
}

async fn list_pending(State(state): State<Arc<AppState>>) -> Json<Vec<OrderRecord>> {
    let store = state.orders.read().await;
    Json(store.pending_orders().to_vec())
}

async fn list_active(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ActiveQuery>,
) -> Json<ActiveOrdersResponse> {
    let store = state.orders.read().await;
    let orders = filter_orders(store.active_orders(), query.status);

    Json(ActiveOrdersResponse {
        open: open_count(&orders),
        orders,
    })
}

async fn accept_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(payload): Json<AcceptRequest>,
) -> Result<Json<TransitionResponse>, AppError> {
    let is_online = state
        .drivers
        .get(&payload.driver_id)
        .map(|driver| driver.is_online)
        .ok_or_else(|| {
            AppError::NotFound(format!("driver {} not found", payload.driver_id))
        })?;

    if !is_online {
        return Err(AppError::Conflict(
            "please go online to accept gigs".to_string(),
        ));
    }

    let mut store = state.orders.write().await;
    let pending = store.find_pending(id).cloned();
    let event = pending.and_then(|order| store.accept_order(&order));
    state.publish(&store, event.as_ref());

    if event.is_some() {
        info!(order_id = id, driver_id = %payload.driver_id, "order accepted");
    } else {
        debug!(order_id = id, "accept ignored: order not pending");
    }

    Ok(Json(event.into()))
}

async fn deliver_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Json<TransitionResponse> {
    let mut store = state.orders.write().await;
    let event = store.mark_delivered(id);
    state.publish(&store, event.as_ref());

    if event.is_some() {
        info!(order_id = id, "order delivered");
    } else {
        debug!(order_id = id, "deliver ignored: no open active order");
    }

    Json(event.into())
}

async fn reject_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Json<TransitionResponse> {
    let mut store = state.orders.write().await;
    let event = store.reject_order(id);
    state.publish(&store, event.as_ref());

    if event.is_some() {
        info!(order_id = id, "order rejected");
    } else {
        debug!(order_id = id, "reject ignored: order not pending");
    }

    Json(event.into())
}
