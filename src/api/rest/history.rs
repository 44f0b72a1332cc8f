use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::engine::views::{
    count_rides, filter_rides, history_summary, sort_rides, HistorySummary, RideFilter, SortOrder,
};
use crate::models::ride::{RideRecord, RideStatus};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/history", get(ride_history))
        .route("/earnings", get(earnings))
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub status: RideFilter,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub summary: HistorySummary,
    pub rides: Vec<RideRecord>,
}

#[derive(Deserialize)]
pub struct EarningsQuery {
    #[serde(default)]
    pub sort: SortOrder,
}

#[derive(Serialize)]
pub struct EarningsResponse {
    pub completed_rides: usize,
    pub cancelled_rides: usize,
    pub rides: Vec<RideRecord>,
}

async fn ride_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryResponse> {
    let rides = filter_rides(&state.rides, query.status);

    Json(HistoryResponse {
        summary: history_summary(&state.rides, &rides),
        rides,
    })
}

async fn earnings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EarningsQuery>,
) -> Json<EarningsResponse> {
    Json(EarningsResponse {
        completed_rides: count_rides(&state.rides, RideStatus::Completed),
        cancelled_rides: count_rides(&state.rides, RideStatus::Cancelled),
        rides: sort_rides(state.rides.clone(), query.sort),
    })
}
