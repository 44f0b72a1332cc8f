use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{patch, post};
use axum::Json;
use axum::Router;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::driver::Driver;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/drivers", post(register_driver).get(list_drivers))
        .route("/drivers/:id/online", patch(set_online))
}

#[derive(Deserialize)]
pub struct RegisterDriverRequest {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct OnlineRequest {
    pub is_online: bool,
}

async fn register_driver(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterDriverRequest>,
) -> Result<Json<Driver>, AppError> {
    let name = payload.name.trim();
    let email = payload.email.trim();

    if name.is_empty() || email.is_empty() {
        return Err(AppError::BadRequest(
            "name and email are required".to_string(),
        ));
    }

    let driver = Driver::new(name.to_string(), email.to_string());
    state.drivers.insert(driver.id, driver.clone());

    info!(driver_id = %driver.id, "driver registered");
    Ok(Json(driver))
}

async fn list_drivers(State(state): State<Arc<AppState>>) -> Json<Vec<Driver>> {
    let drivers = state
        .drivers
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    Json(drivers)
}

async fn set_online(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<OnlineRequest>,
) -> Result<Json<Driver>, AppError> {
    let driver = {
        let mut driver = state
            .drivers
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("driver {id} not found")))?;
        driver.is_online = payload.is_online;
        driver.clone()
    };

    state.refresh_online_gauge();
    info!(driver_id = %id, is_online = payload.is_online, "driver availability changed");

    Ok(Json(driver))
}
