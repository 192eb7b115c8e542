use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use serde_json::Value;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::AddVehicleResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::parse_vehicle;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new().route("/add-vehicle", post(add_vehicle))
}

async fn add_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AddVehicleResponse>, AppError> {
    let Json(body) = payload?;
    let vehicle = parse_vehicle(body)?;

    let controller = VehicleController::new(state.users.clone(), state.vehicles.clone());
    let response = controller.add(vehicle).await?;
    Ok(Json(response))
}
