use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::DashboardResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/get-dashboard/:user_id", get(get_dashboard))
}

async fn get_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<DashboardResponse>, AppError> {
    let controller = DashboardController::new(state.users.clone(), state.vehicles.clone());
    let response = controller.get(&user_id).await?;
    Ok(Json(response))
}
