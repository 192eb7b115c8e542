use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use serde_json::Value;

use crate::controllers::user_controller::UserController;
use crate::dto::user_dto::CreateUserResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::parse_user;

pub fn create_user_router() -> Router<AppState> {
    Router::new().route("/create-user", post(create_user))
}

async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let Json(body) = payload?;
    let user = parse_user(body)?;

    let controller = UserController::new(state.users.clone());
    let response = controller.create(user).await?;
    Ok(Json(response))
}
