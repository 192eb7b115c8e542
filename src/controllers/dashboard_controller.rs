use std::sync::Arc;

use crate::dto::dashboard_dto::DashboardResponse;
use crate::repositories::{UserRepository, VehicleRepository};
use crate::utils::errors::{not_found_error, AppError};

pub struct DashboardController {
    users: Arc<dyn UserRepository>,
    vehicles: Arc<dyn VehicleRepository>,
}

impl DashboardController {
    pub fn new(users: Arc<dyn UserRepository>, vehicles: Arc<dyn VehicleRepository>) -> Self {
        Self { users, vehicles }
    }

    /// Perfil del usuario con su flota completa, sin paginar
    pub async fn get(&self, user_id: &str) -> Result<DashboardResponse, AppError> {
        let user = self
            .users
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| not_found_error("User not found"))?;

        let fleet = self.vehicles.find_by_owner(user_id).await?;

        Ok(DashboardResponse::new(user, fleet))
    }
}
