use std::sync::Arc;
use tracing::info;

use crate::dto::vehicle_dto::AddVehicleResponse;
use crate::models::Vehicle;
use crate::repositories::{UserRepository, VehicleRepository};
use crate::utils::errors::{duplicate_key_error, not_found_error, AppError};

pub struct VehicleController {
    users: Arc<dyn UserRepository>,
    vehicles: Arc<dyn VehicleRepository>,
}

impl VehicleController {
    pub fn new(users: Arc<dyn UserRepository>, vehicles: Arc<dyn VehicleRepository>) -> Self {
        Self { users, vehicles }
    }

    /// Añadir un vehículo a la flota de un usuario existente.
    ///
    /// Las comprobaciones y el insert no son atómicos: dos altas simultáneas
    /// del mismo `vehicle_id` pueden pasar ambas la comprobación.
    pub async fn add(&self, vehicle: Vehicle) -> Result<AddVehicleResponse, AppError> {
        // Verificar que el usuario existe
        if self.users.find_by_user_id(&vehicle.user_id).await?.is_none() {
            return Err(not_found_error("User not found! Create user first."));
        }

        // Verificar que el vehicle_id no esté registrado (para cualquier usuario)
        if self
            .vehicles
            .find_by_vehicle_id(&vehicle.vehicle_id)
            .await?
            .is_some()
        {
            return Err(duplicate_key_error("Vehicle ID already registered"));
        }

        let stored = self.vehicles.insert(vehicle).await?;
        info!(
            "🚗 Vehículo {} añadido a la flota de {}",
            stored.record.vehicle_id, stored.record.user_id
        );

        Ok(AddVehicleResponse::added(stored))
    }
}
