use serde::Serialize;

use crate::models::{StoredDocument, Vehicle};

// Response de `/add-vehicle`
#[derive(Debug, Serialize)]
pub struct AddVehicleResponse {
    pub message: String,
    pub vehicle: StoredDocument<Vehicle>,
}

impl AddVehicleResponse {
    pub fn added(vehicle: StoredDocument<Vehicle>) -> Self {
        Self {
            message: "Vehicle Added to Fleet".to_string(),
            vehicle,
        }
    }
}
