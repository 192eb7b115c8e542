use serde::Serialize;

use crate::models::{StoredDocument, User, Vehicle};

// Response de `/get-dashboard/{user_id}`
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user_profile: StoredDocument<User>,
    pub my_fleet: Vec<StoredDocument<Vehicle>>,
    pub total_vehicles: usize,
}

impl DashboardResponse {
    pub fn new(user_profile: StoredDocument<User>, my_fleet: Vec<StoredDocument<Vehicle>>) -> Self {
        Self {
            total_vehicles: my_fleet.len(),
            user_profile,
            my_fleet,
        }
    }
}
