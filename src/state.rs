//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay estado mutable en proceso: todo vive
//! en el store, aquí sólo están los repositorios que lo acceden.

use std::sync::Arc;

use crate::database::DatabaseConnection;
use crate::repositories::{
    MongoUserRepository, MongoVehicleRepository, UserRepository, VehicleRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, vehicles: Arc<dyn VehicleRepository>) -> Self {
        Self { users, vehicles }
    }

    /// Construir el estado con repositorios respaldados por MongoDB
    pub fn from_connection(connection: &DatabaseConnection) -> Self {
        Self::new(
            Arc::new(MongoUserRepository::new(connection.users())),
            Arc::new(MongoVehicleRepository::new(connection.vehicles())),
        )
    }
}
