//! Repositorios
//!
//! Acceso a las colecciones `users` y `vehicles`. Los controladores
//! dependen de los traits, no de MongoDB.

pub mod user_repository;
pub mod vehicle_repository;

pub use user_repository::{MongoUserRepository, UserRepository};
pub use vehicle_repository::{MongoVehicleRepository, VehicleRepository};

use bson::{oid::ObjectId, Bson};

use crate::utils::errors::{internal_error, AppResult};

/// Extraer el ObjectId asignado por el store en un insert
pub(crate) fn inserted_object_id(inserted_id: Bson) -> AppResult<ObjectId> {
    inserted_id
        .as_object_id()
        .ok_or_else(|| internal_error("Inserted document has no ObjectId"))
}
