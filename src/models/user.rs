//! Modelo de User
//!
//! Propietario de una flota. Se identifica por su clave natural `user_id`.

use serde::{Deserialize, Serialize};

/// Nombre de la colección de usuarios
pub const USER_COLLECTION: &str = "users";

/// User - mapea exactamente a los documentos de la colección `users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}
