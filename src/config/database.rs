//! Configuración de base de datos
//!
//! Este módulo maneja la configuración de la conexión a MongoDB.

use super::ConfigError;

/// Base de datos donde viven las colecciones `users` y `vehicles`
pub const DATABASE_NAME: &str = "techathon_db";

/// Nombre con el que el cliente se identifica ante el servidor
pub const APP_NAME: &str = "fleet-dashboard";

/// Configuración de la base de datos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database_name: DATABASE_NAME.to_string(),
        }
    }

    /// Leer `MONGO_URL` desde una función de lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("MONGO_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingVar("MONGO_URL"))?;

        Ok(Self::new(url))
    }
}
