//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    detail: String,
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<serde_json::Value>,
}

impl AppError {
    /// Código HTTP asociado a cada tipo de error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DuplicateKey(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error_response = match self {
            AppError::Database(e) => {
                error!("❌ Error de base de datos: {}", e);
                ErrorResponse {
                    error: "Database Error".to_string(),
                    detail: "An error occurred while accessing the database".to_string(),
                    code: "DB_ERROR".to_string(),
                    fields: None,
                }
            }

            AppError::Validation(e) => {
                debug!("Validación fallida: {}", e);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    detail: "The provided data is invalid".to_string(),
                    code: "VALIDATION_ERROR".to_string(),
                    fields: Some(json!(e)),
                }
            }

            AppError::InvalidBody(msg) => {
                debug!("Body inválido: {}", msg);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    detail: msg,
                    code: "INVALID_BODY".to_string(),
                    fields: None,
                }
            }

            AppError::DuplicateKey(msg) => {
                debug!("Clave duplicada: {}", msg);
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    detail: msg,
                    code: "DUPLICATE_KEY".to_string(),
                    fields: None,
                }
            }

            AppError::NotFound(msg) => {
                debug!("Recurso no encontrado: {}", msg);
                ErrorResponse {
                    error: "Not Found".to_string(),
                    detail: msg,
                    code: "NOT_FOUND".to_string(),
                    fields: None,
                }
            }

            AppError::Internal(msg) => {
                error!("❌ Error interno: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    detail: "An unexpected error occurred".to_string(),
                    code: "INTERNAL_ERROR".to_string(),
                    fields: None,
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de clave natural duplicada
pub fn duplicate_key_error(message: &str) -> AppError {
    AppError::DuplicateKey(message.to_string())
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}
