//! Middleware de CORS
//!
//! Sin restricción de acceso en esta capa: se acepta cualquier origen,
//! método y header, con credenciales.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS.
///
/// Con credenciales no se pueden usar comodines, así que el origen, los
/// headers y el método de la petición se reflejan en la respuesta.
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
