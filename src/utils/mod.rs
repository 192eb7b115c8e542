//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores y la validación de bodies.

pub mod errors;
pub mod validation;
