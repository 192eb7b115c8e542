//! Controladores
//!
//! Secuencian comprobaciones de existencia/duplicados, persistencia y
//! forma de la respuesta. Reciben registros ya validados.

pub mod dashboard_controller;
pub mod user_controller;
pub mod vehicle_controller;
