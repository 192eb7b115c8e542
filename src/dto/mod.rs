//! DTOs de respuesta de la API

pub mod dashboard_dto;
pub mod user_dto;
pub mod vehicle_dto;
