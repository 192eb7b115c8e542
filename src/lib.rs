//! Fleet Dashboard
//!
//! Backend mínimo para registrar usuarios y vehículos y consultar el
//! dashboard de flota de cada usuario, respaldado por MongoDB.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
