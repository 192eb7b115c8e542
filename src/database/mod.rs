//! Módulo de base de datos
//!
//! Maneja la conexión y el ciclo de vida del cliente de MongoDB

pub mod connection;

pub use connection::DatabaseConnection;
