//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y los valores por defecto de sus
//! campos de salud (estado, sensores, predicciones y resumen).

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Nombre de la colección de vehículos
pub const VEHICLE_COLLECTION: &str = "vehicles";

pub const DEFAULT_STATUS: &str = "OK";
pub const DEFAULT_RECOMMENDED_ACTION: &str = "System Healthy";
pub const DEFAULT_SUMMARY: &str = "Vehicle is operating within normal parameters.";

/// Lecturas "sanas" de los diez sensores
pub const DEFAULT_SENSOR_READINGS: [(&str, f64); 10] = [
    ("brake_pad_wear_mm", 10.0),
    ("battery_voltage_v", 12.6),
    ("engine_temp_c", 90.0),
    ("oil_pressure_psi", 35.0),
    ("tire_pressure_fl_psi", 32.0),
    ("tire_pressure_fr_psi", 32.0),
    ("vibration_level_hz", 2.0),
    ("coolant_level_pct", 100.0),
    ("o2_sensor_voltage_v", 0.9),
    ("transmission_temp_c", 80.0),
];

/// Lecturas de sensores indexadas por nombre
pub type SensorReadings = BTreeMap<String, f64>;

/// Registro de predicción libre (component, issue, prediction{days_left, certainty})
pub type PredictionRecord = Map<String, Value>;

/// Vehicle - mapea exactamente a los documentos de la colección `vehicles`
///
/// Los campos opcionales se rellenan con funciones, así que cada registro
/// recibe su propia copia de los valores por defecto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: String,
    pub user_id: String,
    pub model: String,
    pub fuel_type: String,

    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub is_service_needed: bool,
    #[serde(default = "default_recommended_action")]
    pub recommended_action: String,

    #[serde(default = "default_sensors")]
    pub sensors: SensorReadings,

    #[serde(default = "default_predictions")]
    pub predictions: Vec<PredictionRecord>,

    #[serde(default = "default_summary")]
    pub summary: String,
}

impl Vehicle {
    /// Crear un vehículo con todos los campos de salud por defecto
    pub fn new(vehicle_id: String, user_id: String, model: String, fuel_type: String) -> Self {
        Self {
            vehicle_id,
            user_id,
            model,
            fuel_type,
            status: default_status(),
            is_service_needed: false,
            recommended_action: default_recommended_action(),
            sensors: default_sensors(),
            predictions: default_predictions(),
            summary: default_summary(),
        }
    }
}

pub fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

pub fn default_recommended_action() -> String {
    DEFAULT_RECOMMENDED_ACTION.to_string()
}

pub fn default_summary() -> String {
    DEFAULT_SUMMARY.to_string()
}

pub fn default_sensors() -> SensorReadings {
    DEFAULT_SENSOR_READINGS
        .iter()
        .map(|(name, reading)| (name.to_string(), *reading))
        .collect()
}

/// Predicción de ejemplo para la UI
pub fn default_predictions() -> Vec<PredictionRecord> {
    let placeholder = json!({
        "component": "Suspension",
        "issue": "Minor Wear",
        "prediction": { "days_left": 45, "certainty": 65 }
    });

    match placeholder {
        Value::Object(record) => vec![record],
        _ => Vec::new(),
    }
}
