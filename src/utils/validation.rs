//! Utilidades de validación
//!
//! Valida los bodies JSON sin tipar contra las formas de User y Vehicle
//! antes de tocar la persistencia. Todos los problemas de un mismo body se
//! acumulan en un único `ValidationErrors`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

use crate::models::{User, Vehicle};
use crate::utils::errors::{AppError, AppResult};

/// Tipos primitivos que puede exigir un campo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Bool,
    NumberMap,
    ObjectList,
}

impl FieldKind {
    fn name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Bool => "boolean",
            FieldKind::NumberMap => "object of numbers",
            FieldKind::ObjectList => "array of objects",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Bool => value.is_boolean(),
            FieldKind::NumberMap => value
                .as_object()
                .is_some_and(|map| map.values().all(Value::is_number)),
            FieldKind::ObjectList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_object)),
        }
    }
}

/// Validador de un body JSON campo a campo
pub struct BodyValidator<'a> {
    body: Option<&'a Map<String, Value>>,
    errors: ValidationErrors,
}

impl<'a> BodyValidator<'a> {
    pub fn new(body: &'a Value) -> Self {
        let mut errors = ValidationErrors::new();
        let body = body.as_object();

        if body.is_none() {
            let mut error = ValidationError::new("type");
            error.message = Some(Cow::from("request body must be a JSON object"));
            error.add_param(Cow::from("expected"), &"object");
            errors.add("body", error);
        }

        Self { body, errors }
    }

    /// Campo obligatorio de un tipo concreto
    pub fn required(&mut self, field: &'static str, kind: FieldKind) -> &mut Self {
        let Some(body) = self.body else {
            return self;
        };

        match body.get(field) {
            None => {
                let mut error = ValidationError::new("required");
                error.message = Some(Cow::from("field required"));
                self.errors.add(field, error);
            }
            Some(value) => self.check_kind(field, value, kind),
        }
        self
    }

    /// Campo opcional: si aparece debe tener el tipo indicado (null no vale)
    pub fn optional(&mut self, field: &'static str, kind: FieldKind) -> &mut Self {
        if let Some(value) = self.body.and_then(|body| body.get(field)) {
            self.check_kind(field, value, kind);
        }
        self
    }

    fn check_kind(&mut self, field: &'static str, value: &Value, kind: FieldKind) {
        if kind.matches(value) {
            return;
        }

        let mut error = ValidationError::new("type");
        error.message = Some(Cow::from(format!("value is not a valid {}", kind.name())));
        error.add_param(Cow::from("expected"), &kind.name());
        self.errors.add(field, error);
    }

    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::replace(&mut self.errors, ValidationErrors::new()))
        }
    }
}

/// Convertir un body ya validado al registro tipado, aplicando defaults
fn into_record<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    serde_json::from_value(body).map_err(|e| AppError::InvalidBody(e.to_string()))
}

/// Validar el body de `/create-user`
pub fn parse_user(body: Value) -> AppResult<User> {
    BodyValidator::new(&body)
        .required("user_id", FieldKind::String)
        .required("name", FieldKind::String)
        .required("email", FieldKind::String)
        .required("phone", FieldKind::String)
        .finish()?;

    into_record(body)
}

/// Validar el body de `/add-vehicle`
pub fn parse_vehicle(body: Value) -> AppResult<Vehicle> {
    BodyValidator::new(&body)
        .required("vehicle_id", FieldKind::String)
        .required("user_id", FieldKind::String)
        .required("model", FieldKind::String)
        .required("fuel_type", FieldKind::String)
        .optional("status", FieldKind::String)
        .optional("is_service_needed", FieldKind::Bool)
        .optional("recommended_action", FieldKind::String)
        .optional("sensors", FieldKind::NumberMap)
        .optional("predictions", FieldKind::ObjectList)
        .optional("summary", FieldKind::String)
        .finish()?;

    into_record(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::{DEFAULT_STATUS, DEFAULT_SUMMARY};
    use serde_json::json;

    fn field_codes(error: AppError) -> Vec<(String, String)> {
        let errors = match error {
            AppError::Validation(errors) => errors,
            other => panic!("expected validation error, got {other:?}"),
        };
        let mut codes: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, list)| {
                list.iter()
                    .map(|e| (field.to_string(), e.code.to_string()))
                    .collect::<Vec<_>>()
            })
            .collect();
        codes.sort();
        codes
    }

    #[test]
    fn test_parse_user_accepts_complete_body() {
        let user = parse_user(json!({
            "user_id": "u1",
            "name": "A",
            "email": "a@x.com",
            "phone": "1",
            "ignored": true
        }))
        .unwrap();

        assert_eq!(user.user_id, "u1");
        assert_eq!(user.phone, "1");
    }

    #[test]
    fn test_parse_user_reports_every_bad_field() {
        let error = parse_user(json!({ "user_id": 7, "name": "A" })).unwrap_err();

        assert_eq!(
            field_codes(error),
            vec![
                ("email".to_string(), "required".to_string()),
                ("phone".to_string(), "required".to_string()),
                ("user_id".to_string(), "type".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let error = parse_user(json!(["u1"])).unwrap_err();
        assert_eq!(field_codes(error), vec![("body".to_string(), "type".to_string())]);
    }

    #[test]
    fn test_parse_vehicle_applies_defaults() {
        let vehicle = parse_vehicle(json!({
            "vehicle_id": "v1",
            "user_id": "u1",
            "model": "X",
            "fuel_type": "Petrol"
        }))
        .unwrap();

        assert_eq!(vehicle.status, DEFAULT_STATUS);
        assert!(!vehicle.is_service_needed);
        assert_eq!(vehicle.summary, DEFAULT_SUMMARY);
        assert_eq!(vehicle.sensors["brake_pad_wear_mm"], 10.0);
        assert_eq!(vehicle.predictions.len(), 1);
    }

    #[test]
    fn test_parse_vehicle_rejects_wrong_optional_types() {
        let error = parse_vehicle(json!({
            "vehicle_id": "v1",
            "user_id": "u1",
            "model": "X",
            "fuel_type": "Petrol",
            "status": null,
            "is_service_needed": "yes",
            "sensors": { "engine_temp_c": "hot" },
            "predictions": [1, 2]
        }))
        .unwrap_err();

        assert_eq!(
            field_codes(error),
            vec![
                ("is_service_needed".to_string(), "type".to_string()),
                ("predictions".to_string(), "type".to_string()),
                ("sensors".to_string(), "type".to_string()),
                ("status".to_string(), "type".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_vehicle_keeps_supplied_values() {
        let vehicle = parse_vehicle(json!({
            "vehicle_id": "v1",
            "user_id": "u1",
            "model": "X",
            "fuel_type": "EV",
            "status": "ALERT",
            "is_service_needed": true,
            "predictions": []
        }))
        .unwrap();

        assert_eq!(vehicle.status, "ALERT");
        assert!(vehicle.is_service_needed);
        assert!(vehicle.predictions.is_empty());
    }
}
