//! Repositorios en memoria y helpers para probar el router sin MongoDB

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use bson::oid::ObjectId;
use serde_json::Value;
use tower::ServiceExt;

use fleet_dashboard::models::{StoredDocument, User, Vehicle};
use fleet_dashboard::repositories::{UserRepository, VehicleRepository};
use fleet_dashboard::utils::errors::{internal_error, AppResult};
use fleet_dashboard::{create_app, AppState};

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<StoredDocument<User>>>,
}

impl MemoryUserRepository {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<StoredDocument<User>>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.record.user_id == user_id).cloned())
    }

    async fn insert(&self, user: User) -> AppResult<StoredDocument<User>> {
        let stored = StoredDocument::new(ObjectId::new(), user);
        self.users.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

#[derive(Default)]
pub struct MemoryVehicleRepository {
    vehicles: Mutex<Vec<StoredDocument<Vehicle>>>,
}

impl MemoryVehicleRepository {
    pub fn len(&self) -> usize {
        self.vehicles.lock().unwrap().len()
    }

    pub fn snapshot(&self) -> Vec<StoredDocument<Vehicle>> {
        self.vehicles.lock().unwrap().clone()
    }
}

#[async_trait]
impl VehicleRepository for MemoryVehicleRepository {
    async fn find_by_vehicle_id(
        &self,
        vehicle_id: &str,
    ) -> AppResult<Option<StoredDocument<Vehicle>>> {
        let vehicles = self.vehicles.lock().unwrap();
        Ok(vehicles
            .iter()
            .find(|v| v.record.vehicle_id == vehicle_id)
            .cloned())
    }

    async fn find_by_owner(&self, user_id: &str) -> AppResult<Vec<StoredDocument<Vehicle>>> {
        let vehicles = self.vehicles.lock().unwrap();
        Ok(vehicles
            .iter()
            .filter(|v| v.record.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, vehicle: Vehicle) -> AppResult<StoredDocument<Vehicle>> {
        let stored = StoredDocument::new(ObjectId::new(), vehicle);
        self.vehicles.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

/// Repositorio que simula una caída del store
pub struct UnreachableStore;

#[async_trait]
impl UserRepository for UnreachableStore {
    async fn find_by_user_id(&self, _user_id: &str) -> AppResult<Option<StoredDocument<User>>> {
        Err(internal_error("server selection timeout"))
    }

    async fn insert(&self, _user: User) -> AppResult<StoredDocument<User>> {
        Err(internal_error("server selection timeout"))
    }
}

#[async_trait]
impl VehicleRepository for UnreachableStore {
    async fn find_by_vehicle_id(
        &self,
        _vehicle_id: &str,
    ) -> AppResult<Option<StoredDocument<Vehicle>>> {
        Err(internal_error("server selection timeout"))
    }

    async fn find_by_owner(&self, _user_id: &str) -> AppResult<Vec<StoredDocument<Vehicle>>> {
        Err(internal_error("server selection timeout"))
    }

    async fn insert(&self, _vehicle: Vehicle) -> AppResult<StoredDocument<Vehicle>> {
        Err(internal_error("server selection timeout"))
    }
}

pub struct TestApp {
    pub users: Arc<MemoryUserRepository>,
    pub vehicles: Arc<MemoryVehicleRepository>,
    state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(MemoryUserRepository::default());
        let vehicles = Arc::new(MemoryVehicleRepository::default());
        let state = AppState::new(users.clone(), vehicles.clone());

        Self {
            users,
            vehicles,
            state,
        }
    }

    pub fn failing() -> Self {
        let store = Arc::new(UnreachableStore);
        Self {
            users: Arc::new(MemoryUserRepository::default()),
            vehicles: Arc::new(MemoryVehicleRepository::default()),
            state: AppState::new(store.clone(), store),
        }
    }

    pub fn router(&self) -> Router {
        create_app(self.state.clone())
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }
}
