use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::Collection;
use tracing::debug;

use super::inserted_object_id;
use crate::models::{StoredDocument, Vehicle};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Buscar un vehículo por su clave natural
    async fn find_by_vehicle_id(&self, vehicle_id: &str)
        -> AppResult<Option<StoredDocument<Vehicle>>>;

    /// Todos los vehículos de un usuario, en el orden natural del store
    async fn find_by_owner(&self, user_id: &str) -> AppResult<Vec<StoredDocument<Vehicle>>>;

    /// Insertar un vehículo y devolverlo con su `_id`
    async fn insert(&self, vehicle: Vehicle) -> AppResult<StoredDocument<Vehicle>>;
}

pub struct MongoVehicleRepository {
    collection: Collection<StoredDocument<Vehicle>>,
}

impl MongoVehicleRepository {
    pub fn new(collection: Collection<StoredDocument<Vehicle>>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl VehicleRepository for MongoVehicleRepository {
    async fn find_by_vehicle_id(
        &self,
        vehicle_id: &str,
    ) -> AppResult<Option<StoredDocument<Vehicle>>> {
        let vehicle = self
            .collection
            .find_one(doc! { "vehicle_id": vehicle_id })
            .await?;

        Ok(vehicle)
    }

    async fn find_by_owner(&self, user_id: &str) -> AppResult<Vec<StoredDocument<Vehicle>>> {
        let cursor = self.collection.find(doc! { "user_id": user_id }).await?;
        let vehicles: Vec<StoredDocument<Vehicle>> = cursor.try_collect().await?;

        debug!("🚗 {} vehículos encontrados para '{}'", vehicles.len(), user_id);
        Ok(vehicles)
    }

    async fn insert(&self, vehicle: Vehicle) -> AppResult<StoredDocument<Vehicle>> {
        let result = self
            .collection
            .clone_with_type::<Vehicle>()
            .insert_one(&vehicle)
            .await?;

        let id = inserted_object_id(result.inserted_id)?;
        debug!("💾 Vehículo '{}' insertado con _id {}", vehicle.vehicle_id, id);

        Ok(StoredDocument::new(id, vehicle))
    }
}
