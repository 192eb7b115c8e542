use async_trait::async_trait;
use bson::doc;
use mongodb::Collection;
use tracing::debug;

use super::inserted_object_id;
use crate::models::{StoredDocument, User};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Buscar un usuario por su clave natural
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<StoredDocument<User>>>;

    /// Insertar un usuario y devolverlo con su `_id`
    async fn insert(&self, user: User) -> AppResult<StoredDocument<User>>;
}

pub struct MongoUserRepository {
    collection: Collection<StoredDocument<User>>,
}

impl MongoUserRepository {
    pub fn new(collection: Collection<StoredDocument<User>>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<StoredDocument<User>>> {
        let user = self
            .collection
            .find_one(doc! { "user_id": user_id })
            .await?;

        Ok(user)
    }

    async fn insert(&self, user: User) -> AppResult<StoredDocument<User>> {
        let result = self
            .collection
            .clone_with_type::<User>()
            .insert_one(&user)
            .await?;

        let id = inserted_object_id(result.inserted_id)?;
        debug!("💾 Usuario '{}' insertado con _id {}", user.user_id, id);

        Ok(StoredDocument::new(id, user))
    }
}
