use std::sync::Arc;
use tracing::info;

use crate::dto::user_dto::CreateUserResponse;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::utils::errors::{duplicate_key_error, AppError};

pub struct UserController {
    users: Arc<dyn UserRepository>,
}

impl UserController {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn create(&self, user: User) -> Result<CreateUserResponse, AppError> {
        // Verificar que el user_id no exista
        if self.users.find_by_user_id(&user.user_id).await?.is_some() {
            return Err(duplicate_key_error("User ID already exists"));
        }

        let stored = self.users.insert(user).await?;
        info!("👤 Usuario creado: {}", stored.record.user_id);

        Ok(CreateUserResponse::created(stored))
    }
}
