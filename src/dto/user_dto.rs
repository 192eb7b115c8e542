use serde::Serialize;

use crate::models::{StoredDocument, User};

// Response de `/create-user`
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: StoredDocument<User>,
}

impl CreateUserResponse {
    pub fn created(user: StoredDocument<User>) -> Self {
        Self {
            message: "User Created".to_string(),
            user,
        }
    }
}
