//! Modelos del sistema
//!
//! Este módulo contiene los registros que se persisten en MongoDB
//! (colecciones `users` y `vehicles`) y el envoltorio que añade el `_id`
//! generado por el store al leerlos.

pub mod user;
pub mod vehicle;

use bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};

pub use user::User;
pub use vehicle::Vehicle;

/// Documento leído del store: el registro más su `_id` interno.
///
/// Al serializarse a JSON el `_id` se emite como string hexadecimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument<T> {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub record: T,
}

impl<T> StoredDocument<T> {
    pub fn new(id: ObjectId, record: T) -> Self {
        Self { id, record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stored_document_renders_id_as_string() {
        let id = ObjectId::new();
        let stored = StoredDocument::new(
            id,
            User {
                user_id: "u1".to_string(),
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                phone: "1".to_string(),
            },
        );

        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(
            value,
            json!({
                "_id": id.to_hex(),
                "user_id": "u1",
                "name": "A",
                "email": "a@x.com",
                "phone": "1",
            })
        );
    }

    #[test]
    fn test_stored_document_reads_from_bson() {
        let id = ObjectId::new();
        let document = bson::doc! {
            "_id": id,
            "user_id": "u1",
            "name": "A",
            "email": "a@x.com",
            "phone": "1",
        };

        let stored: StoredDocument<User> = bson::from_document(document).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.record.user_id, "u1");
    }
}
