//! Configuración de conexión a MongoDB
//!
//! El cliente se crea explícitamente al arrancar, se comparte a través de
//! los repositorios y se cierra al apagar el servidor.

use bson::{doc, Document};
use mongodb::{
    error::Result as MongoResult,
    options::{ClientOptions, IndexOptions},
    Client, Collection, Database, IndexModel,
};
use tracing::info;

use crate::config::database::{DatabaseConfig, APP_NAME};
use crate::models::{
    user::USER_COLLECTION, vehicle::VEHICLE_COLLECTION, StoredDocument, User, Vehicle,
};

/// Conexión a MongoDB
#[derive(Clone)]
pub struct DatabaseConnection {
    client: Client,
    database: Database,
}

impl DatabaseConnection {
    /// Crear el cliente y verificar la conexión con un ping
    pub async fn connect(config: &DatabaseConfig) -> MongoResult<Self> {
        info!("🔌 Conectando a MongoDB en {}", mask_database_url(&config.url));

        let mut options = ClientOptions::parse(config.url.as_str()).await?;
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&config.database_name);

        database.run_command(doc! { "ping": 1 }).await?;
        info!("✅ Conectado a la base de datos '{}'", config.database_name);

        Ok(Self { client, database })
    }

    pub fn users(&self) -> Collection<StoredDocument<User>> {
        self.database.collection(USER_COLLECTION)
    }

    pub fn vehicles(&self) -> Collection<StoredDocument<Vehicle>> {
        self.database.collection(VEHICLE_COLLECTION)
    }

    /// Crear los índices de búsqueda por clave natural y por propietario.
    /// No son únicos: la unicidad sólo se comprueba antes de insertar.
    pub async fn ensure_indexes(&self) -> MongoResult<()> {
        self.users()
            .create_index(lookup_index("user_id", "user_id_lookup"))
            .await?;

        self.vehicles()
            .create_indexes([
                lookup_index("vehicle_id", "vehicle_id_lookup"),
                lookup_index("user_id", "owner_lookup"),
            ])
            .await?;

        info!("📇 Índices de búsqueda verificados");
        Ok(())
    }

    /// Cerrar el cliente esperando a que terminen las operaciones en curso
    pub async fn shutdown(self) {
        info!("🔌 Cerrando conexión a MongoDB");
        self.client.shutdown().await;
    }
}

fn lookup_index(field: &str, name: &str) -> IndexModel {
    let mut keys = Document::new();
    keys.insert(field, 1);

    IndexModel::builder()
        .keys(keys)
        .options(Some(IndexOptions::builder().name(name.to_string()).build()))
        .build()
}

/// Función helper para enmascarar las credenciales de la URL en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let (scheme, rest) = url.split_at(scheme_end + 3);

    match rest.rfind('@') {
        Some(at_pos) => format!("{}***:***@{}", scheme, &rest[at_pos + 1..]),
        None => url.to_string(),
    }
}
