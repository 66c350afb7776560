use crate::error::AppError;
use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client as MongoClient, Collection, Database,
};

const RECORDS_COLLECTION: &str = "test_collection";

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let mut client_options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::DatabaseError(e.into())
        })?;
        client_options.app_name = Some("tracker-service".to_string());

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::DatabaseError(e.into())
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Connected to MongoDB");
        Ok(Self { client, db })
    }

    /// Liveness probe: a ping command against the configured database.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }, None).await.map_err(|e| {
            tracing::error!("MongoDB ping failed: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    pub fn records(&self) -> Collection<Document> {
        self.db.collection(RECORDS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
