use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind},
    options::ClientOptions,
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

use super::store::TeacherStore;
use crate::models::{TeacherDocument, TeacherId, TeacherPatch};

pub const COLLECTION: &str = "teachers";

#[derive(Clone)]
pub struct MongoTeacherStore {
    client: MongoClient,
    db: Database,
}

impl MongoTeacherStore {
    /// Connects and pings the server once. The client is reused for the
    /// lifetime of the process.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");

        let mut client_options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::ServiceUnavailable(e.into())
        })?;
        client_options.app_name = Some("teacher-service".to_string());

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::ServiceUnavailable(e.into())
        })?;
        let db = client.database(database);

        let store = Self { client, db };
        store.ping().await?;

        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(store)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn teachers(&self) -> Collection<TeacherDocument> {
        self.db.collection(COLLECTION)
    }
}

/// Decoding failures are our fault; everything else means storage is unreachable.
fn storage_error(operation: &str, e: MongoError) -> AppError {
    tracing::error!(operation = %operation, "MongoDB operation failed: {}", e);
    let decoding = matches!(
        e.kind.as_ref(),
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_)
    );
    if decoding {
        AppError::InternalError(e.into())
    } else {
        AppError::from(e)
    }
}

#[async_trait]
impl TeacherStore for MongoTeacherStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| storage_error("ping", e))?;
        Ok(())
    }

    async fn insert(&self, teacher: TeacherDocument) -> Result<TeacherId, AppError> {
        let result = self
            .teachers()
            .insert_one(&teacher, None)
            .await
            .map_err(|e| storage_error("insert", e))?;

        result
            .inserted_id
            .as_object_id()
            .map(TeacherId::from)
            .ok_or_else(|| {
                tracing::error!(inserted_id = %result.inserted_id, "Inserted id is not an ObjectId");
                AppError::InternalError(anyhow::anyhow!("Storage returned an unexpected identifier"))
            })
    }

    async fn find_all(&self) -> Result<Vec<TeacherDocument>, AppError> {
        let cursor = self
            .teachers()
            .find(None, None)
            .await
            .map_err(|e| storage_error("find", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| storage_error("collect", e))
    }

    async fn find_by_id(&self, id: &TeacherId) -> Result<Option<TeacherDocument>, AppError> {
        self.teachers()
            .find_one(id.filter(), None)
            .await
            .map_err(|e| storage_error("find_one", e))
    }

    async fn update_fields(&self, id: &TeacherId, patch: &TeacherPatch) -> Result<bool, AppError> {
        let result = self
            .teachers()
            .update_one(id.filter(), doc! { "$set": patch.to_set_document() }, None)
            .await
            .map_err(|e| storage_error("update_one", e))?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &TeacherId) -> Result<bool, AppError> {
        let result = self
            .teachers()
            .delete_one(id.filter(), None)
            .await
            .map_err(|e| storage_error("delete_one", e))?;
        Ok(result.deleted_count > 0)
    }
}
